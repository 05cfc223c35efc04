//! CLI command implementations.

use std::fs;
use std::path::{Path, PathBuf};

use miette::NamedSource;

use crate::cli::{CliError, CliResult};
use crate::driver::{self, SourceUnit};

/// Analyze a run of `.jack` files and emit their node sequences.
///
/// Each path may be a `.jack` file or a directory; directories contribute
/// their `.jack` entries (non-recursively, sorted by name). All discovered
/// files form a single run. Output goes to an `.xml` sibling of each input,
/// or to stdout when `to_stdout` is set.
pub fn analyze(paths: &[PathBuf], to_stdout: bool) -> CliResult<()> {
    let files = discover_inputs(paths)?;
    tracing::info!(files = files.len(), "starting analysis run");

    let mut units = Vec::with_capacity(files.len());
    for file in &files {
        let text = fs::read_to_string(file)
            .map_err(|e| CliError::failure(format!("failed to read `{}`: {e}", file.display())))?;
        units.push(SourceUnit::new(file.display().to_string(), text));
    }

    let analyzed = match driver::analyze_run(&units) {
        Ok(analyzed) => analyzed,
        Err(err) => return Err(render_unit_error(err, &units)),
    };

    for (file, unit) in files.iter().zip(&analyzed) {
        let mut output = unit.nodes.join("\n");
        output.push('\n');
        if to_stdout {
            print!("{output}");
        } else {
            let target = file.with_extension("xml");
            fs::write(&target, output).map_err(|e| {
                CliError::failure(format!("failed to write `{}`: {e}", target.display()))
            })?;
            tracing::info!(target = %target.display(), nodes = unit.nodes.len(), "wrote node sequence");
        }
    }

    Ok(())
}

/// Tokenize a single file and print its tokens with spans.
pub fn lex(file: &Path) -> CliResult<()> {
    let text = fs::read_to_string(file)
        .map_err(|e| CliError::failure(format!("failed to read `{}`: {e}", file.display())))?;

    let tokens = match jackal_syntax::lexer::lex(&text) {
        Ok(tokens) => tokens,
        Err(err) => {
            let report = miette::Report::new(err)
                .with_source_code(NamedSource::new(file.display().to_string(), text));
            return Err(CliError::failure(format!("{report:?}")));
        }
    };

    for token in &tokens {
        println!("{}..{}\t{}", token.span.start, token.span.end, token.kind);
    }
    println!("{} tokens", tokens.len());

    Ok(())
}

/// Expand the given paths into the sorted list of `.jack` files for one run.
fn discover_inputs(paths: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|e| {
                CliError::failure(format!("failed to read directory `{}`: {e}", path.display()))
            })?;
            let mut found = Vec::new();
            for entry in entries {
                let entry = entry.map_err(|e| {
                    CliError::failure(format!(
                        "failed to read directory `{}`: {e}",
                        path.display()
                    ))
                })?;
                let candidate = entry.path();
                if candidate.is_file() && candidate.extension().is_some_and(|ext| ext == "jack") {
                    found.push(candidate);
                }
            }
            found.sort();
            files.extend(found);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(CliError::failure(format!(
                "`{}` is not a file or directory",
                path.display()
            )));
        }
    }

    if files.is_empty() {
        return Err(CliError::failure("no .jack files found in the given paths"));
    }
    Ok(files)
}

/// Render a unit error as a full miette report, attaching the failing unit's
/// source text so spans resolve to lines and columns.
fn render_unit_error(err: driver::UnitError, units: &[SourceUnit]) -> CliError {
    let source = units
        .iter()
        .find(|unit| unit.name == err.unit)
        .map(|unit| unit.text.clone())
        .unwrap_or_default();
    let name = err.unit.clone();
    let report = miette::Report::new(err).with_source_code(NamedSource::new(name, source));
    CliError::failure(format!("{report:?}"))
}
