//! Run orchestration over a set of compilation units.
//!
//! A run is the complete set of units known up front; streaming units in
//! after parsing has started is unsupported, because the forward-declaration
//! pass must see every unit before any unit's body is parsed. The driver
//! enforces that ordering: lex everything, build the class registry from
//! every token sequence, and only then parse unit bodies against the frozen
//! registry.

use jackal_syntax::diagnostics::AnalyzeError;
use jackal_syntax::engine;
use jackal_syntax::lexer::{self, Token};
use jackal_syntax::registry::ClassRegistry;
use miette::Diagnostic;
use thiserror::Error;

/// One compilation unit's worth of raw source text.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Display name, usually the file path.
    pub name: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A successfully analyzed unit: its name and its node sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedUnit {
    pub name: String,
    pub nodes: Vec<String>,
}

/// A core error with the originating unit's identity attached.
#[derive(Debug, Error, Diagnostic)]
#[error("failed to analyze `{unit}`")]
pub struct UnitError {
    pub unit: String,
    #[source]
    #[diagnostic_source]
    pub source: AnalyzeError,
}

impl UnitError {
    fn new(unit: impl Into<String>, source: AnalyzeError) -> Self {
        Self {
            unit: unit.into(),
            source,
        }
    }
}

/// Analyze a complete run of compilation units.
///
/// Output order matches input order. The first failing unit aborts the run;
/// no partial node sequence is ever returned.
#[tracing::instrument(skip_all, fields(unit_count = units.len()))]
pub fn analyze_run(units: &[SourceUnit]) -> Result<Vec<AnalyzedUnit>, UnitError> {
    // Phase 0: lex every unit. The registry pass needs all token sequences.
    let mut sequences: Vec<Vec<Token>> = Vec::with_capacity(units.len());
    for unit in units {
        let tokens = lexer::lex(&unit.text).map_err(|e| UnitError::new(&unit.name, e.into()))?;
        tracing::debug!(unit = %unit.name, tokens = tokens.len(), "lexed unit");
        sequences.push(tokens);
    }

    // Phase 1: forward declare every class. Hard ordering barrier: this must
    // complete for all units before any body parse starts.
    let classes = ClassRegistry::from_units(
        units
            .iter()
            .zip(&sequences)
            .map(|(unit, tokens)| (unit.name.as_str(), tokens.as_slice())),
    )
    .map_err(|e| UnitError::new(e.unit().to_string(), e.into()))?;
    tracing::debug!(classes = classes.len(), "class registry complete");

    // Phase 2: parse each unit body against the frozen registry.
    let mut analyzed = Vec::with_capacity(units.len());
    for (unit, tokens) in units.iter().zip(&sequences) {
        let nodes = engine::compile_unit(tokens, &classes).map_err(|e| UnitError::new(&unit.name, e))?;
        analyzed.push(AnalyzedUnit {
            name: unit.name.clone(),
            nodes,
        });
    }

    tracing::info!(units = analyzed.len(), classes = classes.len(), "analysis complete");
    Ok(analyzed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_unit_run() {
        let units = [SourceUnit::new("Main.jack", "class Main { }")];
        let analyzed = analyze_run(&units).unwrap();
        assert_eq!(analyzed.len(), 1);
        assert_eq!(analyzed[0].name, "Main.jack");
        assert_eq!(analyzed[0].nodes.first().map(String::as_str), Some("<class>"));
    }

    #[test]
    fn test_error_names_the_unit() {
        let units = [
            SourceUnit::new("Good.jack", "class Good { }"),
            SourceUnit::new("Bad.jack", "class Bad { field Unknown u; }"),
        ];
        let err = analyze_run(&units).unwrap_err();
        assert_eq!(err.unit, "Bad.jack");
    }

    #[test]
    fn test_lex_failure_names_the_unit() {
        let units = [SourceUnit::new("Odd.jack", "class Odd { let x = 99999; }")];
        let err = analyze_run(&units).unwrap_err();
        assert_eq!(err.unit, "Odd.jack");
        assert!(matches!(err.source, AnalyzeError::Lex(_)));
    }

    #[test]
    fn test_forward_declare_failure_aborts_the_run() {
        // A malformed header anywhere fails the whole run, even though the
        // first unit on its own is fine.
        let units = [
            SourceUnit::new("Main.jack", "class Main { }"),
            SourceUnit::new("Broken.jack", "var int x;"),
        ];
        let err = analyze_run(&units).unwrap_err();
        assert_eq!(err.unit, "Broken.jack");
        assert!(matches!(err.source, AnalyzeError::ForwardDeclare(_)));
    }
}
