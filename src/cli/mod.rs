//! CLI module for the Jack syntax analyzer.
//!
//! ## Usage
//!
//! - `jackal <PATH>...` - analyze `.jack` files (or directories of them) and
//!   write one `.xml` node-sequence file next to each input
//! - `jackal --stdout <PATH>...` - print node sequences instead of writing
//! - `jackal --lex <FILE>` - tokenize only (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Jack syntax analyzer
#[derive(Parser, Debug)]
#[command(name = "jackal")]
#[command(version = VERSION)]
#[command(about = "Syntax analyzer for the Jack programming language", long_about = None)]
pub struct Cli {
    /// `.jack` files or directories containing them; together they form one
    /// compilation run
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Print node sequences to stdout instead of writing `.xml` files
    #[arg(long)]
    pub stdout: bool,

    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "paths")]
    pub lex_file: Option<PathBuf>,
}

/// Main CLI entry point. Parses arguments, dispatches, and exits.
pub fn run() {
    let cli = Cli::parse();

    let result = if let Some(file) = cli.lex_file {
        commands::lex(&file)
    } else if cli.paths.is_empty() {
        Err(CliError::failure(
            "no input given; pass one or more .jack files or directories (see --help)",
        ))
    } else {
        commands::analyze(&cli.paths, cli.stdout)
    };

    match result {
        Ok(()) => process::exit(ExitCode::SUCCESS.0),
        Err(err) => {
            eprintln!("{err}");
            process::exit(err.exit_code.0);
        }
    }
}
