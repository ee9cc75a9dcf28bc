//! CLI module for cukex
//!
//! This module provides the command-line interface.
//!
//! ## Commands
//!
//! - `parse <EXPRESSION>` - Print the syntax tree of an expression
//! - `lex <EXPRESSION>` - Print the tokens of an expression
//! - `check <EXPRESSION>... [--file FILE]` - Report expressions that fail to parse
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

use clap::{Parser, Subcommand, ValueEnum};

use crate::format::{OutputFormat, RenderConfig};

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

/// Parse and inspect Cucumber Expressions
#[derive(Parser, Debug)]
#[command(name = "cukex")]
#[command(version = VERSION)]
#[command(about = "Parse and inspect Cucumber Expressions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the syntax tree of an expression
    Parse {
        /// Expression to parse, e.g. "I have {int} cucumber(s)"
        #[arg(value_name = "EXPRESSION")]
        expression: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Tree)]
        format: Format,
        /// Omit node spans from tree output
        #[arg(long)]
        no_spans: bool,
        /// Spaces per nesting level in tree output
        #[arg(long, value_name = "N", default_value_t = 2)]
        indent: usize,
    },

    /// Print the tokens of an expression
    Lex {
        /// Expression to tokenize
        #[arg(value_name = "EXPRESSION")]
        expression: String,
    },

    /// Check that expressions parse, reporting every failure
    Check {
        /// Expressions to check
        #[arg(value_name = "EXPRESSION")]
        expressions: Vec<String>,
        /// Read additional expressions from a file, one per line
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// Output format flag for `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Tree,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Tree => OutputFormat::Tree,
            Format::Json => OutputFormat::Json,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Parse {
            expression,
            format,
            no_spans,
            indent,
        } => {
            let config = RenderConfig::new()
                .with_output(format.into())
                .with_spans(!no_spans)
                .with_indent_width(indent);
            commands::parse_expression(&expression, &config)
        }
        Command::Lex { expression } => commands::lex_expression(&expression),
        Command::Check { expressions, file } => commands::check_expressions(&expressions, file.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_flags() {
        let cli = Cli::try_parse_from(["cukex", "parse", "{int}", "--format", "json", "--no-spans"])
            .expect("arguments should parse");
        match cli.command {
            Command::Parse {
                expression,
                format,
                no_spans,
                indent,
            } => {
                assert_eq!(expression, "{int}");
                assert_eq!(format, Format::Json);
                assert!(no_spans);
                assert_eq!(indent, 2);
            }
            other => panic!("expected parse command, got {other:?}"),
        }
    }

    #[test]
    fn test_check_command_accepts_many_expressions() {
        let cli = Cli::try_parse_from(["cukex", "check", "a", "{b}", "--file", "steps.txt"])
            .expect("arguments should parse");
        match cli.command {
            Command::Check { expressions, file } => {
                assert_eq!(expressions, vec!["a".to_string(), "{b}".to_string()]);
                assert_eq!(file, Some(PathBuf::from("steps.txt")));
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_parse_failure_exits_with_failure() {
        let cli = Cli::try_parse_from(["cukex", "parse", "{color"]).expect("arguments should parse");
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("does not have a matching '}'"), "{}", err.message);
    }
}
