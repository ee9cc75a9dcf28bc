//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::format::{self, OutputFormat, RenderConfig, RenderError};
use cukex_syntax::{diagnostics, lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Source name shown in diagnostics for expressions given on the command line.
const ARGUMENT_SOURCE: &str = "<expression>";

/// Parse an expression and print its AST.
pub fn parse_expression(expression: &str, config: &RenderConfig) -> CliResult<ExitCode> {
    match format::render_expression(expression, config) {
        Ok(rendered) => {
            print!("{rendered}");
            if config.output == OutputFormat::Json {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(RenderError::Syntax(err)) => {
            tracing::debug!(kind = ?err.kind, span = %err.span, "parse failed");
            Err(CliError::failure(
                diagnostics::format_error(ARGUMENT_SOURCE, expression, &err).trim_end(),
            ))
        }
        Err(err) => Err(CliError::failure(format!("Error: {err}"))),
    }
}

/// Tokenize an expression and print one token per line.
pub fn lex_expression(expression: &str) -> CliResult<ExitCode> {
    let tokens = lexer::lex(expression).map_err(|err| {
        CliError::failure(diagnostics::format_error(ARGUMENT_SOURCE, expression, &err).trim_end())
    })?;

    for token in &tokens {
        println!("{:<15} {:<8} {:?}", token.kind.to_string(), token.span.to_string(), token.text);
    }
    Ok(ExitCode::SUCCESS)
}

/// An expression to check, with the name used in its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInput {
    pub name: String,
    pub expression: String,
}

/// Collect expressions from arguments and, optionally, a file with one expression per line.
///
/// Blank lines in the file are skipped; diagnostics name file entries as `path:line`.
pub fn collect_inputs(expressions: &[String], file: Option<&Path>) -> CliResult<Vec<CheckInput>> {
    let mut inputs: Vec<CheckInput> = expressions
        .iter()
        .map(|expression| CheckInput {
            name: ARGUMENT_SOURCE.to_string(),
            expression: expression.clone(),
        })
        .collect();

    if let Some(path) = file {
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::failure(format!("Error reading {}: {}", path.display(), e)))?;
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            inputs.push(CheckInput {
                name: format!("{}:{}", path.display(), index + 1),
                expression: line.to_string(),
            });
        }
    }

    Ok(inputs)
}

/// Parse one input, returning its rendered diagnostic on failure.
pub fn check_input(input: &CheckInput) -> Option<String> {
    match parser::parse(&input.expression) {
        Ok(_) => None,
        Err(err) => {
            if err.is_internal() {
                tracing::warn!(name = %input.name, kind = ?err.kind, "internal parser error");
            }
            Some(diagnostics::format_error(&input.name, &input.expression, &err))
        }
    }
}

/// Check every expression and report the ones that fail to parse.
pub fn check_expressions(expressions: &[String], file: Option<&Path>) -> CliResult<ExitCode> {
    let inputs = collect_inputs(expressions, file)?;
    if inputs.is_empty() {
        return Err(CliError::failure("Error: no expressions to check"));
    }

    let mut failures = 0;
    for input in &inputs {
        if let Some(report) = check_input(input) {
            eprintln!("{}", report.trim_end());
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(CliError::failure(format!(
            "{} of {} expressions failed to parse",
            failures,
            inputs.len()
        )));
    }
    println!("{} expressions ok", inputs.len());
    Ok(ExitCode::SUCCESS)
}
