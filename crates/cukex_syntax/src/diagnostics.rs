//! Diagnostics and error reporting for Cucumber Expressions
//!
//! Every failure of the tokenizer or parser is a [`SyntaxError`]: a kind, a message, the span it is anchored at,
//! and optional hints. Rendering against the expression source goes through `miette` (see [`format_error`]).

use std::fmt;

use miette::{
    Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode, SourceSpan,
};

use crate::ast::Span;
use crate::lexer::TokenKind;
use cukex_core::errors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A `{` or `(` was opened but never closed.
    MissingEndToken,
    /// `\` followed by a character that has no special meaning.
    CantEscape,
    /// `\` as the very last character.
    EndOfLineCanNotBeEscaped,
    /// No parser in a rule list accepted a token (grammar configuration defect).
    NoEligibleParsers,
    /// The expression parser stopped before the end of the token stream (grammar configuration defect).
    UnconsumedTokens,
}

impl ErrorKind {
    /// Stable diagnostic code, e.g. `cukex::missing_end_token`.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::MissingEndToken => "cukex::missing_end_token",
            ErrorKind::CantEscape => "cukex::cant_escape",
            ErrorKind::EndOfLineCanNotBeEscaped => "cukex::end_of_line_escaped",
            ErrorKind::NoEligibleParsers => "cukex::internal::no_eligible_parsers",
            ErrorKind::UnconsumedTokens => "cukex::internal::unconsumed_tokens",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingEndToken => write!(f, "missing end token"),
            ErrorKind::CantEscape => write!(f, "invalid escape"),
            ErrorKind::EndOfLineCanNotBeEscaped => write!(f, "invalid escape"),
            ErrorKind::NoEligibleParsers | ErrorKind::UnconsumedTokens => write!(f, "internal parser error"),
        }
    }
}

/// A tokenizer or parser error with location information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
    pub hints: Vec<String>,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            hints: Vec::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// `begin` at `span` has no matching `end`.
    pub fn missing_end_token(begin: TokenKind, end: TokenKind, span: Span) -> Self {
        match (begin.symbol(), end.symbol()) {
            (Some(b), Some(e)) => Self::new(
                ErrorKind::MissingEndToken,
                errors::missing_end_token_message(b, e),
                span,
            )
            .with_hint(errors::missing_end_token_hint(b, e)),
            _ => Self::new(
                ErrorKind::MissingEndToken,
                format!("The {begin} does not have a matching {end}"),
                span,
            ),
        }
    }

    pub fn cant_escape(span: Span) -> Self {
        Self::new(ErrorKind::CantEscape, errors::cant_escape_message(), span).with_hint(errors::cant_escape_hint())
    }

    pub fn end_of_line_escaped(span: Span) -> Self {
        Self::new(
            ErrorKind::EndOfLineCanNotBeEscaped,
            errors::end_of_line_escaped_message(),
            span,
        )
        .with_hint(errors::end_of_line_escaped_hint())
    }

    pub fn no_eligible_parsers(found: TokenKind, span: Span) -> Self {
        Self::new(
            ErrorKind::NoEligibleParsers,
            format!("No eligible parsers for {found}"),
            span,
        )
    }

    pub fn unconsumed_tokens(consumed: usize, expected: usize, span: Span) -> Self {
        Self::new(
            ErrorKind::UnconsumedTokens,
            format!("Could not parse the whole expression: consumed {consumed} of {expected} tokens"),
            span,
        )
    }

    /// Return `true` for errors that indicate a defect in the grammar rather than in the user's expression.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind, ErrorKind::NoEligibleParsers | ErrorKind::UnconsumedTokens)
    }

    /// Attach the expression source so the error can be rendered by any `miette` handler.
    pub fn to_diagnostic(&self, name: &str, source: &str) -> SourceDiagnostic {
        let span = if self.span.is_empty() {
            // Widen zero-width anchors to one character so the caret is visible.
            Span::new(self.span.start, self.span.start + 1).to_byte_range(source)
        } else {
            self.span.to_byte_range(source)
        };
        SourceDiagnostic {
            kind: self.kind,
            message: self.message.clone(),
            source_code: NamedSource::new(name, source.to_string()),
            span: span.into(),
            label: self.kind.to_string(),
            help: (!self.hints.is_empty()).then(|| self.hints.join("\n")),
        }
    }
}

/// A [`SyntaxError`] bundled with its source, ready for rendering.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SourceDiagnostic {
    kind: ErrorKind,
    message: String,
    source_code: NamedSource<String>,
    span: SourceSpan,
    label: String,
    help: Option<String>,
}

impl Diagnostic for SourceDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help
            .as_ref()
            .map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.source_code)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.label.clone()),
            self.span,
        ))))
    }
}

/// Render an error against its source as a plain-text (colourless) report.
pub fn format_error(name: &str, source: &str, error: &SyntaxError) -> String {
    let diagnostic = error.to_diagnostic(name, source);
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    if handler.render_report(&mut out, &diagnostic).is_err() {
        // Fall back to the one-line form; rendering only fails on formatter errors.
        out = format!("{}: {}\n", error.kind, error.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_end_token_message_and_hint() {
        let err = SyntaxError::missing_end_token(TokenKind::BeginParameter, TokenKind::EndParameter, Span::new(0, 1));
        assert_eq!(err.kind, ErrorKind::MissingEndToken);
        assert_eq!(err.to_string(), "The '{' does not have a matching '}'");
        assert_eq!(
            err.hints,
            vec!["If you did not intend to use {} you can use '\\{' to escape the {".to_string()]
        );
        assert!(!err.is_internal());
    }

    #[test]
    fn test_internal_errors_are_flagged() {
        assert!(SyntaxError::no_eligible_parsers(TokenKind::Text, Span::new(0, 1)).is_internal());
        assert!(SyntaxError::unconsumed_tokens(1, 2, Span::point(0)).is_internal());
    }

    #[test]
    fn test_format_error_points_at_span() {
        let source = "I have {int cucumbers";
        let err = SyntaxError::missing_end_token(TokenKind::BeginParameter, TokenKind::EndParameter, Span::new(7, 8));
        let rendered = format_error("expression", source, &err);
        assert!(rendered.contains("cukex::missing_end_token"), "{rendered}");
        assert!(rendered.contains("The '{' does not have a matching '}'"), "{rendered}");
        assert!(rendered.contains(source), "{rendered}");
        assert!(rendered.contains("escape the {"), "{rendered}");
    }

    #[test]
    fn test_diagnostic_span_is_in_bytes() {
        let source = "é\\";
        let err = SyntaxError::end_of_line_escaped(Span::new(1, 2));
        let diagnostic = err.to_diagnostic("expression", source);
        assert_eq!(diagnostic.span.offset(), 2);
        assert_eq!(diagnostic.span.len(), 1);
    }
}
