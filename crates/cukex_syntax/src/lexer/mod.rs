//! Tokenizer for Cucumber Expressions
//!
//! Handles:
//! - Special characters (`{`, `}`, `(`, `)`, `/`), one token each
//! - Runs of whitespace, merged into a single token
//! - Runs of literal text, merged into a single token
//! - Escapes (`\{`, `\ `, `\\`, ...), which turn the escaped character into text
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use crate::diagnostics::SyntaxError;
use cukex_core::lang::symbols::{self, SymbolId};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Offsets are counted in chars. A token's span includes any escape characters
// inside it, so the spans of consecutive tokens always touch:
//
//   a\{b c   →   Text "a{b" [0..4)  WhiteSpace " " [4..5)  Text "c" [5..6)
// ============================================================================

/// Tokenizer for a single Cucumber Expression.
pub struct Lexer<'a> {
    chars: std::str::Chars<'a>,
    /// Char offset of the next unread character.
    position: usize,
    tokens: Vec<Token>,
    /// Pending token being accumulated.
    pending: Option<Pending>,
}

struct Pending {
    kind: TokenKind,
    start: usize,
    text: String,
}

impl<'a> Lexer<'a> {
    /// Create a new tokenizer for the given expression.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            position: 0,
            tokens: Vec::new(),
            pending: None,
        }
    }

    /// Tokenize the entire expression.
    ///
    /// The virtual start-of-line and end-of-line tokens are *not* part of the result.
    ///
    /// ## Errors
    /// - [`crate::diagnostics::ErrorKind::CantEscape`] if `\` precedes a character that cannot be escaped.
    /// - [`crate::diagnostics::ErrorKind::EndOfLineCanNotBeEscaped`] if the expression ends with an unpaired `\`.
    pub fn tokenize(mut self) -> Result<Vec<Token>, SyntaxError> {
        let escape = symbols::as_char(SymbolId::Escape);

        while let Some(c) = self.advance() {
            let start = self.position - 1;
            if c == escape {
                let Some(escaped) = self.advance() else {
                    return Err(SyntaxError::end_of_line_escaped(Span::new(start, start + 1)));
                };
                if !symbols::can_escape(escaped) {
                    return Err(SyntaxError::cant_escape(Span::new(start + 1, start + 2)));
                }
                self.push(TokenKind::Text, escaped, start);
            } else {
                self.push(classify(c), c, start);
            }
        }

        self.flush(self.position);
        Ok(self.tokens)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.position += 1;
        Some(c)
    }

    /// Append `c` (which started at `start`) to the pending token, or start a new one.
    fn push(&mut self, kind: TokenKind, c: char, start: usize) {
        if let Some(pending) = self.pending.as_mut() {
            if pending.kind == kind && merges(kind) {
                pending.text.push(c);
                return;
            }
        }
        self.flush(start);
        self.pending = Some(Pending {
            kind,
            start,
            text: c.to_string(),
        });
    }

    fn flush(&mut self, end: usize) {
        if let Some(pending) = self.pending.take() {
            self.tokens
                .push(Token::new(pending.kind, Span::new(pending.start, end), pending.text));
        }
    }
}

/// Token kind of an unescaped character.
fn classify(c: char) -> TokenKind {
    if symbols::is_whitespace(c) {
        return TokenKind::WhiteSpace;
    }
    symbols::from_char(c)
        .and_then(TokenKind::from_symbol)
        .unwrap_or(TokenKind::Text)
}

/// Only runs of text and runs of whitespace collapse into one token.
fn merges(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Text | TokenKind::WhiteSpace)
}

/// Convenience function to tokenize an expression.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
