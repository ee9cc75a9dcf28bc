//! Token types for the Cucumber Expression tokenizer.
//!
//! ## Notes
//! - [`TokenKind::StartOfLine`] and [`TokenKind::EndOfLine`] exist so the parser can name them in its grammar, but
//!   the tokenizer never stores them. They are synthesized by position in [`crate::token_helpers::TokenStream`].

use std::fmt;

use crate::ast::Span;
use cukex_core::lang::symbols::SymbolId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Virtual boundaries ==========
    StartOfLine,
    EndOfLine,

    // ========== Delimiters ==========
    BeginParameter, // {
    EndParameter,   // }
    BeginOptional,  // (
    EndOptional,    // )

    // ========== Separators ==========
    Alternation, // /
    WhiteSpace,

    // ========== Literals ==========
    Text,
}

impl TokenKind {
    /// Map a special character to the token kind it produces.
    ///
    /// Returns `None` for the escape character, which never forms a token of its own.
    pub fn from_symbol(id: SymbolId) -> Option<Self> {
        match id {
            SymbolId::BeginParameter => Some(TokenKind::BeginParameter),
            SymbolId::EndParameter => Some(TokenKind::EndParameter),
            SymbolId::BeginOptional => Some(TokenKind::BeginOptional),
            SymbolId::EndOptional => Some(TokenKind::EndOptional),
            SymbolId::Alternation => Some(TokenKind::Alternation),
            SymbolId::Escape => None,
        }
    }

    /// The special character this kind is spelled with, if any.
    pub fn symbol(&self) -> Option<SymbolId> {
        match self {
            TokenKind::BeginParameter => Some(SymbolId::BeginParameter),
            TokenKind::EndParameter => Some(SymbolId::EndParameter),
            TokenKind::BeginOptional => Some(SymbolId::BeginOptional),
            TokenKind::EndOptional => Some(SymbolId::EndOptional),
            TokenKind::Alternation => Some(SymbolId::Alternation),
            TokenKind::StartOfLine | TokenKind::EndOfLine | TokenKind::WhiteSpace | TokenKind::Text => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::StartOfLine => "StartOfLine",
            TokenKind::EndOfLine => "EndOfLine",
            TokenKind::BeginParameter => "BeginParameter",
            TokenKind::EndParameter => "EndParameter",
            TokenKind::BeginOptional => "BeginOptional",
            TokenKind::EndOptional => "EndOptional",
            TokenKind::Alternation => "Alternation",
            TokenKind::WhiteSpace => "WhiteSpace",
            TokenKind::Text => "Text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its kind, source span, and literal (unescaped) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }
}
