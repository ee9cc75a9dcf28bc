//! Position-based lookups over a token slice.
//!
//! The parser addresses tokens by signed position so that the slot before the first token can be named. Positions
//! outside the real token range answer as the virtual boundaries:
//! - `position < 0` is [`TokenKind::StartOfLine`] with span `0..0`
//! - `position >= len` is [`TokenKind::EndOfLine`] with an empty span at the end of the last token
//!
//! The token vector itself is never padded, so `len()` always counts real tokens.

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};

/// Signed index into a token slice.
pub type Position = isize;

/// Read-only view of a token slice with virtual start/end-of-line sentinels.
#[derive(Debug, Clone, Copy)]
pub struct TokenStream<'a> {
    tokens: &'a [Token],
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }

    /// Number of real tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Return the real token at `at`, or `None` for the virtual boundaries.
    pub fn get(&self, at: Position) -> Option<&'a Token> {
        usize::try_from(at).ok().and_then(|index| self.tokens.get(index))
    }

    /// Return the kind at `at`, including the virtual boundaries.
    pub fn kind_at(&self, at: Position) -> TokenKind {
        match self.get(at) {
            Some(token) => token.kind,
            None if at < 0 => TokenKind::StartOfLine,
            None => TokenKind::EndOfLine,
        }
    }

    /// Return the span at `at`, including the virtual boundaries.
    pub fn span_at(&self, at: Position) -> Span {
        match self.get(at) {
            Some(token) => token.span,
            None if at < 0 => Span::point(0),
            None => Span::point(self.tokens.last().map_or(0, |t| t.span.end)),
        }
    }

    /// Return `true` if the token at `at` has kind `kind`.
    pub fn looking_at(&self, at: Position, kind: TokenKind) -> bool {
        if at < 0 {
            return kind == TokenKind::StartOfLine;
        }
        if at >= self.end_position() {
            return kind == TokenKind::EndOfLine;
        }
        self.kind_at(at) == kind
    }

    /// Return `true` if the token at `at` has any of `kinds`.
    pub fn looking_at_any(&self, at: Position, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|&kind| self.looking_at(at, kind))
    }

    /// First position past the real tokens (the end-of-line slot).
    pub fn end_position(&self) -> Position {
        // Token vectors come from a single expression string and never approach `isize::MAX`.
        self.tokens.len() as Position
    }
}

impl TokenKind {
    /// Return `true` for kinds that delimit an alternation: whitespace and the line boundaries.
    pub fn is_boundary(&self) -> bool {
        matches!(
            self,
            TokenKind::StartOfLine | TokenKind::EndOfLine | TokenKind::WhiteSpace
        )
    }

    /// Return `true` for the kinds that only exist as sentinels.
    pub fn is_virtual(&self) -> bool {
        matches!(self, TokenKind::StartOfLine | TokenKind::EndOfLine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;

    #[test]
    fn test_virtual_boundaries() {
        let tokens = lexer::lex("a b").unwrap();
        let stream = TokenStream::new(&tokens);

        assert!(stream.looking_at(-1, TokenKind::StartOfLine));
        assert!(!stream.looking_at(-1, TokenKind::Text));
        assert!(stream.looking_at(3, TokenKind::EndOfLine));
        assert!(stream.looking_at(7, TokenKind::EndOfLine));
        assert!(!stream.looking_at(0, TokenKind::StartOfLine));
        assert!(stream.looking_at(1, TokenKind::WhiteSpace));
    }

    #[test]
    fn test_looking_at_any() {
        let tokens = lexer::lex("a b").unwrap();
        let stream = TokenStream::new(&tokens);
        let boundaries = [TokenKind::StartOfLine, TokenKind::WhiteSpace];

        assert!(stream.looking_at_any(-1, &boundaries));
        assert!(stream.looking_at_any(1, &boundaries));
        assert!(!stream.looking_at_any(0, &boundaries));
        assert!(!stream.looking_at_any(3, &boundaries));
    }

    #[test]
    fn test_sentinel_spans() {
        let tokens = lexer::lex("{x}").unwrap();
        let stream = TokenStream::new(&tokens);

        assert_eq!(stream.span_at(-1), Span::point(0));
        assert_eq!(stream.span_at(3), Span::point(3));
        assert_eq!(TokenStream::new(&[]).span_at(0), Span::point(0));
        assert_eq!(stream.len(), 3);
    }
}
