//! Shared user-facing error text for Cucumber Expressions.
//!
//! The tokenizer and parser build their diagnostics from these helpers so that wording stays identical no matter
//! which layer reports the problem.

use crate::lang::symbols::{self, SymbolId};

/// Characters that may be escaped, as listed in user-facing messages.
pub const ESCAPABLE_CHARACTERS: &str = "'{', '}', '(', ')', '\\', '/' and whitespace";

/// Message for a `\` followed by a character that has no special meaning.
pub fn cant_escape_message() -> String {
    format!("Only the characters {ESCAPABLE_CHARACTERS} can be escaped")
}

/// Hint for [`cant_escape_message`].
pub fn cant_escape_hint() -> String {
    "If you did mean to use an '\\' you can use '\\\\' to escape it".to_string()
}

/// Message for a trailing, unpaired `\`.
pub fn end_of_line_escaped_message() -> String {
    "The end of line can not be escaped".to_string()
}

/// Hint for [`end_of_line_escaped_message`].
pub fn end_of_line_escaped_hint() -> String {
    "You can use '\\\\' to escape the '\\'".to_string()
}

/// Message for an opening delimiter that is never closed.
///
/// ## Examples
/// ```rust
/// use cukex_core::errors::missing_end_token_message;
/// use cukex_core::lang::symbols::SymbolId;
///
/// assert_eq!(
///     missing_end_token_message(SymbolId::BeginParameter, SymbolId::EndParameter),
///     "The '{' does not have a matching '}'"
/// );
/// ```
pub fn missing_end_token_message(begin: SymbolId, end: SymbolId) -> String {
    format!(
        "The '{}' does not have a matching '{}'",
        symbols::as_char(begin),
        symbols::as_char(end)
    )
}

/// Hint for [`missing_end_token_message`].
pub fn missing_end_token_hint(begin: SymbolId, end: SymbolId) -> String {
    let (b, e) = (symbols::as_char(begin), symbols::as_char(end));
    format!("If you did not intend to use {b}{e} you can use '\\{b}' to escape the {b}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_end_token_hint_for_optional() {
        assert_eq!(
            missing_end_token_hint(SymbolId::BeginOptional, SymbolId::EndOptional),
            "If you did not intend to use () you can use '\\(' to escape the ("
        );
    }

    #[test]
    fn cant_escape_lists_every_symbol() {
        let message = cant_escape_message();
        for entry in symbols::SYMBOLS {
            assert!(
                message.contains(&format!("'{}'", entry.canonical)),
                "message should mention {:?}",
                entry.canonical
            );
        }
    }
}
