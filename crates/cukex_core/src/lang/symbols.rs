//! Special-character vocabulary.
//!
//! This module defines the canonical set of characters that carry meaning in a Cucumber Expression: the parameter
//! and optional delimiters, the alternation separator, and the escape character.
//!
//! ## Notes
//! - Whitespace is not a registry entry; it is a character *class* (see [`is_whitespace`]).
//! - This module is vocabulary only. It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use cukex_core::lang::symbols::{self, SymbolCategory, SymbolId};
//!
//! assert_eq!(symbols::from_char('('), Some(SymbolId::BeginOptional));
//! assert_eq!(symbols::category(SymbolId::Escape), SymbolCategory::Escape);
//! assert!(symbols::can_escape('/'));
//! assert!(!symbols::can_escape('a'));
//! ```

/// Broad syntactic grouping for special characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// Opening and closing brackets of parameters and optionals.
    Delimiter,
    /// The `/` between alternatives.
    Separator,
    /// The `\` that turns the following character into literal text.
    Escape,
}

/// Stable identifier for special characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolId {
    BeginParameter,
    EndParameter,
    BeginOptional,
    EndOptional,
    Alternation,
    Escape,
}

/// Metadata for a special character.
#[derive(Debug, Clone, Copy)]
pub struct SymbolInfo {
    pub id: SymbolId,
    pub canonical: char,
    pub category: SymbolCategory,
    /// Matching closing symbol, for opening delimiters.
    pub closed_by: Option<SymbolId>,
    pub description: &'static str,
}

/// Registry of all special characters.
pub const SYMBOLS: &[SymbolInfo] = &[
    info(
        SymbolId::BeginParameter,
        '{',
        SymbolCategory::Delimiter,
        Some(SymbolId::EndParameter),
        "Opens a parameter, e.g. `{int}`.",
    ),
    info(
        SymbolId::EndParameter,
        '}',
        SymbolCategory::Delimiter,
        None,
        "Closes a parameter.",
    ),
    info(
        SymbolId::BeginOptional,
        '(',
        SymbolCategory::Delimiter,
        Some(SymbolId::EndOptional),
        "Opens optional text, e.g. `cucumber(s)`.",
    ),
    info(
        SymbolId::EndOptional,
        ')',
        SymbolCategory::Delimiter,
        None,
        "Closes optional text.",
    ),
    info(
        SymbolId::Alternation,
        '/',
        SymbolCategory::Separator,
        None,
        "Separates alternatives between whitespace boundaries, e.g. `belly/stomach`.",
    ),
    info(
        SymbolId::Escape,
        '\\',
        SymbolCategory::Escape,
        None,
        "Makes the next special character or whitespace literal text.",
    ),
];

/// Return the canonical character for a symbol.
pub fn as_char(id: SymbolId) -> char {
    info_for(id).canonical
}

/// Return the category for a symbol.
pub fn category(id: SymbolId) -> SymbolCategory {
    info_for(id).category
}

/// Return the symbol that closes `id`, if `id` is an opening delimiter.
pub fn closed_by(id: SymbolId) -> Option<SymbolId> {
    info_for(id).closed_by
}

/// Return the full metadata entry for a symbol.
pub fn info_for(id: SymbolId) -> &'static SymbolInfo {
    // Registry order mirrors the enum declaration order.
    let index = match id {
        SymbolId::BeginParameter => 0,
        SymbolId::EndParameter => 1,
        SymbolId::BeginOptional => 2,
        SymbolId::EndOptional => 3,
        SymbolId::Alternation => 4,
        SymbolId::Escape => 5,
    };
    &SYMBOLS[index]
}

/// Resolve a character to its symbol identifier.
pub fn from_char(c: char) -> Option<SymbolId> {
    SYMBOLS.iter().find(|s| s.canonical == c).map(|s| s.id)
}

/// Return `true` if `c` separates words and therefore acts as an alternation boundary.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Return `true` if `c` may follow the escape character.
///
/// Only whitespace and the registered symbols (including the escape character itself) can be escaped.
pub fn can_escape(c: char) -> bool {
    is_whitespace(c) || from_char(c).is_some()
}

const fn info(
    id: SymbolId,
    canonical: char,
    category: SymbolCategory,
    closed_by: Option<SymbolId>,
    description: &'static str,
) -> SymbolInfo {
    SymbolInfo {
        id,
        canonical,
        category,
        closed_by,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_for_matches_registry_order() {
        for entry in SYMBOLS {
            assert_eq!(info_for(entry.id).id, entry.id);
        }
    }

    #[test]
    fn openers_are_closed_by_delimiters() {
        assert_eq!(closed_by(SymbolId::BeginParameter), Some(SymbolId::EndParameter));
        assert_eq!(closed_by(SymbolId::BeginOptional), Some(SymbolId::EndOptional));
        assert_eq!(closed_by(SymbolId::Alternation), None);
    }

    #[test]
    fn escapable_characters() {
        for c in ['{', '}', '(', ')', '/', '\\', ' ', '\t'] {
            assert!(can_escape(c), "{c:?} should be escapable");
        }
        for c in ['a', '1', '[', '|', 'é'] {
            assert!(!can_escape(c), "{c:?} should not be escapable");
        }
    }
}
