//! Parser for Cucumber Expressions
//!
//! Converts a token stream into a single [`NodeKind::Expression`] root following this grammar:
//!
//! ```text
//! cucumber-expression := ( alternation | optional | parameter | text )*
//! alternation         := (?<=boundary) + alternative* + ( '/' + alternative* )+ + (?=boundary)
//! boundary            := whitespace | ^ | $
//! alternative         := optional | parameter | text
//! optional            := '(' + option* + ')'
//! option              := parameter | text
//! parameter           := '{' + text* + '}'
//! text                := token
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use cukex_syntax::ast::NodeKind;
//! use cukex_syntax::parser;
//!
//! let ast = parser::parse("I have {int} cucumber(s)").unwrap();
//! assert_eq!(ast.kind(), NodeKind::Expression);
//! assert_eq!(ast.children()[4].kind(), NodeKind::Parameter);
//! ```

use crate::ast::{Node, NodeKind, Span};
use crate::diagnostics::SyntaxError;
use crate::lexer::{self, Token, TokenKind};
use crate::token_helpers::{Position, TokenStream};

// NOTE: This module is split across multiple files using `include!` to keep all rules in the
// same Rust module (they refer to each other through `Rule`) while keeping each file focused.

include!("parser/core.rs");
include!("parser/leaves.rs");
include!("parser/between.rs");
include!("parser/alternation.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
