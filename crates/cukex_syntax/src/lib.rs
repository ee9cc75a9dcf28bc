//! Syntax frontend for Cucumber Expressions: tokenizer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by anything that needs the structure of an expression:
//! step-definition compilers, linters, editors, and the `cukex` command-line tool.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not resolve parameter types, build regular expressions, or
//!   match step text. Those consume the [`ast::Node`] tree produced here.
//! - Special-character identity (`{`, `(`, `/`, `\`, ...) comes from the `cukex_core::lang` registry.
//!
//! ## Examples
//! ```rust
//! use cukex_syntax::{ast::NodeKind, lexer, parser};
//!
//! let tokens = lexer::lex("I have {int} cucumber(s)").unwrap();
//! let ast = parser::parse_tokens(&tokens).unwrap();
//! assert_eq!(ast.kind(), NodeKind::Expression);
//! assert_eq!(ast.span().end, 24);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
