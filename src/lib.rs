#![forbid(unsafe_code)]
//! cukex: a parser for Cucumber Expressions
//!
//! Cucumber Expressions mix literal step text with `{parameter}`, `(optional)`, and `alternative/alternation`
//! syntax. This crate re-exports the syntax frontend (tokenizer, parser, AST, diagnostics) and adds rendering of the
//! resulting trees plus the `cukex` command-line tool.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use cukex::format::{render_expression, RenderConfig};
//!
//! let tree = render_expression("belly/stomach", &RenderConfig::new().with_spans(false)).unwrap();
//! assert!(tree.starts_with("Expression\n  Alternation\n"));
//! ```

pub mod cli;
pub mod format;

pub use cukex_core::lang;
pub use cukex_syntax::ast;
pub use cukex_syntax::diagnostics;
pub use cukex_syntax::lexer;
pub use cukex_syntax::parser;

pub use cukex_syntax::ast::{Node, NodeKind, Span};
pub use cukex_syntax::diagnostics::{ErrorKind, SyntaxError};
pub use cukex_syntax::parser::{parse, parse_tokens};
pub use format::{OutputFormat, RenderConfig, RenderError, render_expression};
