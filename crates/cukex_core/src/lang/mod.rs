//! Cucumber Expression vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. [`symbols::SymbolId`]) and look up spellings and metadata via registry
//! tables instead of comparing raw characters at every call site.
//!
//! ## Examples
//! ```rust
//! use cukex_core::lang::symbols::{self, SymbolId};
//!
//! assert_eq!(symbols::from_char('{'), Some(SymbolId::BeginParameter));
//! assert_eq!(symbols::as_char(SymbolId::Alternation), '/');
//! ```

pub mod symbols;
