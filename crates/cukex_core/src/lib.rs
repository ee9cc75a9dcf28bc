//! Provide the canonical vocabulary of the Cucumber Expression language.
//!
//! This crate is intentionally small and dependency-free. It contains the facts about the language that both the
//! tokenizer and any downstream tooling (highlighters, compilers, documentation generators) need to agree on:
//! which characters are special, which of them may be escaped, and the wording of user-facing errors.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no syntax-tree types.
//! - Enforcement of the grammar lives in `cukex_syntax`; this crate only answers lookups.

pub mod errors;
pub mod lang;
