//! Affix grammar compiler.
//!
//! Turns the text of a Hunspell-style `.aff` file into an immutable
//! [`CompiledRules`] value: the affix rule table, compound-rule sources,
//! the replacement table, and scalar flag directives.
//!
//! # Architecture
//!
//! - [`parser`] -- line scanner and directive dispatch
//! - [`rule`] -- affix rules, entries, and single-entry application
//! - [`condition`] -- anchored regular-expression conditions
//! - [`codes`] -- rule-code tokenization (2-character groups)
//! - [`flags`] -- typed scalar directives (`ONLYINCOMPOUND`, `NOSUGGEST`, ...)
//! - [`compound`] -- `COMPOUNDRULE` sources and their pattern compilation
//! - [`replacement`] -- the `REP` table

pub mod codes;
pub mod compound;
pub mod condition;
pub mod flags;
pub mod parser;
pub mod replacement;
pub mod rule;

pub use compound::CompoundRule;
pub use flags::{Flag, FlagMap};
pub use parser::{CompiledRules, compile};
pub use replacement::ReplacementTable;
pub use rule::{AffixEntry, AffixRule, Removal};

/// Error type for affix parsing.
///
/// Malformed individual lines never produce an error; they are skipped with
/// a warning. Only structural damage that makes the rest of the file
/// unreadable is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AffError {
    #[error(
        "{directive} block at line {line} declares {expected} entries but only {available} lines follow"
    )]
    TruncatedBlock {
        directive: String,
        line: usize,
        expected: usize,
        available: usize,
    },
}
