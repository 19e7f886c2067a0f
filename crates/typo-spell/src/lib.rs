//! Spell checking and suggestion over a compiled affix grammar.
//!
//! A [`lexicon::Lexicon`] joins the rules compiled by `typo-aff` with a
//! parsed stem list. Validation and suggestion run read-only against it.
//! [`handle::TypoHandle`] wraps a lexicon with options, caches, and staged
//! loading, and is the entry point most callers want.
//!
//! # Architecture
//!
//! - [`dictionary`] -- stem list and frequency table
//! - [`applier`] -- rule application with continuation classes
//! - [`lexicon`] -- compiled, immutable engine state
//! - [`speller`] -- word validation, prefix normalization, result cache
//! - [`suggestion`] -- candidate generation and ranking
//! - [`handle`] -- top-level handle

pub mod applier;
pub mod dictionary;
pub mod lexicon;
pub mod speller;

#[cfg(feature = "suggest")]
pub mod suggestion;

#[cfg(feature = "handle")]
pub mod handle;

pub use lexicon::Lexicon;
pub use speller::Speller;

#[cfg(feature = "handle")]
pub use handle::{SpellOptions, TypoError, TypoHandle};
