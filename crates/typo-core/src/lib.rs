//! Shared building blocks for the typo spell checker.
//!
//! - [`case`] -- case detection and the lowercase-initial variant of a token
//! - [`distance`] -- Levenshtein edit distance (full and bounded)
//! - [`enums`] -- affix kinds and engine-wide constants

pub mod case;
pub mod distance;
pub mod enums;
