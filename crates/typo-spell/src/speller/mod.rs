// Word validation

pub mod cache;
pub mod prefix;
pub mod validator;

pub use cache::{MAX_CACHE_SIZE, ResultCache};
pub use prefix::{PrefixOutcome, PrefixRule, PrefixRules};
pub use validator::WordValidator;

/// Trait for spell checkers.
///
/// Suggestion generators validate candidates through this trait, so a
/// caching or instrumented checker can stand in for the plain validator.
pub trait Speller {
    /// Whether `word` is a recognized word.
    fn spell(&self, word: &str) -> bool;
}
