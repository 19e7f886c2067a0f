// Suggestion generation
//
// Produces ranked correction candidates for unrecognized tokens.
//
// Architecture:
//   - `generators`: candidate sources (SuggestionGenerator trait)
//   - `status`: collected candidates, distance filter, deduplication, ranking
//   - `strategy`: orchestrator that runs generators in order

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::SuggestionGenerator;
pub use status::{Suggestion, SuggestionStatus};
pub use strategy::{SuggestionStrategy, default_strategy};
