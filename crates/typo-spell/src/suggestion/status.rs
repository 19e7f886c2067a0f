// Suggestion status: distance filter, deduplication, ranking

use std::cmp::Ordering;

use hashbrown::HashMap;
use typo_core::distance::levenshtein_within;

use crate::dictionary::FrequencyTable;

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance to the misspelled token.
    pub distance: usize,
    /// Frequency weight, filled in by [`SuggestionStatus::sort_suggestions`].
    pub weight: f64,
}

/// Collects candidates for one token.
///
/// Candidates farther than the maximum edit distance and the token itself
/// are dropped on insertion. A repeated candidate keeps its smallest distance.
pub struct SuggestionStatus<'a> {
    token: &'a str,
    max_distance: usize,
    suggestions: Vec<Suggestion>,
    /// Index of each collected word in `suggestions`.
    seen: HashMap<String, usize>,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(token: &'a str, max_distance: usize) -> Self {
        Self {
            token,
            max_distance,
            suggestions: Vec::new(),
            seen: HashMap::new(),
        }
    }

    /// The token suggestions are generated for.
    pub fn token(&self) -> &'a str {
        self.token
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Distance from `word` to the token, if within the maximum.
    pub fn distance_to(&self, word: &str) -> Option<usize> {
        levenshtein_within(word, self.token, self.max_distance)
    }

    /// Score `word` against the token and keep it if close enough.
    ///
    /// Returns whether the candidate was added.
    pub fn add_suggestion(&mut self, word: String) -> bool {
        match self.distance_to(&word) {
            Some(distance) => self.add_scored(word, distance),
            None => false,
        }
    }

    /// Add a candidate whose distance was computed elsewhere.
    pub fn add_scored(&mut self, word: String, distance: usize) -> bool {
        if distance > self.max_distance || word == self.token {
            return false;
        }
        if let Some(&index) = self.seen.get(&word) {
            let existing = &mut self.suggestions[index];
            existing.distance = existing.distance.min(distance);
            return false;
        }
        self.seen.insert(word.clone(), self.suggestions.len());
        self.suggestions.push(Suggestion {
            word,
            distance,
            weight: 0.0,
        });
        true
    }

    /// Rank by ascending distance, then descending frequency weight, then
    /// surface form. The order is total, so ranking is deterministic.
    pub fn sort_suggestions(&mut self, frequencies: &FrequencyTable) {
        for suggestion in &mut self.suggestions {
            suggestion.weight = frequencies.weight_folded(&suggestion.word);
        }
        self.suggestions.sort_by(compare);
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.suggestions
    }
}

fn compare(a: &Suggestion, b: &Suggestion) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| b.weight.total_cmp(&a.weight))
        .then_with(|| a.word.cmp(&b.word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_status_is_empty() {
        let status = SuggestionStatus::new("helo", 2);
        assert_eq!(status.suggestion_count(), 0);
        assert_eq!(status.token(), "helo");
        assert_eq!(status.max_distance(), 2);
    }

    #[test]
    fn distant_candidates_are_dropped() {
        let mut status = SuggestionStatus::new("helo", 1);
        assert!(status.add_suggestion("hello".to_string()));
        assert!(!status.add_suggestion("yellow".to_string()));
        assert_eq!(status.suggestions()[0].distance, 1);
    }

    #[test]
    fn duplicates_and_token_are_ignored() {
        let mut status = SuggestionStatus::new("helo", 2);
        assert!(status.add_suggestion("hello".to_string()));
        assert!(!status.add_suggestion("hello".to_string()));
        assert!(!status.add_suggestion("helo".to_string()));
        assert_eq!(status.suggestion_count(), 1);
    }

    #[test]
    fn repeat_keeps_smallest_distance() {
        let mut status = SuggestionStatus::new("Helo", 2);
        assert!(status.add_scored("Hello".to_string(), 2));
        assert!(!status.add_scored("Hello".to_string(), 1));
        assert_eq!(status.suggestions()[0].distance, 1);
    }

    #[test]
    fn sort_by_distance_then_weight_then_word() {
        let mut frequencies = FrequencyTable::new();
        frequencies.insert("help", 10.0);
        frequencies.insert("held", 50.0);

        let mut status = SuggestionStatus::new("helo", 2);
        for word in ["hero", "help", "held", "hello", "halo"] {
            status.add_suggestion(word.to_string());
        }
        status.sort_suggestions(&frequencies);

        let words: Vec<&str> = status.suggestions().iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["held", "help", "halo", "hello", "hero"]);
        assert_eq!(status.suggestions()[0].weight, 50.0);
    }

    #[test]
    fn into_suggestions_consumes_status() {
        let mut status = SuggestionStatus::new("cta", 2);
        status.add_scored("cat".to_string(), 2);
        let suggestions = status.into_suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, "cat");
    }
}
