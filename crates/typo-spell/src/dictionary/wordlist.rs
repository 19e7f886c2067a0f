// Word frequency table used to break ranking ties

use hashbrown::HashMap;
use log::warn;

/// Frequency weights keyed by surface form.
///
/// Parsed from `word<TAB>frequency` lines. Words that are absent weigh 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    weights: HashMap<String, f64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tab-separated frequency list. Unparsable lines are skipped.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or("").trim();
            let weight = fields.next().and_then(|f| f.trim().parse::<f64>().ok());
            match weight {
                Some(weight) if !word.is_empty() && weight.is_finite() => table.insert(word, weight),
                _ => warn!("wordlist line {}: unparsable entry, skipped", idx + 1),
            }
        }
        table
    }

    pub fn insert(&mut self, word: impl Into<String>, weight: f64) {
        self.weights.insert(word.into(), weight);
    }

    pub fn weight(&self, word: &str) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    /// Weight of `word`, falling back to its lowercase form so recased
    /// suggestions keep the weight of the listed word.
    pub fn weight_folded(&self, word: &str) -> f64 {
        match self.weights.get(word) {
            Some(weight) => *weight,
            None => self.weight(&word.to_lowercase()),
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_separated_weights() {
        let table = FrequencyTable::parse("hello\t120\nhelp\t3.5\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.weight("hello"), 120.0);
        assert_eq!(table.weight("help"), 3.5);
    }

    #[test]
    fn absent_words_weigh_zero() {
        let table = FrequencyTable::parse("hello\t1\n");
        assert_eq!(table.weight("goodbye"), 0.0);
    }

    #[test]
    fn folded_weight_uses_lowercase_entry() {
        let table = FrequencyTable::parse("hello\t4\n");
        assert_eq!(table.weight("Hello"), 0.0);
        assert_eq!(table.weight_folded("Hello"), 4.0);
    }

    #[test]
    fn bad_lines_are_skipped() {
        let table = FrequencyTable::parse("hello\tmany\nnofreq\n\nworld\t7\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.weight("world"), 7.0);
    }
}
