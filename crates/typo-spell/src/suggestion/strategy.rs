// Suggestion strategy: runs generators in order over one status

use super::generators::{DictionaryScan, ReplacementPairs, SuggestionGenerator};
use super::status::SuggestionStatus;
use crate::lexicon::Lexicon;
use crate::speller::Speller;

/// An ordered list of generators sharing one status.
///
/// Every generator runs; the status deduplicates, so earlier generators
/// only win ties on identical words.
pub struct SuggestionStrategy {
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    pub fn new(generators: Vec<Box<dyn SuggestionGenerator>>) -> Self {
        Self { generators }
    }

    pub fn generate(&self, lexicon: &Lexicon, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        for generator in &self.generators {
            generator.generate(lexicon, speller, status);
        }
    }
}

/// `REP` rewrites first, then the dictionary scan.
pub fn default_strategy() -> SuggestionStrategy {
    SuggestionStrategy::new(vec![Box::new(ReplacementPairs), Box::new(DictionaryScan)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, FrequencyTable};
    use crate::speller::{PrefixRules, WordValidator};
    use typo_aff::compile;

    #[test]
    fn default_strategy_combines_sources() {
        let lex = Lexicon::new(
            compile("REP f ph\nSFX AB Y 1\nSFX AB 0 s .\n").unwrap(),
            Dictionary::parse("phone/AB\nfine\n"),
        );
        let prefixes = PrefixRules::new();
        let validator = WordValidator::new(&lex, &prefixes);

        let mut status = SuggestionStatus::new("fones", 2);
        default_strategy().generate(&lex, &validator, &mut status);
        status.sort_suggestions(&FrequencyTable::new());

        let words: Vec<&str> = status.suggestions().iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["fine", "phones"]);
    }

    #[test]
    fn empty_strategy_adds_nothing() {
        let lex = Lexicon::new(compile("").unwrap(), Dictionary::parse("cat\n"));
        let prefixes = PrefixRules::new();
        let validator = WordValidator::new(&lex, &prefixes);
        let mut status = SuggestionStatus::new("cta", 2);
        SuggestionStrategy::new(Vec::new()).generate(&lex, &validator, &mut status);
        assert_eq!(status.suggestion_count(), 0);
    }
}
