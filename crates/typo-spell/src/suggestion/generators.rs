// Suggestion generators: each contributes one class of candidates to the
// status, which scores and filters them by edit distance.

use typo_aff::Flag;
use typo_core::distance::{leading_chars, levenshtein_within};
use typo_core::enums::SENTINEL_CODE;

use super::status::SuggestionStatus;
use crate::dictionary::DicEntry;
use crate::lexicon::Lexicon;
use crate::speller::Speller;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual suggestion generators.
pub trait SuggestionGenerator {
    /// Generate candidates for the token tracked by `status`.
    ///
    /// `speller` validates candidates that do not come straight from the
    /// lexicon.
    fn generate(&self, lexicon: &Lexicon, speller: &dyn Speller, status: &mut SuggestionStatus<'_>);
}

// ---------------------------------------------------------------------------
// DictionaryScan
// ---------------------------------------------------------------------------

/// Scans every stem, keeps those close to the token, and offers the stem
/// when it is bare along with everything its codes derive.
pub struct DictionaryScan;

impl DictionaryScan {
    /// Whether `entry` is close enough to the token to be worth expanding.
    fn is_near(entry: &DicEntry, token: &str, max: usize) -> bool {
        if entry.variants.iter().any(|v| levenshtein_within(v, token, max).is_some()) {
            return true;
        }
        if levenshtein_within(&entry.stem, token, max).is_some() {
            return true;
        }
        let head = leading_chars(token, entry.stem.chars().count());
        levenshtein_within(&entry.stem, head, max).is_some()
    }
}

impl SuggestionGenerator for DictionaryScan {
    fn generate(&self, lexicon: &Lexicon, _speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let token = status.token();
        let max = status.max_distance();
        let flags = &lexicon.rules().flags;
        let applier = lexicon.applier();

        for entry in lexicon.dictionary().entries() {
            if flags.marks(&Flag::NoSuggest, &entry.codes) || flags.marks(&Flag::OnlyInCompound, &entry.codes) {
                continue;
            }
            if !Self::is_near(entry, token, max) {
                continue;
            }
            if lexicon.stands_alone(entry) {
                status.add_suggestion(entry.stem.clone());
            }
            for code in entry.codes.iter().filter(|c| *c != SENTINEL_CODE) {
                for form in applier.apply_code(&entry.stem, code) {
                    if lexicon.admits(entry, &form) {
                        status.add_suggestion(form);
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// ReplacementPairs
// ---------------------------------------------------------------------------

/// Applies the `REP` table to the token and keeps rewrites that validate.
///
/// A rewrite containing spaces is kept when every word in it validates.
pub struct ReplacementPairs;

impl SuggestionGenerator for ReplacementPairs {
    fn generate(&self, lexicon: &Lexicon, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        for candidate in lexicon.rules().replacements.variants(status.token()) {
            let valid = candidate
                .split(' ')
                .all(|word| !word.is_empty() && speller.spell(word));
            if valid {
                status.add_suggestion(candidate);
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use typo_aff::compile;

    /// A mock speller that accepts a predefined set of words.
    struct MockSpeller {
        accepted: Vec<String>,
    }

    impl MockSpeller {
        fn new(words: &[&str]) -> Self {
            Self {
                accepted: words.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl Speller for MockSpeller {
        fn spell(&self, word: &str) -> bool {
            self.accepted.iter().any(|w| w == word)
        }
    }

    fn lexicon(aff: &str, dic: &str) -> Lexicon {
        Lexicon::new(compile(aff).unwrap(), Dictionary::parse(dic))
    }

    fn words(status: &SuggestionStatus<'_>) -> Vec<String> {
        let mut words: Vec<String> = status.suggestions().iter().map(|s| s.word.clone()).collect();
        words.sort();
        words
    }

    #[test]
    fn scan_offers_bare_stems_and_derived_forms() {
        let lex = lexicon("SFX AB Y 1\nSFX AB 0 s .\n", "cat/AB\ncar\nzebra\n");
        let speller = MockSpeller::new(&[]);
        let mut status = SuggestionStatus::new("cast", 2);
        DictionaryScan.generate(&lex, &speller, &mut status);
        // The coded stem "cat" is not a word; only what AB derives is offered.
        assert_eq!(words(&status), vec!["car", "cats"]);
    }

    #[test]
    fn scan_offers_zero_affix_stem() {
        let lex = lexicon("SFX BS Y 1\nSFX BS 0 0 .\nSFX AB Y 1\nSFX AB 0 s .\n", "cat/BSAB\n");
        let speller = MockSpeller::new(&[]);
        let mut status = SuggestionStatus::new("cst", 2);
        DictionaryScan.generate(&lex, &speller, &mut status);
        assert_eq!(words(&status), vec!["cat", "cats"]);
    }

    #[test]
    fn scan_keeps_stem_near_token_head() {
        let lex = lexicon("SFX ED Y 1\nSFX ED 0 ed .\n", "walk/ED\n");
        let speller = MockSpeller::new(&[]);
        // "walk" is more than 2 edits from the whole token but 2 from "wlak".
        let mut status = SuggestionStatus::new("wlaked", 2);
        DictionaryScan.generate(&lex, &speller, &mut status);
        assert_eq!(words(&status), vec!["walked"]);
    }

    #[test]
    fn scan_admits_entries_through_variants() {
        let aff = "SFX PL Y 1\nSFX PL rson ople rson\n";
        let speller = MockSpeller::new(&[]);

        let lex = lexicon(aff, "person/people/PL\n");
        let mut status = SuggestionStatus::new("peoples", 2);
        DictionaryScan.generate(&lex, &speller, &mut status);
        assert_eq!(words(&status), vec!["people"]);

        let lex = lexicon(aff, "person/PL\n");
        let mut status = SuggestionStatus::new("peoples", 2);
        DictionaryScan.generate(&lex, &speller, &mut status);
        assert!(status.suggestions().is_empty());
    }

    #[test]
    fn scan_skips_nosuggest_and_compound_only() {
        let aff = "NOSUGGEST NS\nONLYINCOMPOUND OC\nNEEDAFFIX NA\nSFX AB Y 1\nSFX AB 0 s .\nSFX BS Y 1\nSFX BS 0 0 .\n";
        let lex = lexicon(aff, "damn/BSNS\ndamp/BSOC\ndame/BSABNA\n");
        let speller = MockSpeller::new(&[]);
        let mut status = SuggestionStatus::new("damx", 2);
        DictionaryScan.generate(&lex, &speller, &mut status);
        assert_eq!(words(&status), vec!["dames"]);
    }

    #[test]
    fn replacement_pairs_keep_valid_rewrites() {
        let lex = lexicon("REP f ph\nREP alot a_lot\n", "phone\n");
        let speller = MockSpeller::new(&["phone", "a", "lot"]);

        let mut status = SuggestionStatus::new("fone", 2);
        ReplacementPairs.generate(&lex, &speller, &mut status);
        assert_eq!(words(&status), vec!["phone"]);

        let mut status = SuggestionStatus::new("alot", 2);
        ReplacementPairs.generate(&lex, &speller, &mut status);
        assert_eq!(words(&status), vec!["a lot"]);
    }

    #[test]
    fn replacement_pairs_drop_invalid_rewrites() {
        let lex = lexicon("REP f ph\n", "phone\n");
        let speller = MockSpeller::new(&[]);
        let mut status = SuggestionStatus::new("fone", 2);
        ReplacementPairs.generate(&lex, &speller, &mut status);
        assert_eq!(status.suggestion_count(), 0);
    }
}
