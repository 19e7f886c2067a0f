// TypoHandle: top-level entry point for spell checking and suggestions.
//
// Design notes:
// - Inputs arrive in stages (affix text, dictionary text, optional wordlist
//   and prefix rules). The lexicon is built as soon as both affix and
//   dictionary data are present, and rebuilt when either is replaced.
// - Validators are created on the fly in each call over the owned lexicon,
//   avoiding self-referential lifetimes.
// - Check and suggestion results are cached behind `RefCell`, so `&self`
//   methods can fill the caches. This makes the handle `!Sync`; share a
//   `Lexicon` instead when several threads need the same data.

use std::cell::RefCell;

use log::debug;
use typo_aff::{AffError, CompiledRules, Flag};
use typo_core::case::{CaseType, detect_case, lowercase_first, uppercase_first};
use typo_core::enums::{DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_MAX_SUGGESTIONS};

use crate::dictionary::{Dictionary, FrequencyTable};
use crate::lexicon::Lexicon;
use crate::speller::{MAX_CACHE_SIZE, PrefixRules, ResultCache, WordValidator};
use crate::suggestion::{Suggestion, SuggestionStatus, SuggestionStrategy, default_strategy};

/// Error type for handle operations.
#[derive(Debug, thiserror::Error)]
pub enum TypoError {
    /// An operation needed the lexicon before both affix and dictionary
    /// data were supplied.
    #[error("dictionary not loaded: affix and dictionary data are both required")]
    NotLoaded,

    /// The affix data could not be compiled.
    #[error("failed to compile affix data: {0}")]
    AffixParse(#[from] AffError),
}

/// Tunable engine options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpellOptions {
    /// Candidates farther than this from the token are never suggested.
    pub max_edit_distance: usize,
    /// Result count used when the caller gives no explicit limit.
    pub max_suggestions: usize,
    /// Cache scaling: each cache holds `1024 << cache_size` slots, with
    /// `cache_size` at most [`MAX_CACHE_SIZE`].
    pub cache_size: u32,
}

impl Default for SpellOptions {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            cache_size: 0,
        }
    }
}

/// Owns the compiled lexicon, options, and result caches.
///
/// ```
/// use typo_spell::TypoHandle;
///
/// let aff = "SFX AB Y 2\nSFX AB 0 0 .\nSFX AB 0 s .\n";
/// let handle = TypoHandle::load(aff, "cat/AB\n", None).unwrap();
/// assert!(handle.check("cats").unwrap());
/// assert_eq!(handle.suggest("cta", 5).unwrap(), vec!["cat", "cats"]);
/// ```
pub struct TypoHandle {
    /// Staged inputs, held until both are present and moved into the lexicon.
    rules: Option<CompiledRules>,
    dictionary: Option<Dictionary>,
    lexicon: Option<Lexicon>,

    wordlist: FrequencyTable,
    prefix_rules: PrefixRules,
    strategy: SuggestionStrategy,
    options: SpellOptions,

    check_cache: RefCell<ResultCache<bool>>,
    /// Full ranked lists; callers truncate to their own limit.
    suggest_cache: RefCell<ResultCache<Vec<Suggestion>>>,
}

impl Default for TypoHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl TypoHandle {
    /// Create an empty handle. It reports [`TypoError::NotLoaded`] until
    /// both affix and dictionary data are supplied.
    pub fn new() -> Self {
        let options = SpellOptions::default();
        Self {
            rules: None,
            dictionary: None,
            lexicon: None,
            wordlist: FrequencyTable::new(),
            prefix_rules: PrefixRules::new(),
            strategy: default_strategy(),
            options,
            check_cache: RefCell::new(ResultCache::new(options.cache_size)),
            suggest_cache: RefCell::new(ResultCache::new(options.cache_size)),
        }
    }

    /// Build a loaded handle in one step.
    pub fn load(affix: &str, dictionary: &str, frequencies: Option<&str>) -> Result<Self, TypoError> {
        let mut handle = Self::new();
        handle.set_affix_data(affix)?;
        handle.set_dictionary_data(dictionary);
        if let Some(text) = frequencies {
            handle.set_wordlist(text);
        }
        Ok(handle)
    }

    // =========================================================================
    // Staged loading
    // =========================================================================

    /// Compile and install affix data, replacing any earlier rules.
    ///
    /// On error the handle keeps its previous state.
    pub fn set_affix_data(&mut self, text: &str) -> Result<(), TypoError> {
        let rules = typo_aff::compile(text)?;
        self.unlink();
        self.rules = Some(rules);
        self.link();
        Ok(())
    }

    /// Parse and install dictionary data, replacing any earlier stems.
    pub fn set_dictionary_data(&mut self, text: &str) {
        let dictionary = Dictionary::parse(text);
        self.unlink();
        self.dictionary = Some(dictionary);
        self.link();
    }

    /// Install a `word<TAB>frequency` list used to break ranking ties.
    pub fn set_wordlist(&mut self, text: &str) {
        self.wordlist = FrequencyTable::parse(text);
        self.clear_caches();
    }

    /// Install prefix normalization rules (`prefix<TAB>replacement<TAB>condition`).
    pub fn set_prefix_rules(&mut self, text: &str) {
        self.prefix_rules = PrefixRules::parse(text);
        self.clear_caches();
    }

    pub fn is_loaded(&self) -> bool {
        self.lexicon.is_some()
    }

    /// The compiled lexicon, once loaded.
    pub fn lexicon(&self) -> Result<&Lexicon, TypoError> {
        self.lexicon.as_ref().ok_or(TypoError::NotLoaded)
    }

    fn unlink(&mut self) {
        if let Some(lexicon) = self.lexicon.take() {
            let (rules, dictionary) = lexicon.into_parts();
            self.rules = Some(rules);
            self.dictionary = Some(dictionary);
        }
    }

    fn link(&mut self) {
        self.clear_caches();
        if self.rules.is_none() || self.dictionary.is_none() {
            return;
        }
        if let (Some(rules), Some(dictionary)) = (self.rules.take(), self.dictionary.take()) {
            self.lexicon = Some(Lexicon::new(rules, dictionary));
            debug!("handle loaded");
        }
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    /// Check whether `token` is a recognized word.
    pub fn check(&self, token: &str) -> Result<bool, TypoError> {
        let lexicon = self.lexicon()?;
        let cached = self.check_cache.borrow().get(token).copied();
        if let Some(result) = cached {
            return Ok(result);
        }
        let result = WordValidator::new(lexicon, &self.prefix_rules).check(token);
        self.check_cache.borrow_mut().insert(token, result);
        Ok(result)
    }

    /// Up to `limit` corrections for `token`, best first.
    ///
    /// Empty when the token is valid or `limit` is zero.
    pub fn suggest(&self, token: &str, limit: usize) -> Result<Vec<String>, TypoError> {
        Ok(self
            .suggest_detailed(token, limit)?
            .into_iter()
            .map(|s| s.word)
            .collect())
    }

    /// Like [`Self::suggest`], with each candidate's distance and weight.
    pub fn suggest_detailed(&self, token: &str, limit: usize) -> Result<Vec<Suggestion>, TypoError> {
        let lexicon = self.lexicon()?;
        if limit == 0 || self.check(token)? {
            return Ok(Vec::new());
        }
        let cached = self.suggest_cache.borrow().get(token).cloned();
        let ranked = match cached {
            Some(ranked) => ranked,
            None => {
                let ranked = self.rank(lexicon, token);
                self.suggest_cache.borrow_mut().insert(token, ranked.clone());
                ranked
            }
        };
        Ok(ranked.into_iter().take(limit).collect())
    }

    /// Whether some dictionary entry for `word` carries the code assigned
    /// to the directive `flag`. False when the directive is not defined.
    pub fn has_flag(&self, word: &str, flag: &str) -> Result<bool, TypoError> {
        let lexicon = self.lexicon()?;
        let flag = Flag::from_name(flag);
        let flags = &lexicon.rules().flags;
        Ok(lexicon.dictionary().lookup(word).any(|e| flags.marks(&flag, &e.codes)))
    }

    /// Every surface form of the dictionary stems spelled `stem`.
    pub fn expand(&self, stem: &str) -> Result<Vec<String>, TypoError> {
        let lexicon = self.lexicon()?;
        let mut forms: Vec<String> = Vec::new();
        for entry in lexicon.dictionary().entries().iter().filter(|e| e.stem == stem) {
            for form in lexicon.expand(entry) {
                if !forms.contains(&form) {
                    forms.push(form);
                }
            }
        }
        Ok(forms)
    }

    /// Generate and rank every candidate for `token`.
    ///
    /// A capitalized token is also tried with its first letter lowered, and
    /// every candidate is then capitalized to match the token.
    fn rank(&self, lexicon: &Lexicon, token: &str) -> Vec<Suggestion> {
        let validator = WordValidator::new(lexicon, &self.prefix_rules);
        let max = self.options.max_edit_distance;

        let mut status = SuggestionStatus::new(token, max);
        self.strategy.generate(lexicon, &validator, &mut status);

        if detect_case(token) == CaseType::FirstUpper {
            if let Some(lowered) = lowercase_first(token) {
                let mut lower = SuggestionStatus::new(&lowered, max);
                self.strategy.generate(lexicon, &validator, &mut lower);

                let mut merged = SuggestionStatus::new(token, max);
                for suggestion in status.into_suggestions().into_iter().chain(lower.into_suggestions()) {
                    merged.add_scored(uppercase_first(&suggestion.word), suggestion.distance);
                }
                status = merged;
            }
        }

        status.sort_suggestions(&self.wordlist);
        status.into_suggestions()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn options(&self) -> SpellOptions {
        self.options
    }

    pub fn set_max_edit_distance(&mut self, value: usize) {
        self.options.max_edit_distance = value;
        self.clear_caches();
    }

    pub fn set_max_suggestions(&mut self, value: usize) {
        self.options.max_suggestions = value;
    }

    /// Replace both caches with empty ones of the given size parameter.
    ///
    /// Values above [`MAX_CACHE_SIZE`] are clamped.
    pub fn set_cache_size(&mut self, size: u32) {
        let size = size.min(MAX_CACHE_SIZE);
        self.options.cache_size = size;
        self.check_cache = RefCell::new(ResultCache::new(size));
        self.suggest_cache = RefCell::new(ResultCache::new(size));
    }

    /// Replace the suggestion strategy.
    pub fn set_strategy(&mut self, strategy: SuggestionStrategy) {
        self.strategy = strategy;
        self.clear_caches();
    }

    fn clear_caches(&mut self) {
        self.check_cache.get_mut().clear();
        self.suggest_cache.get_mut().clear();
    }
}
