// Word validator: exact, derived, compound, and prefix-normalized matching

use typo_aff::Flag;
use typo_core::case::lowercase_first;
use typo_core::enums::SENTINEL_CODE;

use crate::lexicon::Lexicon;
use crate::speller::Speller;
use crate::speller::prefix::{PrefixOutcome, PrefixRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaseMode {
    AsWritten,
    /// The token's first letter was lowercased by the validator.
    LoweredFirst,
}

/// Decides whether a token is a recognized word.
///
/// Lightweight; created per call over a borrowed [`Lexicon`].
#[derive(Debug, Clone, Copy)]
pub struct WordValidator<'a> {
    lexicon: &'a Lexicon,
    prefixes: &'a PrefixRules,
}

impl<'a> WordValidator<'a> {
    pub fn new(lexicon: &'a Lexicon, prefixes: &'a PrefixRules) -> Self {
        Self { lexicon, prefixes }
    }

    /// Validate `token`.
    ///
    /// Tries, in order: the token itself (stems, derived forms, compounds),
    /// the token with its first letter lowercased, and finally the token
    /// after prefix normalization.
    pub fn check(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        if self.check_exact(token, CaseMode::AsWritten) || self.lexicon.matches_compound(token) {
            return true;
        }
        if let Some(lowered) = lowercase_first(token) {
            if self.check_exact(&lowered, CaseMode::LoweredFirst) {
                return true;
            }
        }
        match self.prefixes.apply(token) {
            PrefixOutcome::Stripped(rest) => self.check_exact(&rest, CaseMode::AsWritten),
            PrefixOutcome::Unchanged | PrefixOutcome::Rejected => false,
        }
    }

    /// Match `token` against stems and the forms their codes derive.
    fn check_exact(&self, token: &str, mode: CaseMode) -> bool {
        let flags = &self.lexicon.rules().flags;
        let applier = self.lexicon.applier();

        for (index, entry) in self.lexicon.dictionary().entries().iter().enumerate() {
            if flags.marks(&Flag::OnlyInCompound, &entry.codes) {
                continue;
            }
            if mode == CaseMode::LoweredFirst && flags.marks(&Flag::KeepCase, &entry.codes) {
                continue;
            }
            if entry.stem == token && self.lexicon.stands_alone(entry) {
                return true;
            }
            if entry.is_bare() || !self.lexicon.may_derive(index, token) {
                continue;
            }
            if !self.lexicon.admits(entry, token) {
                continue;
            }
            let derived = entry
                .codes
                .iter()
                .filter(|code| *code != SENTINEL_CODE)
                .any(|code| applier.apply_code_and_match(&entry.stem, code, token));
            if derived {
                return true;
            }
        }
        false
    }
}

impl Speller for WordValidator<'_> {
    fn spell(&self, word: &str) -> bool {
        self.check(word)
    }
}
