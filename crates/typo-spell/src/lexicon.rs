// Compiled engine state: rules, stems, reach, compound matchers

use hashbrown::{HashMap, HashSet};
use log::{debug, warn};
use regex::Regex;
use typo_aff::{CompiledRules, Flag};
use typo_core::enums::SENTINEL_CODE;

use crate::applier::{Reach, RuleApplier, reach_table};
use crate::dictionary::{DicEntry, Dictionary};

/// Immutable result of joining a compiled affix grammar with a stem list.
///
/// Holds no interior mutability and is `Send + Sync`; validators and
/// suggestion generators borrow it read-only.
#[derive(Debug)]
pub struct Lexicon {
    rules: CompiledRules,
    dictionary: Dictionary,
    /// Per-entry reach over all the entry's codes, parallel to the dictionary.
    reach: Vec<Reach>,
    compounds: Vec<Regex>,
}

impl Lexicon {
    pub fn new(rules: CompiledRules, dictionary: Dictionary) -> Self {
        let table = reach_table(&rules);
        let reach = dictionary
            .entries()
            .iter()
            .map(|entry| {
                entry
                    .codes
                    .iter()
                    .filter_map(|code| table.get(code))
                    .fold(Reach::default(), |acc, r| acc.merge(*r))
            })
            .collect();
        let compounds = compile_compounds(&rules, &dictionary);
        debug!(
            "lexicon ready: {} stems, {} rules, {} compound matchers",
            dictionary.len(),
            rules.rules.len(),
            compounds.len()
        );
        Self {
            rules,
            dictionary,
            reach,
            compounds,
        }
    }

    pub fn rules(&self) -> &CompiledRules {
        &self.rules
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn applier(&self) -> RuleApplier<'_> {
        RuleApplier::new(&self.rules)
    }

    pub fn compound_matchers(&self) -> &[Regex] {
        &self.compounds
    }

    /// Whether some compound rule matches the whole of `word`.
    pub fn matches_compound(&self, word: &str) -> bool {
        self.compounds.iter().any(|re| re.is_match(word))
    }

    /// Whether the entry's stem is a word on its own.
    ///
    /// Only stem-only lines qualify. A coded stem is a word only when one of
    /// its rules derives it, e.g. through a zero affix.
    pub fn stands_alone(&self, entry: &DicEntry) -> bool {
        entry.is_bare()
    }

    /// Whether `form`, derived from `entry`, may be used as a word.
    ///
    /// A NEEDAFFIX stem is never a word by itself, even when a zero affix
    /// reproduces it.
    pub fn admits(&self, entry: &DicEntry, form: &str) -> bool {
        form != entry.stem || !self.rules.flags.marks(&Flag::NeedAffix, &entry.codes)
    }

    /// Whether derivation from entry `index` could possibly produce `token`.
    ///
    /// Never rejects a token the entry actually derives; may accept tokens
    /// it does not.
    pub fn may_derive(&self, index: usize, token: &str) -> bool {
        let Some(entry) = self.dictionary.entries().get(index) else {
            return false;
        };
        if entry.surfaces().any(|s| token.starts_with(s)) {
            return true;
        }
        let reach = self.reach[index];
        let root = reach.root(&entry.stem);
        if reach.prefixes {
            token.contains(root)
        } else {
            token.starts_with(root)
        }
    }

    /// All surface forms of one entry: the stem when it stands alone, then
    /// every admitted form its codes derive. Duplicates are dropped, first one wins.
    pub fn expand(&self, entry: &DicEntry) -> Vec<String> {
        let applier = self.applier();
        let mut seen = HashSet::new();
        let mut forms = Vec::new();
        if self.stands_alone(entry) && seen.insert(entry.stem.clone()) {
            forms.push(entry.stem.clone());
        }
        for code in entry.codes.iter().filter(|c| *c != SENTINEL_CODE) {
            for form in applier.apply_code(&entry.stem, code) {
                if self.admits(entry, &form) && seen.insert(form.clone()) {
                    forms.push(form);
                }
            }
        }
        forms
    }

    /// Give back the parts the lexicon was built from.
    pub fn into_parts(self) -> (CompiledRules, Dictionary) {
        (self.rules, self.dictionary)
    }
}

/// Populate compound-rule members from the stem list and compile every
/// satisfiable rule.
fn compile_compounds(rules: &CompiledRules, dictionary: &Dictionary) -> Vec<Regex> {
    if rules.compound_rules.is_empty() {
        return Vec::new();
    }
    let min_len = rules.flags.compound_min();

    let mut members: HashMap<String, Vec<String>> = HashMap::new();
    for entry in dictionary.entries() {
        if min_len.is_some_and(|min| entry.stem.chars().count() < min) {
            continue;
        }
        for code in &rules.compound_rule_codes {
            if carries_code(entry, code) {
                members.entry(code.clone()).or_default().push(entry.stem.clone());
            }
        }
    }
    members.retain(|_, words| !words.is_empty());

    let mut matchers = Vec::new();
    for rule in &rules.compound_rules {
        match rule.compile(&members) {
            Ok(Some(re)) => matchers.push(re),
            Ok(None) => debug!("compound rule `{}` has no members, skipped", rule.source()),
            Err(e) => warn!("compound rule `{}` does not compile: {e}", rule.source()),
        }
    }
    matchers
}

/// Compound rules name codes by single characters, so a one-character code
/// is carried by any entry whose code field contains that character.
fn carries_code(entry: &DicEntry, code: &str) -> bool {
    let single = code.chars().count() == 1;
    entry.codes.iter().any(|c| c == code || (single && c.contains(code)))
}
