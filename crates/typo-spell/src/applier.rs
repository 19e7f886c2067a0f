// Rule application with continuation classes
//
// Derivation follows continuation classes depth first, in file order, using
// an explicit stack of frames. Every frame carries the chain of rule codes
// that produced its base form; a continuation whose code is already on the
// chain would loop forever and is dropped.

use hashbrown::{HashMap, HashSet};
use log::trace;
use typo_aff::{AffixRule, CompiledRules};
use typo_core::enums::{AffixKind, SENTINEL_CODE};

/// Upper bound on what derivation through one rule code can do to a stem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reach {
    /// Characters that may be stripped from the start of the stem.
    pub prefix_strip: usize,
    /// Characters that may be stripped from the end of the stem.
    pub suffix_strip: usize,
    /// Whether any prefix rule is reachable, i.e. text may be prepended.
    pub prefixes: bool,
}

impl Reach {
    /// The weaker bound covering both `self` and `other`.
    pub fn merge(self, other: Reach) -> Reach {
        Reach {
            prefix_strip: self.prefix_strip.max(other.prefix_strip),
            suffix_strip: self.suffix_strip.max(other.suffix_strip),
            prefixes: self.prefixes || other.prefixes,
        }
    }

    /// What remains of `stem` after the largest possible strips on both ends.
    /// Empty when the strips cover the whole stem or are unbounded.
    ///
    /// Any word derived from `stem` within this reach contains the root.
    pub fn root<'s>(&self, stem: &'s str) -> &'s str {
        let len = stem.chars().count();
        if self.prefix_strip.saturating_add(self.suffix_strip) >= len {
            return "";
        }
        let start = stem.char_indices().nth(self.prefix_strip).map_or(stem.len(), |(i, _)| i);
        let end = stem
            .char_indices()
            .nth(len - self.suffix_strip)
            .map_or(stem.len(), |(i, _)| i);
        &stem[start..end]
    }
}

/// Compute a [`Reach`] for every rule code in `rules`.
///
/// A code's reach sums the strips of every rule in its continuation closure.
/// A derivation chain never repeats a code, so the sum bounds any chain.
pub fn reach_table(rules: &CompiledRules) -> HashMap<String, Reach> {
    rules
        .rules
        .keys()
        .map(|code| (code.clone(), closure_reach(rules, code)))
        .collect()
}

fn closure_reach(rules: &CompiledRules, code: &str) -> Reach {
    let mut reach = Reach::default();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut pending = vec![code];
    while let Some(code) = pending.pop() {
        if code == SENTINEL_CODE || !visited.insert(code) {
            continue;
        }
        let Some(rule) = rules.rule(code) else {
            continue;
        };
        let strip = rule
            .entries
            .iter()
            .filter_map(|e| e.remove.as_ref().map(|r| r.max_strip()))
            .max()
            .unwrap_or(0);
        match rule.kind {
            AffixKind::Prefix => {
                reach.prefix_strip = reach.prefix_strip.saturating_add(strip);
                reach.prefixes = true;
            }
            AffixKind::Suffix => reach.suffix_strip = reach.suffix_strip.saturating_add(strip),
        }
        for entry in &rule.entries {
            pending.extend(entry.continuation.iter().map(String::as_str));
        }
    }
    reach
}

struct Frame<'r> {
    base: String,
    rule: &'r AffixRule,
    next: usize,
    chain: Vec<&'r str>,
}

/// Applies affix rules from a compiled rule table.
///
/// Cheap to construct; borrows the rule table for the duration of a call.
#[derive(Debug, Clone, Copy)]
pub struct RuleApplier<'a> {
    rules: &'a CompiledRules,
}

impl<'a> RuleApplier<'a> {
    pub fn new(rules: &'a CompiledRules) -> Self {
        Self { rules }
    }

    /// Every form `rule` derives from `stem`, continuation classes included.
    pub fn apply(&self, stem: &str, rule: &AffixRule) -> Vec<String> {
        let mut forms = Vec::new();
        self.walk(stem, rule, Vec::new(), |form| {
            forms.push(form.to_string());
            false
        });
        forms
    }

    /// Like [`Self::apply`], looking the rule up by code.
    ///
    /// The sentinel code and unknown codes derive nothing.
    pub fn apply_code(&self, stem: &str, code: &str) -> Vec<String> {
        let mut forms = Vec::new();
        if let Some(rule) = self.lookup(code) {
            self.walk(stem, rule, vec![code], |form| {
                forms.push(form.to_string());
                false
            });
        }
        forms
    }

    /// Whether `rule` derives `target` from `stem`. Stops at the first hit.
    pub fn apply_and_match(&self, stem: &str, rule: &AffixRule, target: &str) -> bool {
        self.walk(stem, rule, Vec::new(), |form| form == target)
    }

    /// Like [`Self::apply_and_match`], looking the rule up by code.
    pub fn apply_code_and_match(&self, stem: &str, code: &str, target: &str) -> bool {
        match self.lookup(code) {
            Some(rule) => self.walk(stem, rule, vec![code], |form| form == target),
            None => false,
        }
    }

    fn lookup(&self, code: &str) -> Option<&'a AffixRule> {
        if code == SENTINEL_CODE {
            return None;
        }
        let rule = self.rules.rule(code);
        if rule.is_none() {
            trace!("unknown rule code `{code}`");
        }
        rule
    }

    /// Visit derived forms in depth-first order until `visit` returns true.
    fn walk<'r, F>(&'r self, stem: &str, rule: &'r AffixRule, chain: Vec<&'r str>, mut visit: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        let mut stack = vec![Frame {
            base: stem.to_string(),
            rule,
            next: 0,
            chain,
        }];

        while let Some(frame) = stack.last_mut() {
            let rule = frame.rule;
            let Some(entry) = rule.entries.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let Some(form) = entry.derive(rule.kind, &frame.base) else {
                continue;
            };
            if visit(&form) {
                return true;
            }

            let mut continuations = Vec::new();
            for code in &entry.continuation {
                if code == SENTINEL_CODE {
                    continue;
                }
                if frame.chain.contains(&code.as_str()) {
                    trace!("continuation cycle through `{code}` from `{form}`, branch dropped");
                    continue;
                }
                let Some(next) = self.lookup(code) else {
                    continue;
                };
                let mut chain = frame.chain.clone();
                chain.push(code.as_str());
                continuations.push(Frame {
                    base: form.clone(),
                    rule: next,
                    next: 0,
                    chain,
                });
            }
            // Reversed so the first continuation is expanded first.
            stack.extend(continuations.into_iter().rev());
        }
        false
    }
}
