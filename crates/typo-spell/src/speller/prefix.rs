// Prefix normalization applied before a last validation attempt

use log::warn;
use typo_aff::condition::{Anchor, Condition};

/// One normalization step: a leading literal is replaced, and the result
/// may be required to satisfy a start-anchored condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: String,
    pub replacement: String,
    pub post_condition: Option<Condition>,
}

impl PrefixRule {
    pub fn new(prefix: &str, replacement: &str, post_condition: Option<&str>) -> Result<Self, regex::Error> {
        Ok(Self {
            prefix: prefix.to_string(),
            replacement: replacement.to_string(),
            post_condition: post_condition
                .map(|c| Condition::new(c, Anchor::Start))
                .transpose()?,
        })
    }
}

/// Result of running the normalization list over a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixOutcome {
    /// No rule applied.
    Unchanged,
    /// A rule applied but its post-condition failed; the token is invalid.
    Rejected,
    /// At least one rule applied; the normalized remainder.
    Stripped(String),
}

/// Ordered prefix normalization list. Empty by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixRules {
    rules: Vec<PrefixRule>,
}

impl PrefixRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `prefix<TAB>replacement<TAB>condition` lines.
    ///
    /// A replacement of `0` or nothing means the empty string; a condition
    /// of `.` or nothing means no condition. Lines starting with `#` are
    /// comments. Invalid lines are skipped with a warning.
    pub fn parse(text: &str) -> Self {
        let mut rules = Self::new();
        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t').map(str::trim);
            let prefix = fields.next().unwrap_or("");
            if prefix.is_empty() {
                warn!("prefix rules line {}: empty prefix, skipped", idx + 1);
                continue;
            }
            let replacement = match fields.next() {
                None | Some("") | Some("0") => "",
                Some(r) => r,
            };
            let condition = match fields.next() {
                None | Some("") | Some(".") => None,
                Some(c) => Some(c),
            };
            match PrefixRule::new(prefix, replacement, condition) {
                Ok(rule) => rules.push(rule),
                Err(e) => warn!("prefix rules line {}: {e}; skipped", idx + 1),
            }
        }
        rules
    }

    pub fn push(&mut self, rule: PrefixRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrefixRule> {
        self.rules.iter()
    }

    /// Apply every rule in order, each to the output of the previous ones.
    pub fn apply(&self, token: &str) -> PrefixOutcome {
        let mut word = token.to_string();
        let mut applied = false;
        for rule in &self.rules {
            let Some(rest) = word.strip_prefix(rule.prefix.as_str()) else {
                continue;
            };
            let next = format!("{}{}", rule.replacement, rest);
            if rule.post_condition.as_ref().is_some_and(|c| !c.is_match(&next)) {
                return PrefixOutcome::Rejected;
            }
            word = next;
            applied = true;
        }
        if applied {
            PrefixOutcome::Stripped(word)
        } else {
            PrefixOutcome::Unchanged
        }
    }
}
