// Affix rules and single-entry application

use typo_core::enums::AffixKind;

use crate::condition::Condition;

/// What an affix entry strips from the stem before adding its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// End-anchored pattern; the first match is deleted.
    Suffix(Condition),
    /// Literal stripped from the start of the stem.
    Prefix(String),
}

impl Removal {
    /// Apply the removal to `stem`.
    ///
    /// A removal that does not match leaves the stem unchanged.
    pub fn apply(&self, stem: &str) -> String {
        match self {
            Removal::Suffix(pattern) => pattern.strip(stem),
            Removal::Prefix(literal) => stem.strip_prefix(literal.as_str()).unwrap_or(stem).to_string(),
        }
    }

    /// Upper bound on the number of characters the removal can strip.
    ///
    /// A fixed-width suffix pattern never strips more characters than its
    /// text is long. Patterns with repetition or alternation are unbounded
    /// and report `usize::MAX`.
    pub fn max_strip(&self) -> usize {
        match self {
            Removal::Suffix(pattern) if is_fixed_width(pattern.source()) => pattern.source().chars().count(),
            Removal::Suffix(_) => usize::MAX,
            Removal::Prefix(literal) => literal.chars().count(),
        }
    }
}

/// Whether `pattern` has no quantifier or alternation outside escapes.
fn is_fixed_width(pattern: &str) -> bool {
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '*' | '+' | '?' | '{' | '|' => return false,
            _ => {}
        }
    }
    true
}

/// One line of a `PFX`/`SFX` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixEntry {
    /// Text inserted after the removal (appended or prepended). May be empty.
    pub add: String,
    /// Optional removal applied to the stem first.
    pub remove: Option<Removal>,
    /// Optional condition the stem must satisfy. `None` always matches.
    pub condition: Option<Condition>,
    /// Rule codes chained onto the derived form, in file order.
    pub continuation: Vec<String>,
}

impl AffixEntry {
    /// Whether this entry's condition admits `stem`.
    pub fn applies_to(&self, stem: &str) -> bool {
        self.condition.as_ref().is_none_or(|c| c.is_match(stem))
    }

    /// Derive a new form from `stem`, or `None` if the condition fails.
    pub fn derive(&self, kind: AffixKind, stem: &str) -> Option<String> {
        if !self.applies_to(stem) {
            return None;
        }
        let base = match &self.remove {
            Some(removal) => removal.apply(stem),
            None => stem.to_string(),
        };
        Some(match kind {
            AffixKind::Suffix => base + &self.add,
            AffixKind::Prefix => format!("{}{}", self.add, base),
        })
    }
}

/// A named prefix or suffix rule with its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixRule {
    pub kind: AffixKind,
    /// Cross-product flag from the header (`Y`/`N`). Advisory only.
    pub combineable: bool,
    pub entries: Vec<AffixEntry>,
}

impl AffixRule {
    /// All forms the rule derives from `stem` directly, without following
    /// continuation classes.
    pub fn derive_all<'a>(&'a self, stem: &'a str) -> impl Iterator<Item = (&'a AffixEntry, String)> + 'a {
        self.entries
            .iter()
            .filter_map(move |entry| entry.derive(self.kind, stem).map(|form| (entry, form)))
    }
}
