// Anchored regular-expression conditions

use regex::Regex;

/// Where a condition is anchored within the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The pattern must match at the start of the word.
    Start,
    /// The pattern must match at the end of the word.
    End,
}

/// A compiled, anchored pattern such as an affix condition (`[^aeiou]y`)
/// or a suffix removal (`y`).
///
/// Equality compares the source text and anchor, so two independently
/// parsed copies of the same affix file compare equal.
#[derive(Debug, Clone)]
pub struct Condition {
    source: String,
    anchor: Anchor,
    regex: Regex,
}

impl Condition {
    /// Compile `source` anchored at `anchor`.
    pub fn new(source: &str, anchor: Anchor) -> Result<Self, regex::Error> {
        let pattern = match anchor {
            Anchor::Start => format!("^(?:{source})"),
            Anchor::End => format!("(?:{source})$"),
        };
        Ok(Self {
            source: source.to_string(),
            anchor,
            regex: Regex::new(&pattern)?,
        })
    }

    /// Compile `text` as a literal string anchored at `anchor`.
    ///
    /// The stored source is the escaped pattern.
    pub fn literal(text: &str, anchor: Anchor) -> Result<Self, regex::Error> {
        Self::new(&regex::escape(text), anchor)
    }

    /// Whether the condition holds for `word`.
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }

    /// Remove the first match of the condition from `word`.
    ///
    /// The word is returned unchanged when the pattern does not match.
    pub fn strip(&self, word: &str) -> String {
        self.regex.replace(word, "").into_owned()
    }

    /// The pattern text as written in the source file.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.anchor == other.anchor
    }
}

impl Eq for Condition {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_anchor_matches_suffix_only() {
        let cond = Condition::new("[^aeiou]y", Anchor::End).unwrap();
        assert!(cond.is_match("happy"));
        assert!(!cond.is_match("play"));
        assert!(!cond.is_match("happyness"));
    }

    #[test]
    fn start_anchor_matches_prefix_only() {
        let cond = Condition::new("[^еёюяи]", Anchor::Start).unwrap();
        assert!(cond.is_match("дом"));
        assert!(!cond.is_match("ём"));
        assert!(!cond.is_match(""));
    }

    #[test]
    fn alternation_stays_anchored() {
        let cond = Condition::new("s|x", Anchor::End).unwrap();
        assert!(cond.is_match("box"));
        assert!(!cond.is_match("sad"));
    }

    #[test]
    fn strip_removes_anchored_match() {
        let cond = Condition::new("y", Anchor::End).unwrap();
        assert_eq!(cond.strip("happy"), "happ");
        assert_eq!(cond.strip("yes"), "yes");
    }

    #[test]
    fn literal_escapes_metacharacters() {
        let cond = Condition::literal("a.b", Anchor::End).unwrap();
        assert_eq!(cond.source(), r"a\.b");
        assert!(cond.is_match("xa.b"));
        assert!(!cond.is_match("xaxb"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(Condition::new("[abc", Anchor::End).is_err());
    }

    #[test]
    fn equality_ignores_compiled_form() {
        let a = Condition::new("ey", Anchor::End).unwrap();
        let b = Condition::new("ey", Anchor::End).unwrap();
        let c = Condition::new("ey", Anchor::Start).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
