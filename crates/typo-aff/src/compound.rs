// COMPOUNDRULE sources and pattern compilation

use hashbrown::HashMap;
use regex::{Regex, RegexBuilder};

/// Characters of a compound rule that act as pattern operators rather than
/// rule codes.
const OPERATORS: &[char] = &['(', ')', '[', ']', '{', '}', '*', '+', '?', '|', '.', '^', '$', '\\'];

/// A `COMPOUNDRULE` line, e.g. `AB*C?`.
///
/// Each non-operator character names a rule code; operators keep their
/// regular-expression meaning when the rule is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRule {
    source: String,
}

impl CompoundRule {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Rule codes referenced by this rule, in order of appearance.
    pub fn referenced_codes(&self) -> impl Iterator<Item = String> + '_ {
        self.source
            .chars()
            .filter(|c| !OPERATORS.contains(c) && !c.is_whitespace())
            .map(String::from)
    }

    /// Build the anchored pattern text for this rule.
    ///
    /// Every referenced code is replaced by a group alternating over its
    /// member words. Returns `None` if some referenced code has no members,
    /// since the rule could then never match a real compound.
    pub fn pattern(&self, members: &HashMap<String, Vec<String>>) -> Option<String> {
        let mut body = String::new();
        for c in self.source.chars() {
            if OPERATORS.contains(&c) || c.is_whitespace() {
                body.push(c);
                continue;
            }
            let words = members.get(c.to_string().as_str())?;
            if words.is_empty() {
                return None;
            }
            body.push_str("(?:");
            for (i, word) in words.iter().enumerate() {
                if i > 0 {
                    body.push('|');
                }
                body.push_str(&regex::escape(word));
            }
            body.push(')');
        }
        Some(format!("^(?:{body})$"))
    }

    /// Compile the rule into a case-insensitive matcher over whole words.
    ///
    /// `Ok(None)` means the rule is unsatisfiable (see [`Self::pattern`]).
    pub fn compile(&self, members: &HashMap<String, Vec<String>>) -> Result<Option<Regex>, regex::Error> {
        match self.pattern(members) {
            Some(pattern) => RegexBuilder::new(&pattern).case_insensitive(true).build().map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(pairs: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(code, words)| (code.to_string(), words.iter().map(|w| w.to_string()).collect()))
            .collect()
    }

    #[test]
    fn referenced_codes_skip_operators() {
        let rule = CompoundRule::new("A*B?(C)");
        let codes: Vec<String> = rule.referenced_codes().collect();
        assert_eq!(codes, vec!["A", "B", "C"]);
    }

    #[test]
    fn pattern_substitutes_members() {
        let rule = CompoundRule::new("AB");
        let m = members(&[("A", &["foot"]), ("B", &["ball", "path"])]);
        assert_eq!(rule.pattern(&m).as_deref(), Some("^(?:(?:foot)(?:ball|path))$"));
    }

    #[test]
    fn compiled_rule_matches_concatenation() {
        let rule = CompoundRule::new("AB");
        let m = members(&[("A", &["foot"]), ("B", &["ball"])]);
        let re = rule.compile(&m).unwrap().unwrap();
        assert!(re.is_match("football"));
        assert!(re.is_match("FootBall"));
        assert!(!re.is_match("ballfoot"));
        assert!(!re.is_match("footballs"));
    }

    #[test]
    fn operators_keep_their_meaning() {
        let rule = CompoundRule::new("A*B");
        let m = members(&[("A", &["x"]), ("B", &["end"])]);
        let re = rule.compile(&m).unwrap().unwrap();
        assert!(re.is_match("end"));
        assert!(re.is_match("xxend"));
    }

    #[test]
    fn member_words_are_escaped() {
        let rule = CompoundRule::new("AB");
        let m = members(&[("A", &["a.b"]), ("B", &["c"])]);
        let re = rule.compile(&m).unwrap().unwrap();
        assert!(re.is_match("a.bc"));
        assert!(!re.is_match("axbc"));
    }

    #[test]
    fn missing_members_make_rule_unsatisfiable() {
        let rule = CompoundRule::new("AB");
        let m = members(&[("A", &["foot"])]);
        assert!(rule.pattern(&m).is_none());
        assert!(rule.compile(&m).unwrap().is_none());
    }
}
