// Rule-code tokenization

use typo_core::enums::RULE_CODE_WIDTH;

/// Split a concatenated code field into rule codes.
///
/// Codes are adjacent groups of [`RULE_CODE_WIDTH`] characters; an odd
/// trailing character forms a one-character code. Grouping is by
/// character, so codes written in non-ASCII scripts split correctly.
///
/// ```
/// use typo_aff::codes::parse_rule_codes;
/// assert_eq!(parse_rule_codes("ABCD"), vec!["AB", "CD"]);
/// assert_eq!(parse_rule_codes("ABC"), vec!["AB", "C"]);
/// assert!(parse_rule_codes("").is_empty());
/// ```
pub fn parse_rule_codes(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(RULE_CODE_WIDTH)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_pairs() {
        assert_eq!(parse_rule_codes("A1B2C3"), vec!["A1", "B2", "C3"]);
    }

    #[test]
    fn single_code() {
        assert_eq!(parse_rule_codes("AB"), vec!["AB"]);
        assert_eq!(parse_rule_codes("A"), vec!["A"]);
    }

    #[test]
    fn multibyte_codes() {
        assert_eq!(parse_rule_codes("ЖЗИЙ"), vec!["ЖЗ", "ИЙ"]);
    }
}
