// Case type detection and conversion

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "cat".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Cat".
    ///
    /// The only pattern the validator and suggestion ranking recase.
    FirstUpper,
    /// Mixed case that does not fit other patterns: "caT".
    Complex,
    /// All letters are uppercase: "CAT".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Characters without case (digits, punctuation) are ignored.
pub fn detect_case(word: &str) -> CaseType {
    let mut letters = word.chars().filter(|c| c.is_uppercase() || c.is_lowercase());
    let Some(first) = letters.next() else {
        return CaseType::NoLetters;
    };
    let (mut upper_rest, mut lower_rest) = (false, false);
    for c in letters {
        if c.is_uppercase() {
            upper_rest = true;
        } else {
            lower_rest = true;
        }
    }
    match (first.is_uppercase(), upper_rest, lower_rest) {
        (true, _, false) => CaseType::AllUpper,
        (true, false, true) => CaseType::FirstUpper,
        (false, false, _) => CaseType::AllLower,
        _ => CaseType::Complex,
    }
}

/// The variant of `word` with only its first character lowercased.
///
/// Returns `None` when the first character is not uppercase, since the
/// variant would then be identical to the input.
pub fn lowercase_first(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let first = chars.next()?;
    if !first.is_uppercase() {
        return None;
    }
    let mut lowered: String = first.to_lowercase().collect();
    lowered.push_str(chars.as_str());
    Some(lowered)
}

/// `word` with its first character uppercased and the rest untouched.
pub fn uppercase_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- detect_case tests --

    #[test]
    fn detect_empty() {
        assert_eq!(detect_case(""), CaseType::NoLetters);
    }

    #[test]
    fn detect_no_letters() {
        assert_eq!(detect_case("123"), CaseType::NoLetters);
        assert_eq!(detect_case("..."), CaseType::NoLetters);
    }

    #[test]
    fn detect_simple_patterns() {
        assert_eq!(detect_case("cat"), CaseType::AllLower);
        assert_eq!(detect_case("Cat"), CaseType::FirstUpper);
        assert_eq!(detect_case("CAT"), CaseType::AllUpper);
        assert_eq!(detect_case("McDonald"), CaseType::Complex);
    }

    #[test]
    fn detect_with_digits() {
        assert_eq!(detect_case("abc123"), CaseType::AllLower);
        assert_eq!(detect_case("ABC123"), CaseType::AllUpper);
        assert_eq!(detect_case("Abc123"), CaseType::FirstUpper);
    }

    #[test]
    fn detect_cyrillic() {
        assert_eq!(detect_case("мед"), CaseType::AllLower);
        assert_eq!(detect_case("Мед"), CaseType::FirstUpper);
        assert_eq!(detect_case("МЕД"), CaseType::AllUpper);
    }

    // -- lowercase_first tests --

    #[test]
    fn lowercase_first_only_touches_first_char() {
        assert_eq!(lowercase_first("Hello").as_deref(), Some("hello"));
        assert_eq!(lowercase_first("NASA").as_deref(), Some("nASA"));
        assert_eq!(lowercase_first("Мед").as_deref(), Some("мед"));
    }

    #[test]
    fn lowercase_first_none_when_unchanged() {
        assert_eq!(lowercase_first("hello"), None);
        assert_eq!(lowercase_first("1st"), None);
        assert_eq!(lowercase_first(""), None);
    }

    #[test]
    fn uppercase_first_keeps_the_rest() {
        assert_eq!(uppercase_first("hello"), "Hello");
        assert_eq!(uppercase_first("iPhone"), "IPhone");
        assert_eq!(uppercase_first("ёлка"), "Ёлка");
        assert_eq!(uppercase_first(""), "");
    }
}
