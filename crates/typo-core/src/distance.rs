// Levenshtein edit distance over Unicode scalar values

/// Compute the classic Levenshtein distance between two strings.
///
/// Insertion, deletion, and substitution each cost 1. Distances are counted
/// in characters, not bytes, so multi-byte scripts behave as expected.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    row_distance(&a_chars, &b_chars, usize::MAX).unwrap_or(usize::MAX)
}

/// Compute the Levenshtein distance, giving up once it must exceed `max`.
///
/// Returns `None` when the distance is greater than `max`. The length
/// difference is checked first, and the row scan stops as soon as every
/// cell of the current row is above the bound.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if a_chars.len().abs_diff(b_chars.len()) > max {
        return None;
    }
    row_distance(&a_chars, &b_chars, max)
}

/// The first `n` characters of `word` (or all of it if shorter).
pub fn leading_chars(word: &str, n: usize) -> &str {
    match word.char_indices().nth(n) {
        Some((idx, _)) => &word[..idx],
        None => word,
    }
}

/// Two-row dynamic programming table with an early-exit bound.
fn row_distance(a: &[char], b: &[char], max: usize) -> Option<usize> {
    if a.is_empty() {
        return (b.len() <= max).then_some(b.len());
    }
    if b.is_empty() {
        return (a.len() <= max).then_some(a.len());
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
            row_min = row_min.min(curr[j + 1]);
        }
        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= max).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_zero_distance() {
        assert_eq!(levenshtein("hello", "hello"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn single_edits_have_distance_one() {
        assert_eq!(levenshtein("hello", "hallo"), 1); // substitution
        assert_eq!(levenshtein("helo", "hello"), 1); // insertion
        assert_eq!(levenshtein("hello", "helo"), 1); // deletion
    }

    #[test]
    fn empty_side_costs_full_length() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn transposition_costs_two() {
        assert_eq!(levenshtein("ab", "ba"), 2);
    }

    #[test]
    fn classic_kitten_sitting() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(levenshtein("медъ", "мед"), 1);
        assert_eq!(levenshtein("ёж", "еж"), 1);
    }

    #[test]
    fn bounded_matches_unbounded_within_limit() {
        for (a, b) in [("helo", "hello"), ("cat", "cats"), ("kitten", "sitting")] {
            assert_eq!(levenshtein_within(a, b, 3), Some(levenshtein(a, b)));
        }
    }

    #[test]
    fn bounded_gives_up_above_limit() {
        assert_eq!(levenshtein_within("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_within("a", "abcd", 2), None);
        assert_eq!(levenshtein_within("", "abc", 2), None);
    }

    #[test]
    fn bounded_exact_limit_is_inclusive() {
        assert_eq!(levenshtein_within("ab", "ba", 2), Some(2));
    }

    #[test]
    fn leading_chars_slices_on_char_boundaries() {
        assert_eq!(leading_chars("hello", 3), "hel");
        assert_eq!(leading_chars("hi", 5), "hi");
        assert_eq!(leading_chars("медведь", 3), "мед");
        assert_eq!(leading_chars("abc", 0), "");
    }
}
