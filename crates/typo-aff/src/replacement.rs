// REP table: common-typo substitutions

/// Ordered `(from, to)` substitution pairs from `REP` lines.
///
/// Order is preserved as written; consumers apply pairs sequentially.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    pairs: Vec<(String, String)>,
}

impl ReplacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.pairs.push((from.into(), to.into()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(f, t)| (f.as_str(), t.as_str()))
    }

    /// Every single-site rewrite of `word`: for each pair, in order, and each
    /// occurrence of `from`, the word with that occurrence replaced by `to`.
    ///
    /// Hunspell writes spaces in `to` as underscores; they are restored here.
    pub fn variants(&self, word: &str) -> Vec<String> {
        let mut out = Vec::new();
        for (from, to) in self.iter() {
            if from.is_empty() {
                continue;
            }
            let to = to.replace('_', " ");
            for (idx, _) in word.match_indices(from) {
                let mut candidate = String::with_capacity(word.len() + to.len());
                candidate.push_str(&word[..idx]);
                candidate.push_str(&to);
                candidate.push_str(&word[idx + from.len()..]);
                out.push(candidate);
            }
        }
        out
    }
}
