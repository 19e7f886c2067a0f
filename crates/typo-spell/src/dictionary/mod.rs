// Stem list: `.dic` parsing and lookup

pub mod wordlist;

pub use wordlist::FrequencyTable;

use log::warn;
use typo_aff::codes::parse_rule_codes;

/// One stem line of a dictionary.
///
/// Lines have one of three shapes: `stem`, `stem/codes`, or
/// `stem/variant1 variant2/codes`. Variants are alternative surface stems
/// that share the entry's rule codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicEntry {
    pub stem: String,
    pub variants: Vec<String>,
    pub codes: Vec<String>,
}

impl DicEntry {
    /// Whether the entry carries no rule codes.
    pub fn is_bare(&self) -> bool {
        self.codes.is_empty()
    }

    /// The stem followed by its variants.
    pub fn surfaces(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.stem.as_str()).chain(self.variants.iter().map(String::as_str))
    }

    fn parse_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split('/').collect();
        let (stem, variants, codes) = match parts.as_slice() {
            [stem] => (*stem, "", ""),
            [stem, codes] => (*stem, "", *codes),
            [stem, variants, codes] => (*stem, *variants, *codes),
            _ => return None,
        };
        let stem = stem.trim();
        if stem.is_empty() {
            return None;
        }
        // Anything after the code field (morphological data) is ignored.
        let codes = codes.split_whitespace().next().unwrap_or("");
        Some(Self {
            stem: stem.to_string(),
            variants: variants.split_whitespace().map(str::to_string).collect(),
            codes: parse_rule_codes(codes),
        })
    }
}

/// The parsed stem list, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<DicEntry>,
}

impl Dictionary {
    /// Parse dictionary text.
    ///
    /// A purely numeric first line is the Hunspell word-count header and is
    /// skipped. Lines starting with `#` or a tab are comments. Lines with
    /// more than two `/` separators are skipped with a warning.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
        let mut entries = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            if idx == 0 && is_count_header(raw) {
                continue;
            }
            if raw.starts_with('#') || raw.starts_with('\t') {
                continue;
            }
            let line = raw.trim_end();
            if line.is_empty() {
                continue;
            }
            match DicEntry::parse_line(line) {
                Some(entry) => entries.push(entry),
                None => warn!("dictionary line {}: malformed entry `{line}`, skipped", idx + 1),
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[DicEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose stem or one of whose variants is exactly `word`.
    pub fn lookup<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'a DicEntry> + 'a {
        self.entries.iter().filter(move |e| e.surfaces().any(|s| s == word))
    }

    /// Entries whose stem or one of whose variants begins `token`.
    pub fn prefix_candidates<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a DicEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.surfaces().any(|s| token.starts_with(s)))
    }
}

fn is_count_header(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}
