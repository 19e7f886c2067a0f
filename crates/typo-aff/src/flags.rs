// Typed scalar directives

use hashbrown::HashMap;

/// A scalar affix-file directive.
///
/// The directives that drive engine behavior get their own variants; any
/// other directive name is preserved in [`Flag::Other`] so unanticipated
/// directives survive parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Words carrying this code are only valid inside compounds.
    OnlyInCompound,
    /// Words carrying this code are never offered as suggestions.
    NoSuggest,
    /// Minimum length of a compound member.
    CompoundMin,
    /// Words carrying this code must keep their dictionary case.
    KeepCase,
    /// Stems carrying this code are only valid with an affix attached.
    NeedAffix,
    /// Any other directive, by name.
    Other(String),
}

impl Flag {
    /// Map a directive name to its flag.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ONLYINCOMPOUND" => Flag::OnlyInCompound,
            "NOSUGGEST" => Flag::NoSuggest,
            "COMPOUNDMIN" => Flag::CompoundMin,
            "KEEPCASE" => Flag::KeepCase,
            "NEEDAFFIX" => Flag::NeedAffix,
            other => Flag::Other(other.to_string()),
        }
    }

    /// The directive name as written in affix files.
    pub fn name(&self) -> &str {
        match self {
            Flag::OnlyInCompound => "ONLYINCOMPOUND",
            Flag::NoSuggest => "NOSUGGEST",
            Flag::CompoundMin => "COMPOUNDMIN",
            Flag::KeepCase => "KEEPCASE",
            Flag::NeedAffix => "NEEDAFFIX",
            Flag::Other(name) => name,
        }
    }
}

/// Directive values keyed by flag. Later definitions overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagMap {
    values: HashMap<Flag, String>,
}

impl FlagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, flag: Flag, value: impl Into<String>) {
        self.values.insert(flag, value.into());
    }

    pub fn get(&self, flag: &Flag) -> Option<&str> {
        self.values.get(flag).map(String::as_str)
    }

    /// Look up a directive by its name as written in affix files.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        self.get(&Flag::from_name(name))
    }

    pub fn contains(&self, flag: &Flag) -> bool {
        self.values.contains_key(flag)
    }

    /// `COMPOUNDMIN` as a number, if present and numeric.
    pub fn compound_min(&self) -> Option<usize> {
        self.get(&Flag::CompoundMin)?.parse().ok()
    }

    /// Whether `codes` contains the code assigned to `flag`.
    ///
    /// Returns `false` when the flag is not defined or has an empty value.
    pub fn marks(&self, flag: &Flag, codes: &[String]) -> bool {
        match self.get(flag) {
            Some(value) if !value.is_empty() => codes.iter().any(|c| c == value),
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Flag, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }
}
