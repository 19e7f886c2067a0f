// Shared enums and engine-wide constants

/// Direction in which an affix rule attaches to a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixKind {
    /// `PFX`: the addition is prepended, the removal strips a leading literal.
    Prefix,
    /// `SFX`: the addition is appended, the removal strips a trailing pattern.
    Suffix,
}

impl AffixKind {
    /// Parse the directive marker of an affix header or entry line.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "PFX" => Some(AffixKind::Prefix),
            "SFX" => Some(AffixKind::Suffix),
            _ => None,
        }
    }

    /// The directive marker as written in affix files.
    pub fn marker(self) -> &'static str {
        match self {
            AffixKind::Prefix => "PFX",
            AffixKind::Suffix => "SFX",
        }
    }
}

/// Rule code that marks a dictionary entry but names no affix rule.
///
/// It must be skipped both at the top level and inside continuation classes.
pub const SENTINEL_CODE: &str = "V2";

/// Number of characters in one rule code of a dictionary or continuation field.
pub const RULE_CODE_WIDTH: usize = 2;

/// Default number of suggestions returned by `suggest`.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Default maximum edit distance between a token and a suggestion.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_roundtrip() {
        for kind in [AffixKind::Prefix, AffixKind::Suffix] {
            assert_eq!(AffixKind::from_marker(kind.marker()), Some(kind));
        }
    }

    #[test]
    fn unknown_marker() {
        assert_eq!(AffixKind::from_marker("REP"), None);
        assert_eq!(AffixKind::from_marker("sfx"), None);
    }
}
