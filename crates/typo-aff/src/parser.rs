// Affix file scanner and directive dispatch

use std::collections::BTreeSet;

use hashbrown::HashMap;
use log::{debug, warn};
use typo_core::enums::AffixKind;

use crate::AffError;
use crate::codes::parse_rule_codes;
use crate::compound::CompoundRule;
use crate::condition::{Anchor, Condition};
use crate::flags::{Flag, FlagMap};
use crate::replacement::ReplacementTable;
use crate::rule::{AffixEntry, AffixRule, Removal};

/// Everything compiled out of one affix file.
///
/// Built once by [`compile`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledRules {
    /// Affix rules keyed by rule code.
    pub rules: HashMap<String, AffixRule>,
    /// `COMPOUNDRULE` sources in file order.
    pub compound_rules: Vec<CompoundRule>,
    /// Rule codes referenced by compound rules, plus the `ONLYINCOMPOUND` code.
    pub compound_rule_codes: BTreeSet<String>,
    /// `REP` pairs in file order.
    pub replacements: ReplacementTable,
    /// Every other scalar directive.
    pub flags: FlagMap,
}

impl CompiledRules {
    /// Look up an affix rule by code.
    pub fn rule(&self, code: &str) -> Option<&AffixRule> {
        self.rules.get(code)
    }
}

/// Compile affix-file text.
///
/// Malformed lines are skipped with a warning. The only hard failure is a
/// block header whose entry count runs past the end of the text.
pub fn compile(text: &str) -> Result<CompiledRules, AffError> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    AffixParser::new(text).parse()
}

/// Why a single entry line was rejected.
#[derive(Debug, thiserror::Error)]
enum LineIssue {
    #[error("expected at least {expected} columns, found {found}")]
    TooFewColumns { expected: usize, found: usize },
    #[error("invalid condition `{0}`: {1}")]
    BadCondition(String, regex::Error),
}

struct AffixParser<'t> {
    lines: Vec<&'t str>,
    compiled: CompiledRules,
}

impl<'t> AffixParser<'t> {
    fn new(text: &'t str) -> Self {
        Self {
            lines: text.lines().collect(),
            compiled: CompiledRules::default(),
        }
    }

    fn parse(mut self) -> Result<CompiledRules, AffError> {
        let mut i = 0;
        while i < self.lines.len() {
            let parts: Vec<&str> = strip_comment(self.lines[i]).split_whitespace().collect();
            let Some(&directive) = parts.first() else {
                i += 1;
                continue;
            };

            let consumed = match directive {
                "PFX" | "SFX" => self.affix_block(i, &parts)?,
                "COMPOUNDRULE" => self.compound_block(i, &parts)?,
                "REP" => {
                    // Three-token lines only; this also skips the `REP <count>` header.
                    if parts.len() == 3 {
                        self.compiled.replacements.push(parts[1], parts[2]);
                    }
                    0
                }
                name => {
                    let value = parts.get(1).copied().unwrap_or("");
                    self.compiled.flags.insert(Flag::from_name(name), value);
                    0
                }
            };
            i += 1 + consumed;
        }

        self.collect_compound_codes();
        debug!(
            "compiled {} affix rules, {} compound rules, {} replacements, {} flags",
            self.compiled.rules.len(),
            self.compiled.compound_rules.len(),
            self.compiled.replacements.len(),
            self.compiled.flags.len()
        );
        Ok(self.compiled)
    }

    /// Parse a `PFX`/`SFX` header and its entry lines.
    ///
    /// Returns the number of entry lines consumed after the header.
    fn affix_block(&mut self, at: usize, parts: &[&str]) -> Result<usize, AffError> {
        let shift = layout_shift(parts);
        // The shifted layout states the kind in its repeated marker column.
        let Some(kind) = AffixKind::from_marker(parts[shift]) else {
            return Ok(0);
        };
        let code = parts.get(1 + shift);
        let combineable = parts.get(2 + shift);
        let count = parts.get(3 + shift).and_then(|c| c.parse::<usize>().ok());

        let (Some(code), Some(combineable), Some(count)) = (code, combineable, count) else {
            warn!("line {}: malformed {} header, skipped", at + 1, kind.marker());
            return Ok(0);
        };
        self.ensure_available(kind.marker(), at, count)?;

        let mut entries = Vec::with_capacity(count);
        for line_idx in at + 1..=at + count {
            match parse_entry(kind, self.lines[line_idx]) {
                Ok(entry) => entries.push(entry),
                Err(issue) => warn!("line {}: {issue}; {} entry skipped", line_idx + 1, kind.marker()),
            }
        }

        self.compiled.rules.insert(
            code.to_string(),
            AffixRule {
                kind,
                combineable: *combineable == "Y",
                entries,
            },
        );
        Ok(count)
    }

    /// Parse a `COMPOUNDRULE` header and its pattern lines.
    fn compound_block(&mut self, at: usize, parts: &[&str]) -> Result<usize, AffError> {
        let Some(count) = parts.get(1).and_then(|c| c.parse::<usize>().ok()) else {
            warn!("line {}: malformed COMPOUNDRULE header, skipped", at + 1);
            return Ok(0);
        };
        self.ensure_available("COMPOUNDRULE", at, count)?;

        for line_idx in at + 1..=at + count {
            let line_parts: Vec<&str> = strip_comment(self.lines[line_idx]).split_whitespace().collect();
            match line_parts.get(1) {
                Some(pattern) => self.compiled.compound_rules.push(CompoundRule::new(*pattern)),
                None => warn!("line {}: compound rule without a pattern, skipped", line_idx + 1),
            }
        }
        Ok(count)
    }

    fn ensure_available(&self, directive: &str, at: usize, count: usize) -> Result<(), AffError> {
        let available = self.lines.len() - at - 1;
        if count > available {
            return Err(AffError::TruncatedBlock {
                directive: directive.to_string(),
                line: at + 1,
                expected: count,
                available,
            });
        }
        Ok(())
    }

    fn collect_compound_codes(&mut self) {
        let mut codes = BTreeSet::new();
        for rule in &self.compiled.compound_rules {
            codes.extend(rule.referenced_codes());
        }
        if let Some(code) = self.compiled.flags.get(&Flag::OnlyInCompound) {
            if !code.is_empty() {
                codes.insert(code.to_string());
            }
        }
        self.compiled.compound_rule_codes = codes;
    }
}

/// Column shift for the layout that repeats the `SFX`/`PFX` marker in
/// the third column (`SFX A1 SFX A1 0 s .`).
fn layout_shift(parts: &[&str]) -> usize {
    match parts.get(2) {
        Some(&"SFX") | Some(&"PFX") => 2,
        _ => 0,
    }
}

/// Parse one entry line of a `PFX`/`SFX` block.
fn parse_entry(kind: AffixKind, raw: &str) -> Result<AffixEntry, LineIssue> {
    let parts: Vec<&str> = strip_comment(raw).split_whitespace().collect();
    let shift = layout_shift(&parts);
    if parts.len() < 4 + shift {
        return Err(LineIssue::TooFewColumns {
            expected: 4 + shift,
            found: parts.len(),
        });
    }

    let remove = parts[2 + shift];
    let (add, continuation) = parts[3 + shift].split_once('/').unwrap_or((parts[3 + shift], ""));
    let condition = parts.get(4 + shift).copied().unwrap_or(".");

    let anchor = match kind {
        AffixKind::Prefix => Anchor::Start,
        AffixKind::Suffix => Anchor::End,
    };

    let condition = if condition == "." {
        None
    } else {
        Some(Condition::new(condition, anchor).map_err(|e| LineIssue::BadCondition(condition.to_string(), e))?)
    };

    let remove = if remove == "0" {
        None
    } else {
        Some(match kind {
            AffixKind::Suffix => Removal::Suffix(
                Condition::new(remove, Anchor::End)
                    .or_else(|_| Condition::literal(remove, Anchor::End))
                    .map_err(|e| LineIssue::BadCondition(remove.to_string(), e))?,
            ),
            AffixKind::Prefix => Removal::Prefix(remove.to_string()),
        })
    };

    Ok(AffixEntry {
        add: if add == "0" { String::new() } else { add.to_string() },
        remove,
        condition,
        continuation: parse_rule_codes(continuation),
    })
}

/// Cut a trailing comment.
///
/// A comment starts at a `#` that begins the line or follows whitespace;
/// a `#` inside a token (as in some compound rules) is kept.
fn strip_comment(line: &str) -> &str {
    let mut prev: Option<char> = None;
    for (idx, c) in line.char_indices() {
        if c == '#' && prev.is_none_or(char::is_whitespace) {
            return &line[..idx];
        }
        prev = Some(c);
    }
    line
}
