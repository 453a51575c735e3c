use super::RuleTableError;
use regex::{Regex, RegexBuilder};

/// call sites a [`NormalizationRule`] applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleScope {
    /// every call site of the label kind
    Universal,
    /// only when a direction headsign is derived from a stop name
    FromStopName,
}

impl RuleScope {
    pub fn applies(&self, from_stop_name: bool) -> bool {
        match self {
            RuleScope::Universal => true,
            RuleScope::FromStopName => from_stop_name,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplaceMode {
    /// replace every non-overlapping match
    All,
    /// replace the leftmost match only
    First,
}

/// a compiled pattern with its replacement template (`${n}` back-references
/// allowed) and the scope it runs in.
#[derive(Clone, Debug)]
pub struct NormalizationRule {
    pub pattern: Regex,
    pub replacement: String,
    pub scope: RuleScope,
    pub mode: ReplaceMode,
}

impl NormalizationRule {
    pub fn new(pattern: Regex, replacement: &str, scope: RuleScope) -> NormalizationRule {
        NormalizationRule {
            pattern,
            replacement: String::from(replacement),
            scope,
            mode: ReplaceMode::All,
        }
    }

    pub fn first_match_only(mut self) -> NormalizationRule {
        self.mode = ReplaceMode::First;
        self
    }

    pub fn apply(&self, text: &str) -> String {
        let replacement = self.replacement.as_str();
        match self.mode {
            ReplaceMode::All => self.pattern.replace_all(text, replacement).into_owned(),
            ReplaceMode::First => self.pattern.replace(text, replacement).into_owned(),
        }
    }
}

/// compiles a rule pattern, reporting the offending pattern on failure.
pub fn compile_pattern(pattern: &str, case_insensitive: bool) -> Result<Regex, RuleTableError> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| RuleTableError::InvalidPattern {
            pattern: String::from(pattern),
            source,
        })
}
