use super::{
    compile_pattern, LabelKind, NormalizationRule, NormalizationStep, RuleScope, RuleTableError,
};
use crate::clean::{clean_words, GenericClean, LabelCleaner};
use std::collections::HashMap;

/// the immutable, ordered normalization steps for every [`LabelKind`], along
/// with the generic cleaner the steps delegate to. compiled once at startup
/// and passed to the [`super::TextNormalizer`].
#[derive(Clone, Debug)]
pub struct PatternRuleTable {
    cleaner: LabelCleaner,
    steps: HashMap<LabelKind, Vec<NormalizationStep>>,
}

impl PatternRuleTable {
    /// the rule table for this agency.
    pub fn new() -> Result<PatternRuleTable, RuleTableError> {
        use GenericClean as G;
        use NormalizationStep as S;
        let direction_headsign = vec![
            S::Generic(G::Label),
            // default trip headsigns carry no destination
            S::Rule(NormalizationRule::new(
                clean_words(&["inbound", "outbound"])?,
                "",
                RuleScope::Universal,
            )),
            S::Rule(NormalizationRule::new(
                compile_pattern("^(eb|nb|sb|wb) ", true)?,
                "",
                RuleScope::FromStopName,
            )),
            S::Rule(NormalizationRule::new(
                clean_words(&["transit terminal"])?,
                "Term",
                RuleScope::FromStopName,
            )),
            // only the first parenthetical group is kept
            S::Rule(
                NormalizationRule::new(
                    compile_pattern(r"([^(]+)\(([^)]+)\)", true)?,
                    "${2}",
                    RuleScope::FromStopName,
                )
                .first_match_only(),
            ),
            S::Rule(NormalizationRule::new(
                compile_pattern(" - .*$", true)?,
                "",
                RuleScope::FromStopName,
            )),
        ];
        let trip_headsign = vec![
            S::Generic(G::Slashes),
            S::Generic(G::Numbers),
            S::Generic(G::StreetTypes),
            S::Generic(G::Label),
        ];
        let stop_name = vec![
            S::Generic(G::And),
            S::Generic(G::At),
            S::Generic(G::Slashes),
            S::Generic(G::StreetTypes),
            S::Generic(G::Label),
        ];
        let steps = HashMap::from([
            (LabelKind::DirectionHeadsign, direction_headsign),
            (LabelKind::TripHeadsign, trip_headsign),
            (LabelKind::StopName, stop_name),
        ]);
        Ok(PatternRuleTable::from_steps(LabelCleaner::new()?, steps))
    }

    /// builds a table from explicit step lists. label kinds without an entry
    /// pass through unchanged.
    pub fn from_steps(
        cleaner: LabelCleaner,
        steps: HashMap<LabelKind, Vec<NormalizationStep>>,
    ) -> PatternRuleTable {
        PatternRuleTable { cleaner, steps }
    }

    pub fn cleaner(&self) -> &LabelCleaner {
        &self.cleaner
    }

    /// the ordered steps for a label kind
    pub fn steps(&self, kind: &LabelKind) -> &[NormalizationStep] {
        self.steps.get(kind).map(Vec::as_slice).unwrap_or_default()
    }
}
