use super::NormalizationRule;
use crate::clean::{GenericClean, LabelCleaner};

/// one entry in a label kind's sequence: either an agency rule or a call
/// into the generic cleaner.
#[derive(Clone, Debug)]
pub enum NormalizationStep {
    Rule(NormalizationRule),
    Generic(GenericClean),
}

impl NormalizationStep {
    /// runs this step, or returns `None` when the rule's scope excludes it.
    pub fn apply(
        &self,
        cleaner: &LabelCleaner,
        from_stop_name: bool,
        text: &str,
    ) -> Option<String> {
        match self {
            NormalizationStep::Rule(rule) if rule.scope.applies(from_stop_name) => {
                Some(rule.apply(text))
            }
            NormalizationStep::Rule(_) => None,
            NormalizationStep::Generic(generic) => Some(generic.apply(cleaner, text)),
        }
    }

    pub fn description(&self) -> String {
        match self {
            NormalizationStep::Rule(rule) => format!("rule '{}'", rule.pattern.as_str()),
            NormalizationStep::Generic(generic) => format!("generic {generic:?}"),
        }
    }
}
