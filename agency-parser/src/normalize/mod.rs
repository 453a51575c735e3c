mod label_kind;
mod normalization_rule;
mod normalization_step;
mod pattern_rule_table;
mod rule_table_error;
mod text_normalizer;

pub use label_kind::LabelKind;
pub use normalization_rule::{compile_pattern, NormalizationRule, ReplaceMode, RuleScope};
pub use normalization_step::NormalizationStep;
pub use pattern_rule_table::PatternRuleTable;
pub use rule_table_error::RuleTableError;
pub use text_normalizer::TextNormalizer;
