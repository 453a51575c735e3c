use super::LabelCleaner;

/// names one of the generic [`LabelCleaner`] primitives so it can sit in a
/// normalization sequence next to agency-specific rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenericClean {
    And,
    At,
    Slashes,
    Numbers,
    StreetTypes,
    Label,
}

impl GenericClean {
    pub fn apply(&self, cleaner: &LabelCleaner, text: &str) -> String {
        match self {
            GenericClean::And => cleaner.clean_and(text),
            GenericClean::At => cleaner.clean_at(text),
            GenericClean::Slashes => cleaner.clean_slashes(text),
            GenericClean::Numbers => cleaner.clean_numbers(text),
            GenericClean::StreetTypes => cleaner.clean_street_types(text),
            GenericClean::Label => cleaner.clean_label(text),
        }
    }
}
