use super::{LabelKind, PatternRuleTable};

/// cleans direction headsigns, trip headsigns and stop names by running the
/// ordered steps of a [`PatternRuleTable`]. every call is a pure, single-pass
/// function of its input, so one normalizer can be shared across threads.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    table: PatternRuleTable,
}

impl TextNormalizer {
    pub fn new(table: PatternRuleTable) -> TextNormalizer {
        TextNormalizer { table }
    }

    /// cleans a direction headsign. `from_stop_name` enables the rules that
    /// only make sense when the headsign was taken from a stop name, such as
    /// dropping a leading "EB " or keeping only the parenthesized part.
    pub fn clean_direction_headsign(&self, from_stop_name: bool, text: &str) -> String {
        self.normalize(LabelKind::DirectionHeadsign, from_stop_name, text)
    }

    pub fn clean_trip_headsign(&self, text: &str) -> String {
        self.normalize(LabelKind::TripHeadsign, false, text)
    }

    pub fn clean_stop_name(&self, text: &str) -> String {
        self.normalize(LabelKind::StopName, false, text)
    }

    /// runs every step for `kind` in order, then the generic label cleanup so
    /// removed words leave no doubled spaces or dangling separators behind.
    pub fn normalize(&self, kind: LabelKind, from_stop_name: bool, text: &str) -> String {
        let cleaner = self.table.cleaner();
        let result = self
            .table
            .steps(&kind)
            .iter()
            .fold(text.to_string(), |acc, step| {
                match step.apply(cleaner, from_stop_name, &acc) {
                    Some(next) if next != acc => {
                        log::trace!("{kind}: {} rewrote '{acc}' to '{next}'", step.description());
                        next
                    }
                    _ => acc,
                }
            });
        cleaner.clean_label(&result)
    }
}
