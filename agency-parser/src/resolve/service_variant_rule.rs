use super::TimeOfDay;
use crate::model::RouteRecord;

/// a named service whose short name carries no digits. the time-of-day
/// variant is read from the end of the route long name instead.
#[derive(Clone, Debug)]
pub struct ServiceVariantRule {
    /// lower-cased short name that selects this rule, compared for equality
    pub short_name: &'static str,
    /// route ID before the time-of-day offset is added
    pub base_route_id: u64,
    /// short label prefix, completed with " AM" or " PM"
    pub label_prefix: &'static str,
    /// lower-cased long name suffix marking the morning variant
    pub am_long_name_suffix: &'static str,
    /// lower-cased long name suffix marking the afternoon variant
    pub pm_long_name_suffix: &'static str,
}

impl ServiceVariantRule {
    /// rows known for this agency
    pub fn defaults() -> Vec<ServiceVariantRule> {
        vec![ServiceVariantRule {
            short_name: "downtown ice service",
            base_route_id: 900,
            label_prefix: "D ICE",
            am_long_name_suffix: "morning",
            pm_long_name_suffix: "afternoon",
        }]
    }

    /// returns the variant when this rule applies to the route and its long
    /// name ends with one of the known suffixes.
    pub fn time_of_day(&self, route: &RouteRecord) -> Option<TimeOfDay> {
        if route.short_name_lowercase() != self.short_name {
            return None;
        }
        let long_name_lc = route.long_name_lowercase();
        if long_name_lc.ends_with(self.am_long_name_suffix) {
            Some(TimeOfDay::Am)
        } else if long_name_lc.ends_with(self.pm_long_name_suffix) {
            Some(TimeOfDay::Pm)
        } else {
            None
        }
    }

    /// the base route ID plus the time-of-day offset, or None on overflow
    pub fn route_id(&self, time_of_day: TimeOfDay) -> Option<u64> {
        self.base_route_id.checked_add(time_of_day.route_id_offset())
    }

    pub fn short_label(&self, time_of_day: TimeOfDay) -> String {
        format!("{} {}", self.label_prefix, time_of_day)
    }
}

#[cfg(test)]
mod test {
    use super::ServiceVariantRule;
    use crate::model::RouteRecord;
    use crate::resolve::{IdentifierResolver, ResolveError, TimeOfDay};

    fn rule(base_route_id: u64) -> ServiceVariantRule {
        ServiceVariantRule {
            short_name: "night owl",
            base_route_id,
            label_prefix: "NO",
            am_long_name_suffix: "early",
            pm_long_name_suffix: "late",
        }
    }

    #[test]
    fn test_route_id() {
        assert_eq!(rule(900).route_id(TimeOfDay::Am), Some(10_900));
        assert_eq!(rule(900).route_id(TimeOfDay::Pm), Some(20_900));
        assert_eq!(rule(u64::MAX).route_id(TimeOfDay::Am), None);
    }

    #[test]
    fn test_overflowing_base_route_id_fails() {
        let resolver = IdentifierResolver::with_service_variants(vec![rule(u64::MAX - 15_000)])
            .expect("test invariant failed: resolver should build");
        let early = RouteRecord::new("Night Owl", "Night Owl - Early");
        let late = RouteRecord::new("Night Owl", "Night Owl - Late");
        assert_eq!(
            resolver.resolve_route_id(&early).expect("should resolve"),
            u64::MAX - 5_000
        );
        assert!(matches!(
            resolver.resolve_route_id(&late),
            Err(ResolveError::UnresolvedRouteIdentifier(_))
        ));
        assert_eq!(resolver.resolve_route_short_label(&late), "NO PM");
    }
}
