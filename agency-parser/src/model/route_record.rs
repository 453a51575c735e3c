use std::fmt::Display;

/// the route attributes used to resolve a route identifier and short label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRecord {
    /// agency's public short identifier for the route, such as "7" or "7AM"
    pub short_name: String,
    /// route long name, or a generated fallback when the feed omits it
    pub long_name_or_default: String,
}

impl RouteRecord {
    pub fn new(short_name: &str, long_name_or_default: &str) -> RouteRecord {
        RouteRecord {
            short_name: String::from(short_name),
            long_name_or_default: String::from(long_name_or_default),
        }
    }

    /// builds a record from raw GTFS route fields. the long name falls back
    /// to the route description, and finally to an empty string.
    pub fn from_gtfs_fields(
        short_name: Option<&str>,
        long_name: Option<&str>,
        desc: Option<&str>,
    ) -> RouteRecord {
        let long_name_or_default = [long_name, desc]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or_default();
        RouteRecord::new(short_name.unwrap_or_default(), long_name_or_default)
    }

    pub fn short_name_lowercase(&self) -> String {
        self.short_name.to_lowercase()
    }

    pub fn long_name_lowercase(&self) -> String {
        self.long_name_or_default.to_lowercase()
    }
}

impl Display for RouteRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RouteRecord{{short_name: '{}', long_name_or_default: '{}'}}",
            self.short_name, self.long_name_or_default
        )
    }
}

#[cfg(test)]
mod test {
    use super::RouteRecord;

    #[test]
    fn test_long_name_falls_back_to_desc() {
        let route = RouteRecord::from_gtfs_fields(Some("900"), Some("  "), Some("Morning"));
        assert_eq!(route.long_name_or_default, "Morning");
        assert_eq!(route.short_name, "900");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let route = RouteRecord::from_gtfs_fields(None, None, None);
        assert_eq!(route, RouteRecord::new("", ""));
    }

    #[test]
    fn test_display_carries_raw_values() {
        let route = RouteRecord::new("Special", "Event");
        let msg = route.to_string();
        assert!(msg.contains("'Special'"));
        assert!(msg.contains("'Event'"));
    }
}
