use super::{ResolveError, ServiceVariantRule, TimeOfDay};
use crate::model::{RouteRecord, StopRecord};
use crate::normalize::RuleTableError;
use regex::{Regex, RegexBuilder};

/// derives canonical route IDs, route short labels and stop IDs from feed
/// records. built once at startup and shared read-only across workers.
#[derive(Clone, Debug)]
pub struct IdentifierResolver {
    digits: Regex,
    service_variants: Vec<ServiceVariantRule>,
}

impl IdentifierResolver {
    const DIGITS_REGEX: &str = "[0-9]+";

    pub fn new() -> Result<IdentifierResolver, RuleTableError> {
        Self::with_service_variants(ServiceVariantRule::defaults())
    }

    pub fn with_service_variants(
        service_variants: Vec<ServiceVariantRule>,
    ) -> Result<IdentifierResolver, RuleTableError> {
        let digits = RegexBuilder::new(Self::DIGITS_REGEX)
            .build()
            .map_err(|source| RuleTableError::InvalidPattern {
                pattern: String::from(Self::DIGITS_REGEX),
                source,
            })?;
        Ok(IdentifierResolver {
            digits,
            service_variants,
        })
    }

    /// resolves the route ID.
    ///
    /// digit-only short names are their own ID. otherwise the first digit run
    /// plus a time-of-day offset ("7AM" -> 10007, "7pm" -> 20007), or a
    /// [`ServiceVariantRule`] row keyed on the whole short name. anything else
    /// is a fatal [`ResolveError::UnresolvedRouteIdentifier`].
    pub fn resolve_route_id(&self, route: &RouteRecord) -> Result<u64, ResolveError> {
        let unresolved = || ResolveError::UnresolvedRouteIdentifier(route.clone());
        let short_name = route.short_name.as_str();
        if is_digits_only(short_name) {
            return short_name.parse::<u64>().map_err(|_| unresolved());
        }
        let short_name_lc = route.short_name_lowercase();
        if let Some(digits) = self.digits.find(short_name) {
            let n = digits.as_str().parse::<u64>().map_err(|_| unresolved())?;
            if let Some(time_of_day) = TimeOfDay::from_short_name_suffix(&short_name_lc) {
                let route_id = n
                    .checked_add(time_of_day.route_id_offset())
                    .ok_or_else(unresolved)?;
                log::debug!("route '{short_name}' is the {time_of_day} variant of {n}: {route_id}");
                return Ok(route_id);
            }
        }
        for rule in self.service_variants.iter() {
            if let Some(time_of_day) = rule.time_of_day(route) {
                return rule.route_id(time_of_day).ok_or_else(unresolved);
            }
        }
        Err(unresolved())
    }

    /// resolves the route short label. service variant rows produce their own
    /// label ("D ICE AM"), every other route keeps its trimmed short name.
    pub fn resolve_route_short_label(&self, route: &RouteRecord) -> String {
        self.service_variants
            .iter()
            .find_map(|rule| rule.time_of_day(route).map(|tod| rule.short_label(tod)))
            .unwrap_or_else(|| default_route_short_label(route))
    }

    /// resolves the stop ID from the rider-facing stop code, which must be a
    /// non-empty run of decimal digits.
    pub fn resolve_stop_id(&self, stop: &StopRecord) -> Result<u32, ResolveError> {
        match stop.code.as_deref() {
            Some(code) if is_digits_only(code) => code
                .parse::<u32>()
                .map_err(|_| ResolveError::UnresolvedStopIdentifier(stop.clone())),
            _ => Err(ResolveError::UnresolvedStopIdentifier(stop.clone())),
        }
    }
}

/// true when the string is non-empty and every character is an ASCII digit
pub fn is_digits_only(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn default_route_short_label(route: &RouteRecord) -> String {
    route.short_name.trim().to_string()
}
