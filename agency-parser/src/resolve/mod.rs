mod identifier_resolver;
mod resolve_error;
mod service_variant_rule;
mod time_of_day;

pub use identifier_resolver::{is_digits_only, IdentifierResolver};
pub use resolve_error::ResolveError;
pub use service_variant_rule::ServiceVariantRule;
pub use time_of_day::TimeOfDay;
