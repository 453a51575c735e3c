use crate::model::{RouteRecord, StopRecord};

/// fatal identifier failures. a record matching no derivation rule must abort
/// the batch, since a missing or shifting identifier breaks identity across
/// feed versions.
#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("unexpected route ID for {0}! add a route ID rule for this route")]
    UnresolvedRouteIdentifier(RouteRecord),
    #[error("unexpected stop ID for {0}! stop code must be a non-empty run of decimal digits")]
    UnresolvedStopIdentifier(StopRecord),
}
