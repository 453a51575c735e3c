use crate::model::{RouteRecord, StopRecord};
use serde::{Deserialize, Serialize};

/// a row of a GTFS routes.txt file. columns not listed here are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct RouteRow {
    pub route_id: String,
    #[serde(default)]
    pub route_short_name: Option<String>,
    #[serde(default)]
    pub route_long_name: Option<String>,
    #[serde(default)]
    pub route_desc: Option<String>,
}

impl From<&RouteRow> for RouteRecord {
    fn from(row: &RouteRow) -> Self {
        RouteRecord::from_gtfs_fields(
            row.route_short_name.as_deref(),
            row.route_long_name.as_deref(),
            row.route_desc.as_deref(),
        )
    }
}

/// a row of a GTFS stops.txt file.
#[derive(Clone, Debug, Deserialize)]
pub struct StopRow {
    pub stop_id: String,
    #[serde(default)]
    pub stop_code: Option<String>,
    #[serde(default)]
    pub stop_name: Option<String>,
}

impl From<&StopRow> for StopRecord {
    fn from(row: &StopRow) -> Self {
        StopRecord::new(row.stop_code.as_deref())
    }
}

/// a row of a GTFS trips.txt file.
#[derive(Clone, Debug, Deserialize)]
pub struct TripRow {
    pub trip_id: String,
    #[serde(default)]
    pub trip_headsign: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedRouteRow {
    pub route_id: u64,
    pub gtfs_route_id: String,
    pub route_short_name: String,
    pub route_long_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedStopRow {
    pub stop_id: u32,
    pub gtfs_stop_id: String,
    pub stop_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CleanedTripRow {
    pub trip_id: String,
    pub trip_headsign: String,
}
