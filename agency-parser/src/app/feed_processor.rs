use super::feed_row::{
    CleanedTripRow, ResolvedRouteRow, ResolvedStopRow, RouteRow, StopRow, TripRow,
};
use super::AgencyAppError;
use crate::model::{RouteRecord, StopRecord};
use crate::normalize::{PatternRuleTable, TextNormalizer};
use crate::resolve::{IdentifierResolver, ResolveError};
use rayon::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{Read, Write};

/// resolves identifiers and cleans labels for the rows of a GTFS feed. the
/// first unresolved identifier aborts the whole batch.
pub struct FeedProcessor {
    resolver: IdentifierResolver,
    normalizer: TextNormalizer,
    parallelize: bool,
}

impl FeedProcessor {
    pub fn new(parallelize: bool) -> Result<FeedProcessor, AgencyAppError> {
        let resolver = IdentifierResolver::new()?;
        let normalizer = TextNormalizer::new(PatternRuleTable::new()?);
        Ok(FeedProcessor {
            resolver,
            normalizer,
            parallelize,
        })
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn resolve_route(&self, row: &RouteRow) -> Result<ResolvedRouteRow, ResolveError> {
        let route = RouteRecord::from(row);
        let route_id = self.resolver.resolve_route_id(&route)?;
        Ok(ResolvedRouteRow {
            route_id,
            gtfs_route_id: row.route_id.clone(),
            route_short_name: self.resolver.resolve_route_short_label(&route),
            route_long_name: route.long_name_or_default,
        })
    }

    pub fn resolve_stop(&self, row: &StopRow) -> Result<ResolvedStopRow, ResolveError> {
        let stop_id = self.resolver.resolve_stop_id(&StopRecord::from(row))?;
        let stop_name = row.stop_name.as_deref().unwrap_or_default();
        Ok(ResolvedStopRow {
            stop_id,
            gtfs_stop_id: row.stop_id.clone(),
            stop_name: self.normalizer.clean_stop_name(stop_name),
        })
    }

    pub fn clean_trip(&self, row: &TripRow) -> CleanedTripRow {
        let headsign = row.trip_headsign.as_deref().unwrap_or_default();
        CleanedTripRow {
            trip_id: row.trip_id.clone(),
            trip_headsign: self.normalizer.clean_trip_headsign(headsign),
        }
    }

    /// reads routes.txt rows and writes resolved route rows, returning the row count.
    pub fn process_routes<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<usize, AgencyAppError> {
        let rows: Vec<RouteRow> = read_rows(reader)?;
        let resolved = self.map_rows(&rows, |row| self.resolve_route(row))?;
        write_rows(writer, &resolved)
    }

    /// reads stops.txt rows and writes resolved stop rows, returning the row count.
    pub fn process_stops<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<usize, AgencyAppError> {
        let rows: Vec<StopRow> = read_rows(reader)?;
        let resolved = self.map_rows(&rows, |row| self.resolve_stop(row))?;
        write_rows(writer, &resolved)
    }

    /// reads trips.txt rows and writes cleaned headsigns, returning the row count.
    pub fn process_trips<R: Read, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<usize, AgencyAppError> {
        let rows: Vec<TripRow> = read_rows(reader)?;
        let cleaned = self.map_rows(&rows, |row| Ok(self.clean_trip(row)))?;
        write_rows(writer, &cleaned)
    }

    fn map_rows<T, U, F>(&self, rows: &[T], op: F) -> Result<Vec<U>, ResolveError>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> Result<U, ResolveError> + Sync + Send,
    {
        if self.parallelize {
            rows.par_iter().map(op).collect()
        } else {
            rows.iter().map(op).collect()
        }
    }
}

fn read_rows<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>, AgencyAppError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let rows = csv_reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()?;
    log::info!("read {} feed rows", rows.len());
    Ok(rows)
}

fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<usize, AgencyAppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows.iter() {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}
