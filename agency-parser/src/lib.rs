//! identifier resolution and label normalization for a transit agency's
//! GTFS feed. routes and stops get stable numeric IDs, and headsigns and stop
//! names are cleaned by an ordered, data-driven rule table.
pub mod app;
pub mod clean;
pub mod config;
pub mod model;
pub mod normalize;
pub mod resolve;
