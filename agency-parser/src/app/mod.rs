mod agency_app;
mod agency_app_error;
mod feed_processor;
pub mod feed_row;

pub use agency_app::{AgencyApp, AgencyOperation};
pub use agency_app_error::AgencyAppError;
pub use feed_processor::FeedProcessor;
