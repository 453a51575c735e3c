use crate::{normalize::RuleTableError, resolve::ResolveError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgencyAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("{source}")]
    ResolveError {
        #[from]
        source: ResolveError,
    },
    #[error("failure building normalization rules: {source}")]
    RuleTableError {
        #[from]
        source: RuleTableError,
    },
    #[error("failure reading or writing feed csv: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure reading feed file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
