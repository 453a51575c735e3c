#[derive(thiserror::Error, Debug)]
pub enum RuleTableError {
    #[error("failed to compile normalization pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
