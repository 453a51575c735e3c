use std::fmt::Display;

/// the stop attributes used to resolve a stop identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopRecord {
    /// rider-facing stop code, distinct from the feed's internal stop_id
    pub code: Option<String>,
}

impl StopRecord {
    pub fn new(code: Option<&str>) -> StopRecord {
        StopRecord {
            code: code.map(String::from),
        }
    }
}

impl Display for StopRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "StopRecord{{code: '{code}'}}"),
            None => write!(f, "StopRecord{{code: None}}"),
        }
    }
}
