use clap::ValueEnum;
use std::fmt::Display;

/// the kinds of free-text label the normalizer cleans, each with its own
/// ordered sequence of steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum LabelKind {
    DirectionHeadsign,
    TripHeadsign,
    StopName,
}

impl Display for LabelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelKind::DirectionHeadsign => write!(f, "direction headsign"),
            LabelKind::TripHeadsign => write!(f, "trip headsign"),
            LabelKind::StopName => write!(f, "stop name"),
        }
    }
}
