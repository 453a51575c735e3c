use std::fmt::Display;

/// the time-of-day variant a route short name may encode, such as the "AM"
/// in "7AM". each variant owns a fixed route ID offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Am,
    Pm,
}

impl TimeOfDay {
    pub const AM_ROUTE_ID_OFFSET: u64 = 10_000;
    pub const PM_ROUTE_ID_OFFSET: u64 = 20_000;

    pub fn route_id_offset(&self) -> u64 {
        match self {
            TimeOfDay::Am => Self::AM_ROUTE_ID_OFFSET,
            TimeOfDay::Pm => Self::PM_ROUTE_ID_OFFSET,
        }
    }

    /// reads the variant from the suffix of an already lower-cased short name.
    pub fn from_short_name_suffix(short_name_lc: &str) -> Option<TimeOfDay> {
        if short_name_lc.ends_with("am") {
            Some(TimeOfDay::Am)
        } else if short_name_lc.ends_with("pm") {
            Some(TimeOfDay::Pm)
        } else {
            None
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOfDay::Am => write!(f, "AM"),
            TimeOfDay::Pm => write!(f, "PM"),
        }
    }
}
