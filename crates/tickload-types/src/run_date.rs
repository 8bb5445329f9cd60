//! Run date stamped onto warehouse records.

use chrono::{Local, NaiveDate};
use std::str::FromStr;

use crate::RunDateError;

/// The date a load run is attributed to, rendered as `YYYY-MM-DD`.
///
/// A run computes its date once and applies it to every record it fetched,
/// whichever page the record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunDate(NaiveDate);

impl RunDate {
    /// Format used for the `ds` field.
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Returns today's date in the local time zone.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Creates a run date from a calendar date.
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for RunDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for RunDate {
    type Err = RunDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, Self::FORMAT)
            .map(Self)
            .map_err(|_| RunDateError {
                input: s.to_string(),
            })
    }
}
