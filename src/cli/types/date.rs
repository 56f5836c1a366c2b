//! Schedule date type for slate and matchup lookups.

use crate::error::{ArrboError, Result};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for schedule dates (`YYYY-MM-DD`).
///
/// Wire payloads, cache keys, and CLI flags all use the ISO calendar-date
/// form; anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameDate(pub NaiveDate);

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl Default for GameDate {
    fn default() -> Self {
        Self::today()
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for GameDate {
    type Err = ArrboError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ArrboError::InvalidDate {
                input: s.to_string(),
            })
    }
}
