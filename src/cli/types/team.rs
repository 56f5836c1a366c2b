//! Team identity types for league dataset joins.

use crate::error::{ArrboError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric team id to abbreviation table, as assigned by the ingestion jobs.
///
/// The abbreviations are the exact strings the backend stores, including the
/// non-standard `BRO` (Brooklyn) and `OKL` (Oklahoma City). Every dataset key
/// join downstream depends on these strings, so they must never be "fixed".
const TEAM_TABLE: [(u32, &str); 30] = [
    (1, "ATL"),
    (2, "BOS"),
    (3, "BRO"),
    (4, "CHA"),
    (5, "CHI"),
    (6, "CLE"),
    (7, "DAL"),
    (8, "DEN"),
    (9, "DET"),
    (10, "GSW"),
    (11, "HOU"),
    (12, "IND"),
    (13, "LAC"),
    (14, "LAL"),
    (15, "MEM"),
    (16, "MIA"),
    (17, "MIL"),
    (18, "MIN"),
    (19, "NOP"),
    (20, "NYK"),
    (21, "OKL"),
    (22, "ORL"),
    (23, "PHI"),
    (24, "PHX"),
    (25, "POR"),
    (26, "SAC"),
    (27, "SAS"),
    (28, "TOR"),
    (29, "UTA"),
    (30, "WAS"),
];

/// Type-safe wrapper for numeric team ids.
///
/// Feed rows reference teams by numeric id; the projection pipeline works in
/// abbreviations. Rows whose id does not resolve through the fixed table are
/// dropped at normalization, so an unresolvable `TeamId` never leaks an empty
/// abbreviation downstream.
///
/// # Examples
///
/// ```rust
/// use arrbo::TeamId;
///
/// let boston = TeamId::new(2);
/// assert_eq!(boston.abbr(), Some("BOS"));
/// assert_eq!(TeamId::from_abbr("bos"), Some(boston));
/// assert_eq!(TeamId::new(99).abbr(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Resolve this id to its canonical abbreviation, if the id is known.
    pub fn abbr(&self) -> Option<&'static str> {
        TEAM_TABLE
            .iter()
            .find(|(id, _)| *id == self.0)
            .map(|(_, abbr)| *abbr)
    }

    /// Reverse lookup from an abbreviation (trimmed, case-insensitive).
    pub fn from_abbr(abbr: &str) -> Option<Self> {
        let want = abbr.trim().to_uppercase();
        TEAM_TABLE
            .iter()
            .find(|(_, a)| *a == want)
            .map(|(id, _)| Self(*id))
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = ArrboError;

    /// Parse either a numeric id ("14") or an abbreviation ("LAL").
    fn from_str(s: &str) -> Result<Self> {
        if let Ok(id) = s.trim().parse::<u32>() {
            return Ok(Self(id));
        }
        Self::from_abbr(s).ok_or_else(|| ArrboError::UnknownTeam {
            abbr: s.trim().to_string(),
        })
    }
}
