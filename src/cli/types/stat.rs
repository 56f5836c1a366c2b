//! Projected stat selector for leader rankings.

use crate::error::ArrboError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four projected stats a matchup produces.
///
/// `Pra` is the combined points + rebounds + assists figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectedStat {
    Pts,
    Reb,
    Ast,
    Pra,
}

impl ProjectedStat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectedStat::Pts => "pts",
            ProjectedStat::Reb => "reb",
            ProjectedStat::Ast => "ast",
            ProjectedStat::Pra => "pra",
        }
    }
}

impl fmt::Display for ProjectedStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectedStat {
    type Err = ArrboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pts" | "points" => Ok(ProjectedStat::Pts),
            "reb" | "rebounds" => Ok(ProjectedStat::Reb),
            "ast" | "assists" => Ok(ProjectedStat::Ast),
            "pra" => Ok(ProjectedStat::Pra),
            _ => Err(ArrboError::InvalidStat {
                stat: s.to_string(),
            }),
        }
    }
}
