//! Basketball position types and canonicalization.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Basketball player positions.
///
/// Player feeds carry free-form position strings ("PG", "G-F", "F-C", ...);
/// defensive-efficiency feeds carry one value per fixed slot (PG/SG/SF/PF/C).
/// [`Position::canonicalize`] folds the free-form strings onto the canonical
/// set used for matchup joins; strings it cannot place pass through unchanged
/// as [`Position::Other`].
///
/// # Examples
///
/// ```rust
/// use arrbo::Position;
///
/// assert_eq!(Position::canonicalize("SG"), Position::SG);
/// assert_eq!(Position::canonicalize("G-F"), Position::PG);
/// assert_eq!(Position::canonicalize("F-C"), Position::C);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
    Other(String),
}

impl Position {
    /// Canonicalize a raw position string from a player feed.
    ///
    /// Rules, in order:
    /// - trimmed empty input falls back to `SF` (kept for output parity with
    ///   the upstream data pipeline, not a basketball claim)
    /// - an exact `PG`/`SG`/`SF`/`C` is kept as-is, any letter case
    /// - combo strings resolve by precedence `C` > `G` > `F` on the uppercased
    ///   input, so "G-C" and "C-F" are centers and "G-F" is a guard; a plain
    ///   "PF" lands on `SF` through the `F` rule
    /// - anything else passes through unchanged
    ///
    /// `canonicalize` never returns `PF`; that variant only enters the system
    /// through defensive-efficiency rows, which enumerate all five slots.
    pub fn canonicalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Position::SF;
        }

        let upper = trimmed.to_uppercase();
        if matches!(upper.as_str(), "PG" | "SG" | "SF" | "C") {
            return Position::from_code(&upper);
        }
        if upper.contains('C') {
            Position::C
        } else if upper.contains('G') {
            Position::PG
        } else if upper.contains('F') {
            Position::SF
        } else {
            Position::Other(trimmed.to_string())
        }
    }

    /// Map an exact position code to its variant, without canonicalization.
    ///
    /// Used for (de)serialization, where already-canonical values must round
    /// trip untouched ("PF" must stay "PF").
    pub fn from_code(code: &str) -> Self {
        match code {
            "PG" => Position::PG,
            "SG" => Position::SG,
            "SF" => Position::SF,
            "PF" => Position::PF,
            "C" => Position::C,
            other => Position::Other(other.to_string()),
        }
    }

    /// The canonical code string for this position.
    pub fn as_str(&self) -> &str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
            Position::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Err(de::Error::custom("empty position code"));
        }
        Ok(Position::from_code(&s))
    }
}
