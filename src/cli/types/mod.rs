//! Type-safe wrappers and enums for schedule and matchup data.

pub mod date;
pub mod position;
pub mod stat;
pub mod team;

pub use date::GameDate;
pub use position::Position;
pub use stat::ProjectedStat;
pub use team::TeamId;
