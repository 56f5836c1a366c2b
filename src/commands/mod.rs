//! Command implementations for the arrbo CLI

pub mod common;
pub mod games;
pub mod leaders;
pub mod matchup;

pub use common::{resolve_base_url, resolve_team};
pub use games::handle_games;
pub use leaders::{handle_leaders, LeadersParams};
pub use matchup::{handle_matchup, MatchupParams, MatchupTarget};

#[cfg(test)]
mod tests;
