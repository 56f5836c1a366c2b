//! NBA matchup projection CLI library
//!
//! Pulls the nightly usage, averages, positions, and defensive efficiency
//! datasets from the arrbo backend, normalizes them into flat records, and
//! projects per-player scoring lines for any matchup.
//!
//! ## Features
//!
//! - **Schedule Lookup**: List the games on any date through an LRU-cached store
//! - **Matchup Projections**: Usage-boosted, defense-adjusted scoring lines
//!   with a home/away venue edge
//! - **Leader Cards**: Best and worst projected player per stat for a matchup
//! - **Slate Rankings**: Pool every game on a date and rank by one stat
//! - **Dataset Caching**: Normalized datasets cached on disk between runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arrbo::store::MatchupStore;
//!
//! # async fn example() -> arrbo::Result<()> {
//! let store = MatchupStore::new("http://localhost:8080");
//! store.load_matchup("BOS", "LAL", "2026-01-26".parse()?).await?;
//!
//! for player in store.players() {
//!     println!("{} -> {:.1} pts", player.player_name, player.proj_pts);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the backend base URL to avoid passing it in every command:
//! ```bash
//! export ARRBO_BASE_URL=http://localhost:8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod engine;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use api::{AverageRecord, DefenseRecord, Game, LeagueDatasets, PositionRecord, UsageRecord};
pub use cli::types::{GameDate, Position, ProjectedStat, TeamId};
pub use engine::{EnrichedPlayer, MatchupLeaders};
pub use error::{ArrboError, Result};

pub const BASE_URL_ENV_VAR: &str = "ARRBO_BASE_URL";
