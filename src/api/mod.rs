//! HTTP access layer for the arrbo backend.
//!
//! This module consolidates everything that talks to the backend:
//! - `types`: wire DTOs and the normalized records built from them
//! - `normalize`: provider-shape flattening and rescaling
//! - `http`: the GET endpoints for games and the four league datasets
//! - `cache_data`: disk-cached loading of the normalized datasets

pub mod cache_data;
pub mod http;
pub mod normalize;
pub mod types;

pub use cache_data::{load_or_fetch_datasets, load_or_fetch_datasets_at};
pub use http::{
    fetch_league_datasets, get_averages, get_defense, get_game, get_games, get_positions, get_usage,
};
pub use normalize::{
    normalize_averages, normalize_defense, normalize_positions, normalize_usage, scale_usage_pct,
};
pub use types::{
    AverageDto, AverageRecord, DefenseDto, DefenseRecord, Game, LeagueDatasets, PositionDto,
    PositionRecord, UsagePlayerDto, UsageRecord, UsageTeamDto, UsageWireRow,
};
