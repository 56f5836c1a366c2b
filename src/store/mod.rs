//! Stateful front ends over the access layer and the projection engine.
//!
//! `GamesStore` memoizes schedule lookups per date. `MatchupStore` owns the
//! dashboard state: the current dataset snapshot, the selected game, and the
//! projected rows and leaders derived from them.

pub mod games;
pub mod matchup;

pub use games::GamesStore;
pub use matchup::{DatasetSnapshot, MatchupStore};
