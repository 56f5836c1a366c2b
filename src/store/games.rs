//! Schedule lookups with a small in-memory LRU cache.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

use crate::api::{get_games, Game};
use crate::cli::types::GameDate;
use crate::error::Result;


/// How many dates worth of schedules stay in memory.
const GAMES_CACHE_CAPACITY: usize = 32;

/// Per-date schedule cache backed by `GET /api/games`.
pub struct GamesStore {
    base_url: String,
    cache: Mutex<LruCache<GameDate, Vec<Game>>>,
}

impl GamesStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_capacity(base_url, GAMES_CACHE_CAPACITY)
    }

    /// Create a store with an explicit cache capacity.
    pub fn with_capacity(base_url: impl Into<String>, capacity: usize) -> Self {
        Self {
            base_url: base_url.into(),
            cache: Mutex::new(LruCache::new(NonZeroUsize::new(capacity).unwrap())),
        }
    }

    /// The schedule for a date, served from cache unless `refresh` forces a
    /// refetch.
    pub async fn games_for_date(&self, date: GameDate, refresh: bool) -> Result<Vec<Game>> {
        if !refresh {
            if let Some(games) = self.cache.lock().unwrap().get(&date) {
                return Ok(games.clone());
            }
        }

        let games = get_games(&self.base_url, date).await?;
        self.cache.lock().unwrap().put(date, games.clone());
        Ok(games)
    }
}
