//! Dashboard state for one selected matchup.
//!
//! The store owns an immutable snapshot of the four league datasets and the
//! projection output for whichever game is currently selected. Selecting a
//! game recomputes rows and leaders from the snapshot; a failed selection
//! clears them and records a single user-facing error message. Dataset
//! snapshots are versioned so callers can tell when a refresh actually
//! replaced the data underneath them.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::api::{get_game, get_games, load_or_fetch_datasets_at, Game, LeagueDatasets};
use crate::cli::types::{GameDate, ProjectedStat};
use crate::core::datasets_cache_path;
use crate::engine::{
    build_leaders, norm_team, project_matchup, rank_by_stat, EnrichedPlayer, MatchupLeaders,
};
use crate::error::Result;


/// One immutable generation of the normalized league datasets.
///
/// The `version` increases every time a fetch replaces the data, so two
/// snapshots with the same version hold the same `Arc`.
#[derive(Debug, Clone)]
pub struct DatasetSnapshot {
    pub version: u64,
    pub data: Arc<LeagueDatasets>,
}

#[derive(Debug, Default)]
struct MatchupState {
    snapshot: Option<DatasetSnapshot>,
    latest_version: u64,
    generation: u64,
    selected_game: Option<Game>,
    players: Vec<EnrichedPlayer>,
    leaders: Option<MatchupLeaders>,
    loading: bool,
    error: Option<String>,
}

/// State holder behind the matchup view.
pub struct MatchupStore {
    base_url: String,
    cache_path: PathBuf,
    state: Arc<Mutex<MatchupState>>,
}

impl MatchupStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_cache_path(base_url, datasets_cache_path())
    }

    /// Create a store that caches datasets at an explicit path.
    pub fn with_cache_path(base_url: impl Into<String>, cache_path: PathBuf) -> Self {
        Self {
            base_url: base_url.into(),
            cache_path,
            state: Arc::new(Mutex::new(MatchupState::default())),
        }
    }

    /// The current snapshot, loading or fetching it on first use.
    ///
    /// With `refresh` set, the backend is always refetched and the snapshot
    /// version bumped. The lock is never held across the fetch.
    async fn ensure_snapshot(&self, refresh: bool) -> Result<DatasetSnapshot> {
        if !refresh {
            if let Some(snapshot) = self.state.lock().unwrap().snapshot.clone() {
                return Ok(snapshot);
            }
        }

        let datasets = load_or_fetch_datasets_at(&self.cache_path, &self.base_url, refresh).await?;

        let mut state = self.state.lock().unwrap();
        state.latest_version += 1;
        let snapshot = DatasetSnapshot {
            version: state.latest_version,
            data: Arc::new(datasets),
        };
        state.snapshot = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Refetch the four datasets and install them as a new snapshot.
    ///
    /// Returns the new snapshot version. The selected game and its rows are
    /// left alone; re-select to project against the fresh data.
    pub async fn refresh_datasets(&self) -> Result<u64> {
        let snapshot = self.ensure_snapshot(true).await?;
        Ok(snapshot.version)
    }

    /// Select a game and project both rosters against the current snapshot.
    ///
    /// Overlapping selections are generation-guarded: only the most recent
    /// call may install rows, so a slow older selection can never overwrite
    /// a newer one.
    pub async fn select_game(&self, game: Game) -> Result<()> {
        let generation = {
            let mut state = self.state.lock().unwrap();
            state.generation += 1;
            state.loading = true;
            state.error = None;
            state.selected_game = Some(game.clone());
            state.generation
        };

        match self.ensure_snapshot(false).await {
            Ok(snapshot) => {
                let players = project_matchup(&game, &snapshot.data);
                let leaders = build_leaders(&players);

                let mut state = self.state.lock().unwrap();
                if state.generation == generation {
                    state.players = players;
                    state.leaders = leaders;
                    state.loading = false;
                }
                Ok(())
            }
            Err(err) => {
                let mut state = self.state.lock().unwrap();
                if state.generation == generation {
                    state.players.clear();
                    state.leaders = None;
                    state.error = Some(err.to_string());
                    state.loading = false;
                }
                Err(err)
            }
        }
    }

    /// Look up a scheduled game by id and select it.
    pub async fn select_game_by_id(&self, game_id: &str) -> Result<()> {
        match get_game(&self.base_url, game_id).await {
            Ok(game) => self.select_game(game).await,
            Err(err) => {
                let mut state = self.state.lock().unwrap();
                state.generation += 1;
                state.players.clear();
                state.leaders = None;
                state.error = Some(err.to_string());
                state.loading = false;
                Err(err)
            }
        }
    }

    /// Select an ad-hoc matchup that may not be on the schedule.
    ///
    /// Builds a synthetic game from the two sides, so projections work for
    /// hypothetical pairings.
    pub async fn load_matchup(&self, home_abbr: &str, away_abbr: &str, date: GameDate) -> Result<()> {
        self.select_game(Game::synthetic(home_abbr, away_abbr, date)).await
    }

    /// Project every game on a date and rank the pooled players by one stat.
    ///
    /// Does not touch the current selection.
    pub async fn league_leaders(
        &self,
        date: GameDate,
        stat: ProjectedStat,
        limit: usize,
        refresh: bool,
    ) -> Result<Vec<EnrichedPlayer>> {
        let snapshot = self.ensure_snapshot(refresh).await?;
        let games = get_games(&self.base_url, date).await?;

        let mut pool = Vec::new();
        for game in &games {
            pool.extend(project_matchup(game, &snapshot.data));
        }

        let mut ranked = rank_by_stat(pool, stat);
        ranked.truncate(limit);
        Ok(ranked)
    }

    pub fn selected_game(&self) -> Option<Game> {
        self.state.lock().unwrap().selected_game.clone()
    }

    pub fn players(&self) -> Vec<EnrichedPlayer> {
        self.state.lock().unwrap().players.clone()
    }

    pub fn leaders(&self) -> Option<MatchupLeaders> {
        self.state.lock().unwrap().leaders.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.lock().unwrap().error.clone()
    }

    /// Version of the installed snapshot, if any dataset load has completed.
    pub fn snapshot_version(&self) -> Option<u64> {
        self.state
            .lock()
            .unwrap()
            .snapshot
            .as_ref()
            .map(|snapshot| snapshot.version)
    }

    /// Projected rows for the home side of the selected game.
    pub fn home_rows(&self) -> Vec<EnrichedPlayer> {
        self.side_rows(|game| norm_team(game.home_abbr()))
    }

    /// Projected rows for the away side of the selected game.
    pub fn away_rows(&self) -> Vec<EnrichedPlayer> {
        self.side_rows(|game| norm_team(game.away_abbr()))
    }

    fn side_rows(&self, side: impl Fn(&Game) -> String) -> Vec<EnrichedPlayer> {
        let state = self.state.lock().unwrap();
        let Some(game) = &state.selected_game else {
            return Vec::new();
        };
        let team = side(game);
        state
            .players
            .iter()
            .filter(|player| player.team_abbr == team)
            .cloned()
            .collect()
    }
}
