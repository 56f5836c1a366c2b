use crate::cli::types::{GameDate, Position};
use serde::{Deserialize, Serialize};


/// A scheduled or completed game from the backend schedule feed.
///
/// Only `gameId` is guaranteed; everything else depends on how far along
/// the game is and on which feed produced the row.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Game {
    #[serde(rename = "gameId")]
    pub game_id: String,
    #[serde(rename = "gameDate", default)]
    pub game_date: Option<GameDate>,
    #[serde(rename = "startTimeUtc", default)]
    pub start_time_utc: Option<String>,
    #[serde(rename = "statusText", default)]
    pub status_text: Option<String>,
    #[serde(rename = "homeTeamId", default)]
    pub home_team_id: Option<u32>,
    #[serde(rename = "homeTeamAbbr", default)]
    pub home_team_abbr: Option<String>,
    #[serde(rename = "homeTeamScore", default)]
    pub home_team_score: Option<i32>,
    #[serde(rename = "awayTeamId", default)]
    pub away_team_id: Option<u32>,
    #[serde(rename = "awayTeamAbbr", default)]
    pub away_team_abbr: Option<String>,
    #[serde(rename = "awayTeamScore", default)]
    pub away_team_score: Option<i32>,
}

impl Game {
    /// Build a minimal game for a direct team-vs-team matchup that did not
    /// come from the schedule feed. The id follows the `AWAY@HOME:DATE`
    /// convention the backend uses.
    pub fn synthetic(home_abbr: &str, away_abbr: &str, date: GameDate) -> Self {
        Game {
            game_id: format!("{}@{}:{}", away_abbr, home_abbr, date),
            game_date: Some(date),
            start_time_utc: None,
            status_text: None,
            home_team_id: None,
            home_team_abbr: Some(home_abbr.to_string()),
            home_team_score: None,
            away_team_id: None,
            away_team_abbr: Some(away_abbr.to_string()),
            away_team_score: None,
        }
    }

    pub fn home_abbr(&self) -> &str {
        self.home_team_abbr.as_deref().unwrap_or("")
    }

    pub fn away_abbr(&self) -> &str {
        self.away_team_abbr.as_deref().unwrap_or("")
    }
}

/// Per-player usage row: one row per player with a resolved usage share.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsagePlayerDto {
    #[serde(rename = "teamId", default)]
    pub team_id: Option<u32>,
    #[serde(rename = "teamAbbr", default)]
    pub team_abbr: Option<String>,
    #[serde(rename = "playerId", default)]
    pub player_id: Option<i64>,
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(rename = "usagePct")]
    pub usage_pct: f64,
    #[serde(default)]
    pub rank: Option<u32>,
}

/// Team-aggregated usage row: one row per team, with up to five named
/// player slots in rank order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UsageTeamDto {
    #[serde(rename = "teamId", default)]
    pub team_id: Option<u32>,
    #[serde(rename = "player1Name", default)]
    pub player1_name: Option<String>,
    #[serde(rename = "player1Usage", default)]
    pub player1_usage: Option<f64>,
    #[serde(rename = "player2Name", default)]
    pub player2_name: Option<String>,
    #[serde(rename = "player2Usage", default)]
    pub player2_usage: Option<f64>,
    #[serde(rename = "player3Name", default)]
    pub player3_name: Option<String>,
    #[serde(rename = "player3Usage", default)]
    pub player3_usage: Option<f64>,
    #[serde(rename = "player4Name", default)]
    pub player4_name: Option<String>,
    #[serde(rename = "player4Usage", default)]
    pub player4_usage: Option<f64>,
    #[serde(rename = "player5Name", default)]
    pub player5_name: Option<String>,
    #[serde(rename = "player5Usage", default)]
    pub player5_usage: Option<f64>,
}

impl UsageTeamDto {
    /// Slot pairs in rank order, for flattening.
    pub fn slots(&self) -> [(Option<&str>, Option<f64>); 5] {
        [
            (self.player1_name.as_deref(), self.player1_usage),
            (self.player2_name.as_deref(), self.player2_usage),
            (self.player3_name.as_deref(), self.player3_usage),
            (self.player4_name.as_deref(), self.player4_usage),
            (self.player5_name.as_deref(), self.player5_usage),
        ]
    }
}

/// The usage feed ships either per-player rows or team-aggregated rows
/// depending on the deployment. Rows are told apart structurally while
/// deserializing: a per-player row always carries `playerName` and
/// `usagePct`, so anything without both falls through to the team shape.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum UsageWireRow {
    Player(UsagePlayerDto),
    Team(UsageTeamDto),
}

/// Season-average row from `/api/averages`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AverageDto {
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(rename = "playerPts", default)]
    pub player_pts: Option<f64>,
    #[serde(rename = "playerReb", default)]
    pub player_reb: Option<f64>,
    #[serde(rename = "playerAst", default)]
    pub player_ast: Option<f64>,
    #[serde(rename = "playerPra", default)]
    pub player_pra: Option<f64>,
}

/// Listed-position row from `/api/positions`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PositionDto {
    #[serde(rename = "playerName")]
    pub player_name: String,
    #[serde(rename = "playerPosition", default)]
    pub player_position: Option<String>,
}

/// Defensive-efficiency row from `/api/defense/efficiency`: one row per
/// team, one column per defended position. Cells may be null early in a
/// season.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefenseDto {
    #[serde(rename = "teamId", default)]
    pub team_id: Option<u32>,
    #[serde(rename = "pgEfficiency", default)]
    pub pg_efficiency: Option<f64>,
    #[serde(rename = "sgEfficiency", default)]
    pub sg_efficiency: Option<f64>,
    #[serde(rename = "sfEfficiency", default)]
    pub sf_efficiency: Option<f64>,
    #[serde(rename = "pfEfficiency", default)]
    pub pf_efficiency: Option<f64>,
    #[serde(rename = "cEfficiency", default)]
    pub c_efficiency: Option<f64>,
}

/// Flattened usage record after team resolution and percentage rescaling.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UsageRecord {
    pub team_abbr: String,
    pub player_name: String,
    /// 0-100 scale, one decimal of precision.
    pub usage_pct: f64,
}

/// Normalized season averages; missing cells default to zero.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AverageRecord {
    pub player_name: String,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub pra: f64,
}

/// Normalized listed position for a player.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PositionRecord {
    pub player_name: String,
    pub position: Position,
}

/// Normalized defensive efficiency for one team/position slot.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DefenseRecord {
    pub team_abbr: String,
    pub position: Position,
    /// Lower is better; same scale as the source averages.
    pub def_eff: f64,
}

/// All four normalized league datasets from one fetch round.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueDatasets {
    pub usage: Vec<UsageRecord>,
    pub averages: Vec<AverageRecord>,
    pub positions: Vec<PositionRecord>,
    pub defense: Vec<DefenseRecord>,
}

impl LeagueDatasets {
    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
            && self.averages.is_empty()
            && self.positions.is_empty()
            && self.defense.is_empty()
    }
}
