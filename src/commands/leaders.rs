//! League leaders command implementation

use crate::cli::types::{GameDate, ProjectedStat};
use crate::error::Result;
use crate::store::MatchupStore;

use super::resolve_base_url;

/// Parameters for the leaders command
#[derive(Debug)]
pub struct LeadersParams {
    pub date: GameDate,
    pub stat: ProjectedStat,
    pub limit: usize,
    pub base_url: Option<String>,
    pub refresh: bool,
    pub as_json: bool,
}

/// Handle the leaders command
pub async fn handle_leaders(params: LeadersParams) -> Result<()> {
    let base_url = resolve_base_url(params.base_url)?;
    let store = MatchupStore::new(base_url);
    let leaders = store
        .league_leaders(params.date, params.stat, params.limit, params.refresh)
        .await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&leaders)?);
        return Ok(());
    }

    if leaders.is_empty() {
        println!("No games scheduled on {}", params.date);
        return Ok(());
    }

    println!(
        "✓ Top {} by projected {} on {}",
        leaders.len(),
        params.stat,
        params.date
    );
    for (rank, player) in leaders.iter().enumerate() {
        println!(
            "  {:>2}. {:<26} {:>3} vs {:<3} {:>6.1}",
            rank + 1,
            player.player_name,
            player.team_abbr,
            player.opponent_abbr,
            player.projected(params.stat),
        );
    }

    Ok(())
}
