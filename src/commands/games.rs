//! Schedule listing command implementation

use crate::cli::types::GameDate;
use crate::error::Result;
use crate::store::GamesStore;

use super::resolve_base_url;

/// Handle the games command
pub async fn handle_games(
    base_url: Option<String>,
    date: GameDate,
    refresh: bool,
    as_json: bool,
) -> Result<()> {
    let base_url = resolve_base_url(base_url)?;
    let store = GamesStore::new(base_url);
    let games = store.games_for_date(date, refresh).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&games)?);
        return Ok(());
    }

    if games.is_empty() {
        println!("No games scheduled on {date}");
        return Ok(());
    }

    println!("✓ {} game(s) on {date}", games.len());
    for game in &games {
        let status = game.status_text.as_deref().unwrap_or("");
        match (game.away_team_score, game.home_team_score) {
            (Some(away_score), Some(home_score)) => println!(
                "  {}  {} {} @ {} {}  {}",
                game.game_id,
                game.away_abbr(),
                away_score,
                game.home_abbr(),
                home_score,
                status
            ),
            _ => println!(
                "  {}  {} @ {}  {}",
                game.game_id,
                game.away_abbr(),
                game.home_abbr(),
                status
            ),
        }
    }

    Ok(())
}
