//! Matchup projection command implementation

use crate::cli::types::GameDate;
use crate::error::Result;
use crate::store::MatchupStore;

use super::common::print_player_table;
use super::{resolve_base_url, resolve_team};

/// How the matchup to project is identified.
#[derive(Debug)]
pub enum MatchupTarget {
    /// A scheduled game, looked up by its backend id.
    ById(String),
    /// An ad-hoc pairing of two teams on a date.
    ByTeams {
        home: String,
        away: String,
        date: GameDate,
    },
}

/// Parameters for the matchup command
#[derive(Debug)]
pub struct MatchupParams {
    pub target: MatchupTarget,
    pub base_url: Option<String>,
    pub refresh: bool,
    pub as_json: bool,
}

/// Handle the matchup command
pub async fn handle_matchup(params: MatchupParams) -> Result<()> {
    let base_url = resolve_base_url(params.base_url)?;
    let store = MatchupStore::new(base_url);

    if params.refresh {
        store.refresh_datasets().await?;
    }

    match &params.target {
        MatchupTarget::ById(game_id) => store.select_game_by_id(game_id).await?,
        MatchupTarget::ByTeams { home, away, date } => {
            let home = resolve_team(home)?;
            let away = resolve_team(away)?;
            store.load_matchup(home, away, *date).await?;
        }
    }

    if params.as_json {
        let view = serde_json::json!({
            "game": store.selected_game(),
            "players": store.players(),
            "leaders": store.leaders(),
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let Some(game) = store.selected_game() else {
        return Ok(());
    };

    let date = game
        .game_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "TBD".to_string());
    println!("✓ {} @ {} on {}", game.away_abbr(), game.home_abbr(), date);

    println!("\n{} (home)", game.home_abbr());
    print_player_table(&store.home_rows());
    println!("\n{} (away)", game.away_abbr());
    print_player_table(&store.away_rows());

    if let Some(leaders) = store.leaders() {
        println!("\nLeaders");
        println!(
            "  pts: {} ({:.1})  reb: {} ({:.1})  ast: {} ({:.1})  pra: {} ({:.1})",
            leaders.top_pts.player_name,
            leaders.top_pts.proj_pts,
            leaders.top_reb.player_name,
            leaders.top_reb.proj_reb,
            leaders.top_ast.player_name,
            leaders.top_ast.proj_ast,
            leaders.top_pra.player_name,
            leaders.top_pra.proj_pra,
        );
    }

    Ok(())
}
