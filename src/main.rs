//! Entry point: parse CLI and dispatch to command handlers.

use arrbo::{
    cli::{Arrbo, Commands},
    commands::{
        handle_games, handle_leaders, handle_matchup, LeadersParams, MatchupParams, MatchupTarget,
    },
    Result,
};
use clap::Parser;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Arrbo::parse();

    match app.command {
        Commands::Games { date, common } => {
            handle_games(common.base_url, date, common.refresh, common.json).await?
        }

        Commands::Matchup {
            game_id,
            home,
            away,
            date,
            common,
        } => {
            let target = match (game_id, home, away) {
                (Some(game_id), None, None) => MatchupTarget::ById(game_id),
                (None, Some(home), Some(away)) => MatchupTarget::ByTeams {
                    home,
                    away,
                    date: date.unwrap_or_default(),
                },
                (Some(_), _, _) => {
                    eprintln!("Error: Cannot combine --game-id with --home/--away");
                    std::process::exit(1);
                }
                _ => {
                    eprintln!("Error: Specify either --game-id or both --home and --away");
                    std::process::exit(1);
                }
            };
            handle_matchup(MatchupParams {
                target,
                base_url: common.base_url,
                refresh: common.refresh,
                as_json: common.json,
            })
            .await?
        }

        Commands::Leaders {
            date,
            stat,
            limit,
            common,
        } => {
            handle_leaders(LeadersParams {
                date,
                stat,
                limit,
                base_url: common.base_url,
                refresh: common.refresh,
                as_json: common.json,
            })
            .await?
        }
    }

    Ok(())
}
