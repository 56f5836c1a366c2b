//! Shared helpers for command handlers.

use crate::cli::types::TeamId;
use crate::engine::EnrichedPlayer;
use crate::error::{ArrboError, Result};
use crate::BASE_URL_ENV_VAR;

/// Resolve the backend base URL from the flag or the environment.
///
/// Trailing slashes are stripped so endpoint paths can be appended directly.
pub fn resolve_base_url(base_url: Option<String>) -> Result<String> {
    base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .map(|url| url.trim_end_matches('/').to_string())
        .ok_or_else(|| ArrboError::MissingBaseUrl {
            env_var: BASE_URL_ENV_VAR.to_string(),
        })
}

/// Validate a user-supplied team abbreviation against the team table.
///
/// Returns the canonical spelling, so `bos` comes back as `BOS`.
pub fn resolve_team(abbr: &str) -> Result<&'static str> {
    TeamId::from_abbr(abbr)
        .and_then(|team| team.abbr())
        .ok_or_else(|| ArrboError::UnknownTeam {
            abbr: abbr.trim().to_string(),
        })
}

/// Print projected rows as an aligned table.
pub fn print_player_table(players: &[EnrichedPlayer]) {
    if players.is_empty() {
        println!("  (no usage rows)");
        return;
    }

    println!(
        "  {:<26} {:>4} {:>6} {:>7} {:>7} {:>7} {:>7}",
        "PLAYER", "POS", "USG%", "PTS", "REB", "AST", "PRA"
    );
    for player in players {
        let position = player
            .position
            .as_ref()
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<26} {:>4} {:>6.1} {:>7.1} {:>7.1} {:>7.1} {:>7.1}",
            player.player_name,
            position,
            player.usage_pct,
            player.proj_pts,
            player.proj_reb,
            player.proj_ast,
            player.proj_pra,
        );
    }
}
