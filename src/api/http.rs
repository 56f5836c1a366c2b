use reqwest::{Client, StatusCode};

use crate::cli::types::GameDate;
use crate::error::{ArrboError, Result};

use super::normalize::{
    normalize_averages, normalize_defense, normalize_positions, normalize_usage,
};
use super::types::{
    AverageDto, AverageRecord, DefenseDto, DefenseRecord, Game, LeagueDatasets, PositionDto,
    PositionRecord, UsageRecord, UsageWireRow,
};


/// Fetch the schedule for one date, ordered by tip-off time.
pub async fn get_games(base_url: &str, date: GameDate) -> Result<Vec<Game>> {
    let url = format!("{base_url}/api/games");
    let params = [("date", date.to_string())];

    let games = Client::new()
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<Game>>()
        .await?;

    Ok(games)
}

/// Fetch a single game by id. A 404 from the backend maps to
/// [`ArrboError::GameNotFound`] so callers can tell a bad id apart from a
/// transport failure.
pub async fn get_game(base_url: &str, game_id: &str) -> Result<Game> {
    let url = format!("{base_url}/api/games/{game_id}");

    let response = Client::new().get(&url).send().await?;
    if response.status() == StatusCode::NOT_FOUND {
        return Err(ArrboError::GameNotFound {
            game_id: game_id.to_string(),
        });
    }

    let game = response.error_for_status()?.json::<Game>().await?;

    Ok(game)
}

/// Fetch the usage feed and flatten it into per-player records.
pub async fn get_usage(base_url: &str) -> Result<Vec<UsageRecord>> {
    let url = format!("{base_url}/api/usage/top");

    let rows = Client::new()
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<UsageWireRow>>()
        .await?;

    Ok(normalize_usage(rows))
}

/// Fetch season averages for all tracked players.
pub async fn get_averages(base_url: &str) -> Result<Vec<AverageRecord>> {
    let url = format!("{base_url}/api/averages");

    let rows = Client::new()
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<AverageDto>>()
        .await?;

    Ok(normalize_averages(rows))
}

/// Fetch listed positions for all tracked players.
pub async fn get_positions(base_url: &str) -> Result<Vec<PositionRecord>> {
    let url = format!("{base_url}/api/positions");

    let rows = Client::new()
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<PositionDto>>()
        .await?;

    Ok(normalize_positions(rows))
}

/// Fetch per-team defensive efficiency split by defended position.
pub async fn get_defense(base_url: &str) -> Result<Vec<DefenseRecord>> {
    let url = format!("{base_url}/api/defense/efficiency");

    let rows = Client::new()
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<DefenseDto>>()
        .await?;

    Ok(normalize_defense(rows))
}

/// Fetch all four league datasets concurrently. Fails fast: the first
/// endpoint to error aborts the whole round.
pub async fn fetch_league_datasets(base_url: &str) -> Result<LeagueDatasets> {
    let (usage, averages, positions, defense) = tokio::try_join!(
        get_usage(base_url),
        get_averages(base_url),
        get_positions(base_url),
        get_defense(base_url),
    )?;

    Ok(LeagueDatasets {
        usage,
        averages,
        positions,
        defense,
    })
}
