//! Error types for the arrbo matchup projection CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, ArrboError>;

#[derive(Error, Debug)]
pub enum ArrboError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Base URL not provided and {env_var} environment variable not set")]
    MissingBaseUrl { env_var: String },

    #[error("Invalid date '{input}' (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Unknown team: {abbr}")]
    UnknownTeam { abbr: String },

    #[error("Invalid stat '{stat}' (expected pts, reb, ast, or pra)")]
    InvalidStat { stat: String },

    #[error("Game not found: {game_id}")]
    GameNotFound { game_id: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ArrboError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ArrboError::Cache {
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for ArrboError {
    fn from(err: anyhow::Error) -> Self {
        ArrboError::Cache {
            message: err.to_string(),
        }
    }
}
