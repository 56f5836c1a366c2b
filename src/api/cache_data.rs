// src/api/cache_data.rs
use std::path::Path;

use crate::core::{datasets_cache_path, try_read_to_string, write_string};
use crate::Result;

use super::http::fetch_league_datasets;
use super::types::LeagueDatasets;

/// Try to load the normalized league datasets from .cache first. If the file
/// is missing, unreadable, or `refresh == true`, fetch all four endpoints and
/// re-write the cache.
pub async fn load_or_fetch_datasets(base_url: &str, refresh: bool) -> Result<LeagueDatasets> {
    load_or_fetch_datasets_at(&datasets_cache_path(), base_url, refresh).await
}

/// Same as [`load_or_fetch_datasets`] with an explicit cache path.
pub async fn load_or_fetch_datasets_at(
    path: &Path,
    base_url: &str,
    refresh: bool,
) -> Result<LeagueDatasets> {
    // 1) Try cache (unless refresh)
    if !refresh {
        // tarpaulin::skip - file I/O operation
        if let Some(s) = try_read_to_string(path) {
            // tarpaulin::skip - JSON parsing of cached data
            if let Ok(datasets) = serde_json::from_str::<LeagueDatasets>(&s) {
                return Ok(datasets);
            }
        }
    }

    // 2) Fetch from the backend
    // tarpaulin::skip - HTTP API call
    let datasets = fetch_league_datasets(base_url).await?;

    // 3) Write cache so future runs can work offline
    if let Ok(json_str) = serde_json::to_string_pretty(&datasets) {
        let _ = write_string(path, &json_str); // tarpaulin::skip - file I/O operation
    }

    Ok(datasets)
}
