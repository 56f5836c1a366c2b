//! File cache helpers for persisted league datasets.
//!
//! Normalized datasets are written to the platform cache directory so the
//! matchup commands can run offline once a snapshot exists. Game schedules
//! are never written here; they stay in the in-memory store only.

use dirs;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

/// Base directory for all persisted app data: `~/.cache/arrbo` (or the
/// platform equivalent), with a home-relative fallback when no cache dir
/// is available.
pub fn app_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("arrbo")
}

/// Path: ~/.cache/arrbo/league-datasets.json
pub fn datasets_cache_path() -> PathBuf {
    app_cache_dir().join("league-datasets.json")
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
