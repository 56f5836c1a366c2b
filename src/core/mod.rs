//! Core utilities shared across the crate.
//!
//! - `cache`: File system caching helpers for persisted datasets

pub mod cache;

// Re-export commonly used items for convenience
pub use cache::{app_cache_dir, datasets_cache_path, try_read_to_string, write_string};
