//! Configuration management for the playlist builder.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::types::Pacing;

const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_MARKET: &str = "US";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up under `playlistcli/.env`:
/// - Linux: `~/.local/share/playlistcli/.env`
/// - macOS: `~/Library/Application Support/playlistcli/.env`
/// - Windows: `%LOCALAPPDATA%/playlistcli/.env`
///
/// A missing file is not an error since every value may also be provided
/// through the process environment.
///
/// # Errors
///
/// Returns an error string if the parent directory cannot be created or the
/// `.env` file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Location of the application's data directory.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlistcli");
    path
}

fn env_path() -> PathBuf {
    data_dir().join(".env")
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the access token handed in through `SPOTIFY_ACCESS_TOKEN`.
pub fn spotify_access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
}

/// Market used for the artist top-tracks endpoint (`SPOTIFY_MARKET`, default `US`).
pub fn spotify_market() -> String {
    env::var("SPOTIFY_MARKET").unwrap_or_else(|_| DEFAULT_MARKET.to_string())
}

/// Returns the pacing delays, each overridable in milliseconds.
///
/// - `PLAYLISTCLI_PAGE_DELAY_MS` - between page fetches (default 500)
/// - `PLAYLISTCLI_BATCH_DELAY_MS` - between playlist insert batches (default 2000)
/// - `PLAYLISTCLI_ITEM_DELAY_MS` - between items of a list (default 3000)
///
/// Unparseable values fall back to the default.
pub fn pacing() -> Pacing {
    let defaults = Pacing::default();
    Pacing {
        page: millis_from_env("PLAYLISTCLI_PAGE_DELAY_MS").unwrap_or(defaults.page),
        batch: millis_from_env("PLAYLISTCLI_BATCH_DELAY_MS").unwrap_or(defaults.batch),
        item: millis_from_env("PLAYLISTCLI_ITEM_DELAY_MS").unwrap_or(defaults.item),
    }
}

fn millis_from_env(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}
