//! Configuration management for Trackscope.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, endpoint URLs and the default
//! dataset location.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{Error, Res};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_DATASET: &str = "songs.csv";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `trackscope/.env` in the platform-specific local data
/// directory:
/// - Linux: `~/.local/share/trackscope/.env`
/// - macOS: `~/Library/Application Support/trackscope/.env`
/// - Windows: `%LOCALAPPDATA%/trackscope/.env`
///
/// A missing file is not an error; values may come from the process
/// environment alone. Variables already set in the environment are never
/// overwritten.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Res<()> {
    load_env_from(&env_path()).await
}

/// Loads environment variables from the `.env` file at `path`, creating its
/// parent directory. A missing file is not an error.
pub async fn load_env_from(path: &Path) -> Res<()> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(path)
        .map(|_| ())
        .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trackscope/.env");
    path
}

fn required(name: &str) -> Res<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Config(format!("{name} must be set"))),
    }
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the Spotify API client ID used for the client-credentials grant.
///
/// Read from `SPOTIFY_CLIENT_ID`.
pub fn spotify_client_id() -> Res<String> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify API client secret used for the client-credentials grant.
///
/// Read from `SPOTIFY_CLIENT_SECRET`. The secret should be kept confidential
/// and never exposed in logs or version control.
pub fn spotify_client_secret() -> Res<String> {
    required("SPOTIFY_CLIENT_SECRET")
}

/// Returns a bearer token obtained out-of-band, if one is configured.
///
/// When `SPOTIFY_ACCESS_TOKEN` is set it takes precedence over the
/// client-credentials grant.
pub fn spotify_access_token() -> Option<String> {
    optional("SPOTIFY_ACCESS_TOKEN")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify OAuth token URL, e.g. `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the market used to scope track searches.
pub fn spotify_market() -> String {
    optional("SPOTIFY_MARKET").unwrap_or_else(|| DEFAULT_MARKET.to_string())
}

/// Returns the dataset used when no file is given on the command line.
pub fn dataset_path() -> PathBuf {
    PathBuf::from(optional("TRACKSCOPE_DATASET").unwrap_or_else(|| DEFAULT_DATASET.to_string()))
}
