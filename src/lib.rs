//! Trackscope Library
//!
//! This library looks up tracks on the Spotify Web API, shapes their audio
//! features into declarative chart specifications, picks a playback option
//! for each track and summarizes local CSV datasets of tracks. The binary in
//! `main.rs` is a thin command-line shell over these modules.
//!
//! # Modules
//!
//! - `charts` - Bar, radar and tempo gauge specifications for audio features
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `dataset` - CSV dataset loading, browsing and summary statistics
//! - `error` - Error taxonomy shared by every module
//! - `preview` - Playback option selection and listening links
//! - `spotify` - Spotify Web API client and credential providers
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use trackscope::{charts, preview, spotify::{MetadataClient, auth::StaticToken}};
//!
//! #[tokio::main]
//! async fn main() -> trackscope::Res<()> {
//!     let client = MetadataClient::from_env(Arc::new(StaticToken::new("BQC...")));
//!     let (track, features) = client.lookup("Bohemian Rhapsody", "Queen").await?;
//!     let playback = preview::resolve(&track);
//!     let charts = charts::build_charts(&features)?;
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod preview;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the library reports one of the kinds in
/// [`Error`], so callers can tell a missing track from a bad credential or
/// a broken dataset without inspecting messages.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Looking up {} by {}", track, artist);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Track data loaded successfully");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used by the command-line shell for unrecoverable errors. The library
/// modules return [`Error`] values instead.
///
/// # Example
///
/// ```
/// error!("Failed to load dataset: {}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Spotify preview not available, falling back to the embedded player");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
