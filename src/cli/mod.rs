//! # CLI Module
//!
//! This module is the presentation shell of Trackscope. Each command takes the
//! user's input, calls the library modules in sequence and prints the results
//! as tables. It also turns library errors into user-facing messages.
//!
//! ## Commands
//!
//! ### Track Analysis
//!
//! - [`analyze`] - Looks up a track, prints its details, audio features and
//!   playback option, and optionally writes the chart specifications
//!
//! ### Dataset Browsing
//!
//! - [`dataset`] - Previews a CSV dataset and prints its summary statistics
//! - [`artists`] - Lists the distinct artists of a dataset
//! - [`songs`] - Lists the tracks of one artist in a dataset
//!
//! ## Data Flow
//!
//! ```text
//! analyze:  query → spotify::MetadataClient → preview::resolve
//!                                           → charts::build_charts
//! dataset:  file  → dataset::Dataset        → dataset::summarize
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! trackscope analyze --track "Bohemian Rhapsody" --artist Queen
//! trackscope analyze --track "Hey Jude" --artist "The Beatles" --charts hey-jude.json --open
//! trackscope dataset --file songs.csv --rows 10
//! trackscope artists --search que
//! trackscope songs --artist Queen
//! ```

mod analyze;
mod dataset;

pub use analyze::analyze;
pub use analyze::feature_rows;
pub use dataset::artists;
pub use dataset::dataset;
pub use dataset::songs;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::Error;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// User-facing message for an error kind.
pub fn describe(err: &Error) -> String {
    match err {
        Error::NotFound(msg) => format!("Nothing found: {msg}"),
        Error::Auth(msg) => format!(
            "Spotify rejected the credentials. Check SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET.\n Error: {msg}"
        ),
        Error::Upstream(msg) => format!("Spotify is not reachable right now. Err: {msg}"),
        Error::InvalidInput(msg) => format!("Invalid input: {msg}"),
        Error::MalformedDataset(msg) => format!("The dataset cannot be used: {msg}"),
        Error::Config(msg) => format!("Missing configuration: {msg}"),
        Error::Io(e) => format!("Cannot access file: {e}"),
    }
}
