use std::path::PathBuf;

use tabled::{Table, builder::Builder};

use super::describe;
use crate::{
    config,
    dataset::{self, Dataset},
    error, info,
    types::{ArtistTableRow, DatasetSummary, DetailTableRow, SongTableRow},
    success, warning,
};

pub const DEFAULT_PREVIEW_ROWS: usize = 20;

async fn load(file: Option<PathBuf>) -> Dataset {
    let path = file.unwrap_or_else(config::dataset_path);
    match Dataset::load(&path).await {
        Ok(ds) => {
            success!(
                "Dataset loaded successfully! ({} tracks from {})",
                ds.len(),
                path.display()
            );
            ds
        }
        Err(e) => error!("Error loading {}. {}", path.display(), describe(&e)),
    }
}

/// Previews a dataset and prints its summary statistics.
///
/// Shows the first `rows` rows (default 20) with every column verbatim,
/// followed by total tracks, distinct artists, distinct albums and the
/// average popularity. A dataset without the `artist`, `album` and
/// `popularity` columns is still previewed; only the statistics are skipped.
pub async fn dataset(file: Option<PathBuf>, rows: Option<usize>) {
    let ds = load(file).await;

    let mut builder = Builder::default();
    builder.push_record(ds.headers().iter().cloned());
    for record in ds.head(rows.unwrap_or(DEFAULT_PREVIEW_ROWS)) {
        builder.push_record(record.iter().cloned());
    }
    println!("{}\n", builder.build());

    match dataset::summarize(&ds) {
        Ok(summary) => println!("{}", Table::new(summary_rows(&summary))),
        Err(e) => warning!("No statistics available. {}", describe(&e)),
    }
}

/// Lists the distinct artists of a dataset, optionally filtered by a
/// case-insensitive search term.
pub async fn artists(file: Option<PathBuf>, search: Option<String>) {
    let ds = load(file).await;

    let mut artists = match ds.artists() {
        Ok(a) => a,
        Err(e) => error!("{}", describe(&e)),
    };

    if let Some(term) = search {
        let term = term.to_lowercase();
        artists.retain(|a| a.to_lowercase().contains(&term));
    }

    if artists.is_empty() {
        warning!("No artists found.");
        return;
    }

    let rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .map(|artist| ArtistTableRow { artist })
        .collect();
    println!("{}", Table::new(rows));
}

/// Lists the tracks of one artist in a dataset.
pub async fn songs(file: Option<PathBuf>, artist: String) {
    let ds = load(file).await;

    let tracks = match ds.tracks_by_artist(&artist) {
        Ok(t) => t,
        Err(e) => error!("{}", describe(&e)),
    };

    if tracks.is_empty() {
        warning!("No tracks by {} in the dataset.", artist);
        return;
    }

    info!("{} tracks by {}", tracks.len(), artist);
    let rows: Vec<SongTableRow> = tracks
        .into_iter()
        .map(|track| SongTableRow { track })
        .collect();
    println!("{}", Table::new(rows));
}

fn summary_rows(summary: &DatasetSummary) -> Vec<DetailTableRow> {
    [
        ("Total Tracks", summary.total_tracks.to_string()),
        ("Unique Artists", summary.unique_artists.to_string()),
        ("Unique Albums", summary.unique_albums.to_string()),
        ("Avg Popularity", format!("{:.1}", summary.average_popularity)),
    ]
    .into_iter()
    .map(|(field, value)| DetailTableRow {
        field: field.to_string(),
        value,
    })
    .collect()
}
