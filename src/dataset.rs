//! Tabular track datasets.
//!
//! A [`Dataset`] is loaded wholesale from delimited text with a header row and
//! is read-only afterwards. Any CSV can be loaded and previewed; operations
//! that need specific columns check for them and fail with
//! [`Error::MalformedDataset`] when they are absent.

use std::{collections::HashSet, io::Read, path::Path};

use crate::{
    Error, Res,
    types::{DatasetSummary, TrackRow},
};

pub const ARTIST_COLUMN: &str = "artist";
pub const ALBUM_COLUMN: &str = "album";
pub const POPULARITY_COLUMN: &str = "popularity";
pub const TRACK_NAME_COLUMN: &str = "track_name";

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

/// Column positions of the typed row schema.
struct Columns {
    artist: usize,
    album: usize,
    popularity: usize,
    track_name: Option<usize>,
}

impl Dataset {
    /// Builds a dataset from already split records.
    ///
    /// Every record must have exactly one value per header.
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<String>>) -> Res<Self> {
        if let Some((line, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != headers.len())
        {
            return Err(Error::MalformedDataset(format!(
                "row {} has {} fields, expected {}",
                line + 1,
                record.len(),
                headers.len()
            )));
        }

        Ok(Self { headers, records })
    }

    /// Parses CSV with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Res<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut records = Vec::new();
        for record in rdr.records() {
            records.push(record?.iter().map(str::to_string).collect());
        }

        Self::from_records(headers, records)
    }

    pub async fn load(path: impl AsRef<Path>) -> Res<Self> {
        let bytes = async_fs::read(path.as_ref()).await?;
        Self::from_reader(bytes.as_slice())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First `n` raw rows, for previewing.
    pub fn head(&self, n: usize) -> &[Vec<String>] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    fn require(&self, name: &str) -> Res<usize> {
        self.column(name)
            .ok_or_else(|| Error::MalformedDataset(format!("missing required column '{name}'")))
    }

    fn columns(&self) -> Res<Columns> {
        Ok(Columns {
            artist: self.require(ARTIST_COLUMN)?,
            album: self.require(ALBUM_COLUMN)?,
            popularity: self.require(POPULARITY_COLUMN)?,
            track_name: self.column(TRACK_NAME_COLUMN),
        })
    }

    fn rows<'a>(&'a self, columns: &'a Columns) -> impl Iterator<Item = TrackRow> + 'a {
        self.records.iter().map(move |record| TrackRow {
            artist: cell(record, Some(columns.artist)),
            album: cell(record, Some(columns.album)),
            popularity: cell(record, Some(columns.popularity))
                .and_then(|p| p.trim().parse::<f64>().ok())
                .filter(|p| p.is_finite()),
            track_name: cell(record, columns.track_name),
        })
    }

    /// Typed view of every row.
    pub fn track_rows(&self) -> Res<Vec<TrackRow>> {
        let columns = self.columns()?;
        Ok(self.rows(&columns).collect())
    }

    /// Distinct artists, sorted.
    pub fn artists(&self) -> Res<Vec<String>> {
        let artist = self.require(ARTIST_COLUMN)?;
        let mut artists: Vec<String> = self
            .records
            .iter()
            .filter_map(|r| cell(r, Some(artist)))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        artists.sort();
        Ok(artists)
    }

    /// Distinct track names of one artist, sorted.
    pub fn tracks_by_artist(&self, artist: &str) -> Res<Vec<String>> {
        let artist_col = self.require(ARTIST_COLUMN)?;
        let track_col = self.require(TRACK_NAME_COLUMN)?;
        let mut tracks: Vec<String> = self
            .records
            .iter()
            .filter(|r| r.get(artist_col).map(String::as_str) == Some(artist))
            .filter_map(|r| cell(r, Some(track_col)))
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        tracks.sort();
        Ok(tracks)
    }
}

fn cell(record: &[String], column: Option<usize>) -> Option<String> {
    column
        .and_then(|c| record.get(c))
        .filter(|v| !v.is_empty())
        .cloned()
}

/// Computes aggregate statistics in a single pass over the rows.
///
/// Distinct artists and albums are counted on the raw cell value, without
/// case or whitespace normalization; empty cells are not counted. Rows with a
/// missing or non-numeric popularity still count toward `total_tracks` but not
/// toward the mean, which is `0` when no row has a numeric popularity.
///
/// # Errors
///
/// Returns [`Error::MalformedDataset`] if the `artist`, `album` or
/// `popularity` column is absent.
///
/// # Example
///
/// ```
/// let summary = summarize(&dataset)?;
/// println!("{} tracks by {} artists", summary.total_tracks, summary.unique_artists);
/// ```
pub fn summarize(dataset: &Dataset) -> Res<DatasetSummary> {
    let columns = dataset.columns()?;

    let mut total_tracks = 0;
    let mut artists = HashSet::new();
    let mut albums = HashSet::new();
    let mut popularity_sum = 0.0;
    let mut popularity_count = 0usize;

    for row in dataset.rows(&columns) {
        total_tracks += 1;
        if let Some(artist) = row.artist {
            artists.insert(artist);
        }
        if let Some(album) = row.album {
            albums.insert(album);
        }
        if let Some(popularity) = row.popularity {
            popularity_sum += popularity;
            popularity_count += 1;
        }
    }

    let average_popularity = if popularity_count == 0 {
        0.0
    } else {
        popularity_sum / popularity_count as f64
    };

    Ok(DatasetSummary {
        total_tracks,
        unique_artists: artists.len(),
        unique_albums: albums.len(),
        average_popularity,
    })
}
