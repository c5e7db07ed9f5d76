use chrono::Utc;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{Error, Res, utils};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

impl Token {
    /// Seconds before expiry at which a token is treated as stale.
    pub const EXPIRY_MARGIN: u64 = 60;

    pub fn new(access_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            expires_in,
            obtained_at: Utc::now().timestamp() as u64,
        }
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now.saturating_add(Self::EXPIRY_MARGIN)
            >= self.obtained_at.saturating_add(self.expires_in)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    pub items: Vec<TrackObject>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album: AlbumObject,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub id: Option<String>,
    pub danceability: f64,
    pub energy: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub loudness: Option<f64>,
    pub key: Option<i32>,
    pub mode: Option<i32>,
    pub time_signature: Option<u32>,
}

/// Metadata of a single track as shown to the user.
///
/// Built from the top-ranked search candidate and replaced wholesale on each
/// lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMetadata {
    pub track_id: String,
    pub title: String,
    /// First credited artist.
    pub artist: String,
    pub album: String,
    pub cover_art_url: Option<String>,
    pub release_date: String,
    /// Popularity score in `[0, 100]`.
    pub popularity: u8,
    pub duration_ms: u64,
    pub external_url: String,
    /// Native short audio preview, absent for many tracks.
    pub preview_url: Option<String>,
    pub uri: String,
}

impl TrackMetadata {
    /// Duration formatted as `m:ss`.
    pub fn duration(&self) -> String {
        utils::format_duration(self.duration_ms)
    }
}

impl From<TrackObject> for TrackMetadata {
    fn from(track: TrackObject) -> Self {
        let track_id = track.id.unwrap_or_default();
        let external_url = track.external_urls.spotify.unwrap_or_default();

        Self {
            title: track.name,
            artist: track
                .artists
                .into_iter()
                .next()
                .map(|a| a.name)
                .unwrap_or_default(),
            album: track.album.name,
            cover_art_url: track.album.images.into_iter().next().map(|i| i.url),
            release_date: track.album.release_date,
            popularity: track.popularity.min(100) as u8,
            duration_ms: track.duration_ms,
            external_url,
            preview_url: track.preview_url.filter(|u| !u.trim().is_empty()),
            uri: track.uri,
            track_id,
        }
    }
}

/// Audio descriptors of a track, keyed by `track_id`.
///
/// The seven bounded features lie in `[0, 1]` and tempo is a positive BPM
/// value; [`AudioFeatures::validate`] checks both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub track_id: String,
    pub danceability: f64,
    pub energy: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub loudness: Option<f64>,
    pub key: Option<i32>,
    pub mode: Option<i32>,
    pub time_signature: Option<u32>,
}

impl AudioFeatures {
    /// Names of the bounded features in display order.
    pub const BOUNDED: [&'static str; 7] = [
        "Danceability",
        "Energy",
        "Speechiness",
        "Acousticness",
        "Instrumentalness",
        "Liveness",
        "Valence",
    ];

    /// The bounded features paired with their names, in [`Self::BOUNDED`] order.
    pub fn bounded(&self) -> [(&'static str, f64); 7] {
        let values = [
            self.danceability,
            self.energy,
            self.speechiness,
            self.acousticness,
            self.instrumentalness,
            self.liveness,
            self.valence,
        ];
        std::array::from_fn(|i| (Self::BOUNDED[i], values[i]))
    }

    pub fn validate(&self) -> Res<()> {
        for (name, value) in self.bounded() {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidInput(format!(
                    "{name} must lie in [0, 1], got {value}"
                )));
            }
        }

        if !self.tempo.is_finite() || self.tempo <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "tempo must be a positive BPM value, got {}",
                self.tempo
            )));
        }

        Ok(())
    }
}

impl AudioFeatures {
    pub fn from_response(track_id: &str, features: AudioFeaturesResponse) -> Self {
        Self {
            track_id: features.id.unwrap_or_else(|| track_id.to_string()),
            danceability: features.danceability,
            energy: features.energy,
            speechiness: features.speechiness,
            acousticness: features.acousticness,
            instrumentalness: features.instrumentalness,
            liveness: features.liveness,
            valence: features.valence,
            tempo: features.tempo,
            loudness: features.loudness,
            key: features.key,
            mode: features.mode,
            time_signature: features.time_signature,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackKind {
    Native,
    Embed,
    ExternalSearch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackDescriptor {
    pub kind: PlaybackKind,
    pub url: String,
}

/// Links for listening to the full track outside the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListeningLinks {
    pub service_url: String,
    pub youtube_music: String,
    pub youtube_search: String,
    pub soundcloud: String,
}

/// One row of a dataset with the columns the summarizer understands.
///
/// Empty and non-numeric cells are `None` rather than absent keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackRow {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub popularity: Option<f64>,
    pub track_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub total_tracks: usize,
    pub unique_artists: usize,
    pub unique_albums: usize,
    pub average_popularity: f64,
}

#[derive(Tabled)]
pub struct DetailTableRow {
    pub field: String,
    pub value: String,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub feature: String,
    pub value: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub artist: String,
}

#[derive(Tabled)]
pub struct SongTableRow {
    pub track: String,
}
