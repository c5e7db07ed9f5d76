use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use super::{auth::CredentialProvider, status_error};
use crate::{
    Error, Res, config,
    types::{AudioFeatures, AudioFeaturesResponse, SearchResponse, TrackMetadata, TrackObject},
    utils,
};

/// Number of candidates requested per search.
pub const SEARCH_LIMIT: u32 = 10;

/// Client for track lookups against the Spotify Web API.
///
/// Holds no credential state of its own; every request asks the injected
/// [`CredentialProvider`] for a bearer token.
pub struct MetadataClient {
    http: Client,
    api_url: String,
    market: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl MetadataClient {
    pub fn new(
        http: Client,
        api_url: impl Into<String>,
        market: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            market: market.into(),
            credentials,
        }
    }

    /// Builds a client for `SPOTIFY_API_URL` and `SPOTIFY_MARKET`.
    pub fn from_env(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::new(
            Client::new(),
            config::spotify_apiurl(),
            config::spotify_market(),
            credentials,
        )
    }

    /// Looks up a track and its audio features.
    ///
    /// Takes the top-ranked candidate of the first search strategy that
    /// returns any, then fetches the audio features for that candidate.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] - the track or artist query is blank
    /// - [`Error::NotFound`] - no candidate matched, or the track has no
    ///   audio features
    /// - [`Error::Auth`] - the bearer token was rejected
    /// - [`Error::Upstream`] - network failure or unexpected response
    ///
    /// # Example
    ///
    /// ```
    /// let (track, features) = client.lookup("Bohemian Rhapsody", "Queen").await?;
    /// println!("{} by {} at {:.0} BPM", track.title, track.artist, features.tempo);
    /// ```
    pub async fn lookup(&self, track: &str, artist: &str) -> Res<(TrackMetadata, AudioFeatures)> {
        let metadata = self.search_track(track, artist).await?;
        let features = self.audio_features(&metadata.track_id).await?;
        Ok((metadata, features))
    }

    /// Resolves a track + artist query to the top-ranked track.
    pub async fn search_track(&self, track: &str, artist: &str) -> Res<TrackMetadata> {
        if track.trim().is_empty() || artist.trim().is_empty() {
            return Err(Error::InvalidInput(
                "both a track and an artist are required".to_string(),
            ));
        }

        for query in utils::search_queries(track, artist) {
            if let Some(first) = self.search(&query).await?.into_iter().next() {
                return Ok(TrackMetadata::from(first));
            }
        }

        Err(Error::NotFound(format!(
            "track '{track}' by '{artist}' not found on Spotify"
        )))
    }

    /// Runs one track search and returns the candidates in service order.
    pub async fn search(&self, query: &str) -> Res<Vec<TrackObject>> {
        let url = format!("{}/search", self.api_url);
        let limit = SEARCH_LIMIT.to_string();
        let response: SearchResponse = self
            .get_json(
                &url,
                &[
                    ("q", query),
                    ("type", "track"),
                    ("limit", limit.as_str()),
                    ("market", self.market.as_str()),
                ],
            )
            .await?;

        Ok(response.tracks.items)
    }

    /// Fetches the audio features of a track.
    pub async fn audio_features(&self, track_id: &str) -> Res<AudioFeatures> {
        if !utils::is_usable_track_id(track_id) {
            return Err(Error::NotFound(format!(
                "track '{track_id}' has no usable identifier for audio features"
            )));
        }

        let url = format!("{}/audio-features/{}", self.api_url, track_id);
        let response: Option<AudioFeaturesResponse> = self.get_json(&url, &[]).await?;

        match response {
            Some(features) => Ok(AudioFeatures::from_response(track_id, features)),
            None => Err(Error::NotFound(format!(
                "no audio features available for track '{track_id}'"
            ))),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Res<T> {
        let token = self.credentials.access_token().await?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                self.credentials.invalidate().await;
            }
            return Err(status_error(status, url));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Upstream(format!("unexpected response from {url}: {e}")))
    }
}
