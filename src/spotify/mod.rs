//! # Spotify Integration Module
//!
//! This module is the integration layer between Trackscope and the Spotify Web
//! API. It resolves a free-text track + artist query to the track's metadata
//! and audio features.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! MetadataClient (search, audio features)
//!     ↓                    ↘
//! HTTP Layer (reqwest)      CredentialProvider (bearer tokens)
//!     ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - The [`auth::CredentialProvider`] capability injected into the
//!   client, with a client-credentials implementation that caches its token
//!   and a static implementation for tokens obtained out-of-band.
//! - [`MetadataClient`] - Track search and audio-feature retrieval.
//!
//! ## API Coverage
//!
//! - `GET /search?type=track` - ranked track candidates for a query
//! - `GET /audio-features/{id}` - audio feature vector of a track
//! - `POST /api/token` - client-credentials token grant
//!
//! ## Error Handling
//!
//! Every call is a single attempt. Failures surface immediately as
//! [`crate::Error::Auth`] (401/403), [`crate::Error::NotFound`] (404 or no
//! candidates) or [`crate::Error::Upstream`] (anything else). Nothing is
//! retried or logged here.
//!
//! ## Usage
//!
//! ```rust
//! let credentials = spotify::auth::provider_from_env()?;
//! let client = MetadataClient::from_env(credentials);
//! let (track, features) = client.lookup("Hey Jude", "The Beatles").await?;
//! ```

pub mod auth;
mod tracks;

pub use tracks::MetadataClient;

use reqwest::StatusCode;

use crate::Error;

/// Maps a non-success HTTP status to an error kind.
pub(crate) fn status_error(status: StatusCode, context: &str) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Error::Auth(format!("{context} was rejected with {status}"))
        }
        StatusCode::NOT_FOUND => Error::NotFound(format!("{context} returned {status}")),
        _ => Error::Upstream(format!("{context} failed with {status}")),
    }
}
