//! Playback option selection.
//!
//! Picks exactly one way to listen to a track, in strict priority order:
//!
//! 1. The native short preview when the track carries one
//! 2. The embeddable Spotify player, built from the track identifier
//! 3. A web search for the title and artist
//!
//! Availability is taken at face value from the metadata; no URL is probed.

use crate::{
    types::{ListeningLinks, PlaybackDescriptor, PlaybackKind, TrackMetadata},
    utils,
};

pub const EMBED_BASE_URL: &str = "https://open.spotify.com/embed/track/";
pub const TRACK_BASE_URL: &str = "https://open.spotify.com/track/";
pub const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results";
pub const YOUTUBE_MUSIC_SEARCH_URL: &str = "https://music.youtube.com/search";
pub const SOUNDCLOUD_SEARCH_URL: &str = "https://soundcloud.com/search";

/// Selects the playback option for a track. Never fails.
///
/// # Example
///
/// ```
/// let playback = resolve(&track);
/// match playback.kind {
///     PlaybackKind::Native => println!("30 second preview: {}", playback.url),
///     PlaybackKind::Embed => println!("Spotify player: {}", playback.url),
///     PlaybackKind::ExternalSearch => println!("Search: {}", playback.url),
/// }
/// ```
pub fn resolve(track: &TrackMetadata) -> PlaybackDescriptor {
    if let Some(url) = track
        .preview_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
    {
        return PlaybackDescriptor {
            kind: PlaybackKind::Native,
            url: url.to_string(),
        };
    }

    if utils::is_usable_track_id(&track.track_id) {
        return PlaybackDescriptor {
            kind: PlaybackKind::Embed,
            url: format!("{EMBED_BASE_URL}{}", track.track_id),
        };
    }

    PlaybackDescriptor {
        kind: PlaybackKind::ExternalSearch,
        url: youtube_search(track),
    }
}

/// Links to the full track on the service and on third-party search pages.
pub fn alternatives(track: &TrackMetadata) -> ListeningLinks {
    let terms = utils::join_terms(&[track.title.as_str(), track.artist.as_str()]);

    let service_url = if !track.external_url.trim().is_empty() {
        track.external_url.clone()
    } else if utils::is_usable_track_id(&track.track_id) {
        format!("{TRACK_BASE_URL}{}", track.track_id)
    } else {
        utils::search_url(YOUTUBE_MUSIC_SEARCH_URL, "q", &terms)
    };

    ListeningLinks {
        service_url,
        youtube_music: utils::search_url(YOUTUBE_MUSIC_SEARCH_URL, "q", &terms),
        youtube_search: youtube_search(track),
        soundcloud: utils::search_url(SOUNDCLOUD_SEARCH_URL, "q", &terms),
    }
}

fn youtube_search(track: &TrackMetadata) -> String {
    let terms = utils::join_terms(&[track.title.as_str(), track.artist.as_str(), "audio"]);
    utils::search_url(YOUTUBE_SEARCH_URL, "search_query", &terms)
}
