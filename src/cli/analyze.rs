use std::path::{Path, PathBuf};

use tabled::Table;

use super::{describe, spinner};
use crate::{
    charts::{self, FeatureCharts},
    error, info, preview,
    spotify::{MetadataClient, auth},
    success,
    types::{
        AudioFeatures, DetailTableRow, FeatureTableRow, PlaybackDescriptor, PlaybackKind,
        TrackMetadata,
    },
    utils, warning,
};

/// Looks up a track on Spotify and prints everything known about it.
///
/// # Arguments
///
/// * `track` - Track title to search for
/// * `artist` - Artist name to search for
/// * `charts_path` - Where to write the chart specifications as JSON
/// * `open` - Open the selected playback URL in the default browser
///
/// # Output
///
/// 1. Track details (album, release date, popularity, duration)
/// 2. The selected playback option and links to the full track
/// 3. Audio features as percentages plus tempo and its band
///
/// # Error Handling
///
/// Credential and lookup errors terminate the program with a message
/// describing the error kind. Features that cannot be charted, failing to
/// write the chart file and failing to open the browser only produce a
/// warning.
pub async fn analyze(track: String, artist: String, charts_path: Option<PathBuf>, open: bool) {
    let credentials = match auth::provider_from_env() {
        Ok(c) => c,
        Err(e) => error!("{}", describe(&e)),
    };
    let client = MetadataClient::from_env(credentials);

    let pb = spinner("Fetching track data from Spotify...");
    let (metadata, features) = match client.lookup(&track, &artist).await {
        Ok(found) => found,
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", describe(&e));
        }
    };
    pb.finish_and_clear();
    success!("Track data loaded successfully!");

    println!("{}\n", Table::new(detail_rows(&metadata)));

    let playback = preview::resolve(&metadata);
    print_playback(&playback);

    let links = preview::alternatives(&metadata);
    info!("Listen to the full track:");
    info!("  Spotify: {}", links.service_url);
    info!("  YouTube Music: {}", links.youtube_music);
    info!("  YouTube: {}", links.youtube_search);
    info!("  SoundCloud: {}", links.soundcloud);

    println!("\n{}", Table::new(feature_rows(&features)));

    // Silent tracks report a tempo of 0, which no chart can show
    match charts::build_charts(&features) {
        Ok(feature_charts) => {
            if let Some(band) = feature_charts.gauge.band() {
                info!("Tempo {:.0} BPM is {}.", features.tempo, band.label);
            }
            if let Some(path) = charts_path {
                write_charts(&feature_charts, &path).await;
            }
        }
        Err(e) => warning!("No charts available. {}", describe(&e)),
    }

    if open && webbrowser::open(&playback.url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            playback.url
        );
    }
}

async fn write_charts(feature_charts: &FeatureCharts, path: &Path) {
    match feature_charts.to_json() {
        Ok(json) => match async_fs::write(path, json).await {
            Ok(_) => success!("Charts written to {}", path.display()),
            Err(e) => warning!("Cannot write charts to {}. Err: {}", path.display(), e),
        },
        Err(e) => warning!("Cannot serialize charts. Err: {}", e),
    }
}

fn print_playback(playback: &PlaybackDescriptor) {
    match playback.kind {
        PlaybackKind::Native => success!("30-second preview available: {}", playback.url),
        PlaybackKind::Embed => {
            warning!("Spotify preview not available. Listen with the Spotify player instead.");
            info!("Spotify player: {}", playback.url);
        }
        PlaybackKind::ExternalSearch => {
            warning!("No Spotify playback available. Alternative listening option provided.");
            info!("Search: {}", playback.url);
        }
    }
}

fn detail_rows(track: &TrackMetadata) -> Vec<DetailTableRow> {
    let mut rows = vec![
        ("Track", track.title.clone()),
        ("Artist", track.artist.clone()),
        ("Album", track.album.clone()),
        ("Release Date", track.release_date.clone()),
        ("Popularity", format!("{}/100", track.popularity)),
        ("Duration", track.duration()),
    ];
    if let Some(cover) = &track.cover_art_url {
        rows.push(("Cover Art", cover.clone()));
    }

    rows.into_iter()
        .map(|(field, value)| DetailTableRow {
            field: field.to_string(),
            value,
        })
        .collect()
}

/// Table rows for the audio features: the bounded features as percentages,
/// then tempo and whichever of loudness, key and time signature are known.
pub fn feature_rows(features: &AudioFeatures) -> Vec<FeatureTableRow> {
    let mut rows: Vec<FeatureTableRow> = features
        .bounded()
        .iter()
        .map(|(name, value)| FeatureTableRow {
            feature: name.to_string(),
            value: utils::percent(*value),
        })
        .collect();

    rows.push(FeatureTableRow {
        feature: "Tempo".to_string(),
        value: format!("{:.0} BPM", features.tempo),
    });
    if let Some(loudness) = features.loudness {
        rows.push(FeatureTableRow {
            feature: "Loudness".to_string(),
            value: format!("{loudness:.1} dB"),
        });
    }
    if let Some(key) = features.key.and_then(utils::pitch_class_name) {
        let mode = features.mode.and_then(utils::mode_name).unwrap_or_default();
        rows.push(FeatureTableRow {
            feature: "Key".to_string(),
            value: utils::join_terms(&[key, mode]),
        });
    }
    if let Some(time_signature) = features.time_signature {
        rows.push(FeatureTableRow {
            feature: "Time Signature".to_string(),
            value: format!("{time_signature}/4"),
        });
    }

    rows
}
