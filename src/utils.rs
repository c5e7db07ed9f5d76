use url::form_urlencoded;

const PITCH_CLASSES: [&str; 12] = [
    "C", "C♯/D♭", "D", "D♯/E♭", "E", "F", "F♯/G♭", "G", "G♯/A♭", "A", "A♯/B♭", "B",
];

/// Search queries tried in order for a track + artist lookup.
///
/// The field-filtered form comes first, the plain free-text form second.
/// Both combine the track and artist terms.
pub fn search_queries(track: &str, artist: &str) -> Vec<String> {
    let track = track.trim();
    let artist = artist.trim();
    vec![
        format!("track:\"{track}\" artist:\"{artist}\""),
        format!("{track} {artist}"),
    ]
}

/// Formats milliseconds as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Whether an embeddable player URL can be built from a track identifier.
pub fn is_usable_track_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Joins the non-blank terms with single spaces.
pub fn join_terms(terms: &[&str]) -> String {
    terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Appends `param=<terms>` to `base`, form-encoding the terms.
pub fn search_url(base: &str, param: &str, terms: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(terms.as_bytes()).collect();
    format!("{base}?{param}={encoded}")
}

pub fn pitch_class_name(key: i32) -> Option<&'static str> {
    usize::try_from(key)
        .ok()
        .and_then(|k| PITCH_CLASSES.get(k).copied())
}

pub fn mode_name(mode: i32) -> Option<&'static str> {
    match mode {
        1 => Some("Major"),
        0 => Some("Minor"),
        _ => None,
    }
}

/// Formats a `[0, 1]` value as a percentage with one decimal.
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
