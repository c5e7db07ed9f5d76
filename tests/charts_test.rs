use trackscope::Error;
use trackscope::charts::{TEMPO_RANGE, TEMPO_REFERENCE, build_charts};
use trackscope::types::AudioFeatures;

// Helper function to create test audio features
fn create_test_features() -> AudioFeatures {
    AudioFeatures {
        track_id: "abc123".to_string(),
        danceability: 0.8,
        energy: 0.6,
        speechiness: 0.1,
        acousticness: 0.2,
        instrumentalness: 0.0,
        liveness: 0.3,
        valence: 0.5,
        tempo: 120.0,
        loudness: Some(-9.9),
        key: Some(10),
        mode: Some(0),
        time_signature: Some(4),
    }
}

#[test]
fn test_bar_chart_has_one_point_per_feature() {
    let charts = build_charts(&create_test_features()).unwrap();

    let labels: Vec<&str> = charts.bar.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Danceability",
            "Energy",
            "Speechiness",
            "Acousticness",
            "Instrumentalness",
            "Liveness",
            "Valence",
        ]
    );

    let values: Vec<f64> = charts.bar.points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![0.8, 0.6, 0.1, 0.2, 0.0, 0.3, 0.5]);

    assert_eq!(charts.bar.points[0].text, "80.0%");
    assert_eq!(charts.bar.points[4].text, "0.0%");
    assert_eq!(charts.bar.value_range, (0.0, 1.0));
}

#[test]
fn test_radar_matches_bar() {
    let charts = build_charts(&create_test_features()).unwrap();

    assert_eq!(charts.radar.points, charts.bar.points);
    assert_eq!(charts.radar.radial_range, (0.0, 1.0));
    assert!(charts.radar.closed);
}

#[test]
fn test_tempo_gauge() {
    let charts = build_charts(&create_test_features()).unwrap();
    let gauge = &charts.gauge;

    assert_eq!(gauge.value, 120.0);
    assert_eq!(gauge.unit, "BPM");
    assert_eq!(gauge.range, TEMPO_RANGE);
    assert_eq!(gauge.reference, TEMPO_REFERENCE);

    // Bands cover the range without gaps
    assert_eq!(gauge.bands.first().unwrap().from, TEMPO_RANGE.0);
    assert_eq!(gauge.bands.last().unwrap().to, TEMPO_RANGE.1);
    for pair in gauge.bands.windows(2) {
        assert_eq!(pair[0].to, pair[1].from);
    }

    assert_eq!(gauge.band().unwrap().label, "fast");
}

#[test]
fn test_tempo_band_edges() {
    let mut features = create_test_features();

    features.tempo = 45.0;
    assert_eq!(build_charts(&features).unwrap().gauge.band().unwrap().label, "slow");

    features.tempo = 119.9;
    assert_eq!(
        build_charts(&features).unwrap().gauge.band().unwrap().label,
        "moderate"
    );

    // Past the gauge range still lands in the last band
    features.tempo = 300.0;
    assert_eq!(
        build_charts(&features).unwrap().gauge.band().unwrap().label,
        "very fast"
    );
}

fn assert_rejected(mutate: impl Fn(&mut AudioFeatures)) {
    let mut features = create_test_features();
    mutate(&mut features);
    let err = build_charts(&features).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)), "got {err:?}");
}

#[test]
fn test_invalid_features_are_rejected() {
    assert_rejected(|f| f.energy = 1.2);
    assert_rejected(|f| f.valence = -0.1);
    assert_rejected(|f| f.liveness = f64::NAN);
    assert_rejected(|f| f.tempo = 0.0);
    assert_rejected(|f| f.tempo = -90.0);
    assert_rejected(|f| f.tempo = f64::NAN);
}

#[test]
fn test_charts_serialize_to_json() {
    let charts = build_charts(&create_test_features()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&charts.to_json().unwrap()).unwrap();

    assert_eq!(json["bar"]["points"].as_array().unwrap().len(), 7);
    assert_eq!(json["radar"]["closed"], true);
    assert_eq!(json["gauge"]["value"], 120.0);
    assert_eq!(json["gauge"]["bands"].as_array().unwrap().len(), 4);
}
