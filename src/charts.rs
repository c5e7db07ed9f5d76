//! Declarative chart specifications for audio features.
//!
//! The builder turns one [`AudioFeatures`] value into three charts:
//!
//! - a bar chart with one bar per bounded feature
//! - a radar chart with the same features as vertices of a closed polygon
//! - a tempo gauge split into qualitative bands
//!
//! Charts are data plus encoding, not pixels. They serialize to JSON so an
//! external renderer can draw them.

use serde::{Deserialize, Serialize};

use crate::{Res, types::AudioFeatures, utils};

pub const FEATURE_RANGE: (f64, f64) = (0.0, 1.0);
pub const TEMPO_RANGE: (f64, f64) = (0.0, 250.0);
pub const TEMPO_REFERENCE: f64 = 120.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    /// Text shown next to the mark, e.g. `80.0%`.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub points: Vec<ChartPoint>,
    pub value_range: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub title: String,
    pub points: Vec<ChartPoint>,
    pub radial_range: (f64, f64),
    /// The last vertex connects back to the first.
    pub closed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeBand {
    pub label: String,
    pub from: f64,
    pub to: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempoGauge {
    pub title: String,
    pub value: f64,
    pub unit: String,
    pub range: (f64, f64),
    pub reference: f64,
    pub bands: Vec<GaugeBand>,
}

impl TempoGauge {
    /// The band the gauge value falls in. Values past the range fall in the
    /// outermost band.
    pub fn band(&self) -> Option<&GaugeBand> {
        self.bands
            .iter()
            .find(|b| self.value >= b.from && self.value < b.to)
            .or_else(|| {
                if self.value < self.range.0 {
                    self.bands.first()
                } else {
                    self.bands.last()
                }
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCharts {
    pub bar: BarChart,
    pub radar: RadarChart,
    pub gauge: TempoGauge,
}

impl FeatureCharts {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds the bar, radar and gauge charts for a track.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidInput`] if any bounded feature is outside
/// `[0, 1]` or the tempo is not a positive number.
pub fn build_charts(features: &AudioFeatures) -> Res<FeatureCharts> {
    features.validate()?;

    let points: Vec<ChartPoint> = features
        .bounded()
        .iter()
        .map(|(label, value)| ChartPoint {
            label: label.to_string(),
            value: *value,
            text: utils::percent(*value),
        })
        .collect();

    Ok(FeatureCharts {
        bar: BarChart {
            title: "Feature Distribution".to_string(),
            points: points.clone(),
            value_range: FEATURE_RANGE,
        },
        radar: RadarChart {
            title: "Audio Profile".to_string(),
            points,
            radial_range: FEATURE_RANGE,
            closed: true,
        },
        gauge: TempoGauge {
            title: "Beats Per Minute".to_string(),
            value: features.tempo,
            unit: "BPM".to_string(),
            range: TEMPO_RANGE,
            reference: TEMPO_REFERENCE,
            bands: tempo_bands(),
        },
    })
}

fn tempo_bands() -> Vec<GaugeBand> {
    [
        ("slow", 0.0, 60.0, "rgba(29, 185, 84, 0.15)"),
        ("moderate", 60.0, 120.0, "rgba(29, 185, 84, 0.25)"),
        ("fast", 120.0, 180.0, "rgba(29, 185, 84, 0.35)"),
        ("very fast", 180.0, TEMPO_RANGE.1, "rgba(29, 185, 84, 0.45)"),
    ]
    .into_iter()
    .map(|(label, from, to, color)| GaugeBand {
        label: label.to_string(),
        from,
        to,
        color: color.to_string(),
    })
    .collect()
}
