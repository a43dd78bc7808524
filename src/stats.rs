//! Descriptive statistics over a distance recording.

use crate::error::AnalysisError;
use crate::types::Sample;
use log::warn;
use serde::{Deserialize, Serialize};

/// Distance delta (cm) between consecutive readings above which a jump
/// counts as a rapid change.
pub const DEFAULT_RAPID_CHANGE_THRESHOLD: f64 = 5.0;

/// Single-pass reduction of a recording.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatsSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (N−1 denominator); NaN for a single
    /// reading, where it is undefined.
    pub std: f64,
    pub min: f64,
    pub max: f64,
    /// `max − min`.
    pub range: f64,
    /// Standard deviation as a percentage of the mean; lower means a
    /// steadier signal. NaN when the mean is zero.
    pub stability_pct: f64,
    /// Number of consecutive pairs whose distance delta exceeds the
    /// rapid-change threshold.
    pub rapid_change_count: usize,
}

/// Compute the descriptive summary of a recording.
///
/// Fails on an empty recording (mean and deviation are undefined) and on a
/// non-positive rapid-change threshold. A zero mean leaves `stability_pct`
/// as NaN rather than failing: a sensor resting exactly at zero is a valid
/// recording.
pub fn compute_summary(
    samples: &[Sample],
    rapid_change_threshold: f64,
) -> Result<StatsSummary, AnalysisError> {
    if !(rapid_change_threshold.is_finite() && rapid_change_threshold > 0.0) {
        return Err(AnalysisError::invalid_threshold(
            "rapid_change_threshold",
            rapid_change_threshold,
        ));
    }
    if samples.is_empty() {
        return Err(AnalysisError::InsufficientData {
            found: 0,
            minimum: 1,
        });
    }

    let count = samples.len();
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for s in samples {
        min = min.min(s.distance_cm);
        max = max.max(s.distance_cm);
        sum += s.distance_cm;
    }
    let mean = sum / count as f64;

    let std = if count >= 2 {
        let ss: f64 = samples
            .iter()
            .map(|s| {
                let d = s.distance_cm - mean;
                d * d
            })
            .sum();
        (ss / (count - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    let stability_pct = if mean == 0.0 {
        warn!("stability index undefined: mean distance is zero");
        f64::NAN
    } else {
        std / mean * 100.0
    };

    let rapid_change_count = samples
        .windows(2)
        .filter(|w| (w[1].distance_cm - w[0].distance_cm).abs() > rapid_change_threshold)
        .count();

    Ok(StatsSummary {
        count,
        mean,
        std,
        min,
        max,
        range: max - min,
        stability_pct,
        rapid_change_count,
    })
}
