//! Per-interval speed estimation with noise suppression.

use crate::error::AnalysisError;
use crate::types::Sample;
use log::warn;

/// Speed magnitude (cm/s) above which a reading is treated as sensor
/// artifact rather than real motion.
pub const DEFAULT_NOISE_THRESHOLD: f64 = 100.0;

/// Estimate per-interval speed (cm/s) as the first difference of distance
/// over time between consecutive samples.
///
/// The output is aligned index-for-index with the recording:
/// - index 0 has no predecessor and is `Some(0.0)`;
/// - a zero time delta signals a data anomaly, not motion, so the entry is
///   sanitized to `Some(0.0)` instead of propagating a division by zero;
/// - entries whose magnitude exceeds `noise_threshold` are dropped to
///   `None` rather than clamped, so spikes never reach the segmenter.
pub fn estimate_speeds(
    samples: &[Sample],
    noise_threshold: f64,
) -> Result<Vec<Option<f64>>, AnalysisError> {
    if !(noise_threshold.is_finite() && noise_threshold > 0.0) {
        return Err(AnalysisError::invalid_threshold(
            "noise_threshold",
            noise_threshold,
        ));
    }

    let mut out = Vec::with_capacity(samples.len());
    if samples.is_empty() {
        return Ok(out);
    }
    out.push(Some(0.0));

    for pair in samples.windows(2) {
        let dt_s = (pair[1].time_ms - pair[0].time_ms) / 1000.0;
        if dt_s == 0.0 {
            warn!(
                "zero time delta at t={} ms; speed sanitized to 0",
                pair[1].time_ms
            );
            out.push(Some(0.0));
            continue;
        }
        let raw = (pair[1].distance_cm - pair[0].distance_cm) / dt_s;
        out.push(if raw.abs() > noise_threshold {
            None
        } else {
            Some(raw)
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_is_always_zero() {
        let samples = vec![Sample::new(0.0, 10.0), Sample::new(100.0, 12.0)];
        let speeds = estimate_speeds(&samples, DEFAULT_NOISE_THRESHOLD).unwrap();
        assert_eq!(speeds[0], Some(0.0));
    }

    #[test]
    fn computes_interval_speed_in_cm_per_second() {
        // 40 cm over 0.1 s = 400 cm/s; keep it with a permissive threshold.
        let samples = vec![Sample::new(0.0, 10.0), Sample::new(100.0, 50.0)];
        let speeds = estimate_speeds(&samples, 1000.0).unwrap();
        assert_eq!(speeds, vec![Some(0.0), Some(400.0)]);
    }

    #[test]
    fn suppresses_speeds_above_noise_threshold() {
        let samples = vec![Sample::new(0.0, 10.0), Sample::new(100.0, 50.0)];
        let speeds = estimate_speeds(&samples, DEFAULT_NOISE_THRESHOLD).unwrap();
        assert_eq!(speeds, vec![Some(0.0), None]);
    }

    #[test]
    fn zero_time_delta_is_sanitized_to_zero() {
        let samples = vec![Sample::new(100.0, 10.0), Sample::new(100.0, 35.0)];
        let speeds = estimate_speeds(&samples, DEFAULT_NOISE_THRESHOLD).unwrap();
        assert_eq!(speeds[1], Some(0.0));
    }

    #[test]
    fn negative_motion_is_kept_signed() {
        let samples = vec![Sample::new(0.0, 50.0), Sample::new(1000.0, 20.0)];
        let speeds = estimate_speeds(&samples, DEFAULT_NOISE_THRESHOLD).unwrap();
        assert_eq!(speeds[1], Some(-30.0));
    }

    #[test]
    fn empty_recording_yields_empty_series() {
        let speeds = estimate_speeds(&[], DEFAULT_NOISE_THRESHOLD).unwrap();
        assert!(speeds.is_empty());
    }

    #[test]
    fn rejects_nonpositive_threshold() {
        let samples = vec![Sample::new(0.0, 10.0)];
        assert!(matches!(
            estimate_speeds(&samples, -1.0),
            Err(AnalysisError::InvalidConfig { .. })
        ));
        assert!(matches!(
            estimate_speeds(&samples, f64::INFINITY),
            Err(AnalysisError::InvalidConfig { .. })
        ));
    }
}
