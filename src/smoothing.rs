//! Trailing moving-average filter.

use crate::error::AnalysisError;
use crate::types::Sample;

/// Moving-average window, in samples.
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Smooth a recording with a trailing moving average.
///
/// `smoothed[i]` is the mean of `distance_cm[i − window_size + 1 ..= i]`.
/// The first `window_size − 1` indices have no full window of history and
/// stay `None`; they are never filled with a numeric default.
///
/// Implemented as an incremental running sum, which agrees with direct
/// per-window recomputation up to floating-point accumulation order.
pub fn moving_average(
    samples: &[Sample],
    window_size: usize,
) -> Result<Vec<Option<f64>>, AnalysisError> {
    if window_size < 1 {
        return Err(AnalysisError::InvalidConfig {
            option: "window_size",
            reason: "must be at least 1".to_string(),
        });
    }
    if window_size > samples.len() {
        return Err(AnalysisError::InsufficientData {
            found: samples.len(),
            minimum: window_size,
        });
    }

    let mut out = vec![None; samples.len()];
    let mut window_sum: f64 = samples[..window_size - 1]
        .iter()
        .map(|s| s.distance_cm)
        .sum();
    for i in (window_size - 1)..samples.len() {
        window_sum += samples[i].distance_cm;
        out[i] = Some(window_sum / window_size as f64);
        window_sum -= samples[i + 1 - window_size].distance_cm;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording(distances: &[f64]) -> Vec<Sample> {
        distances
            .iter()
            .enumerate()
            .map(|(i, &d)| Sample::new(i as f64 * 100.0, d))
            .collect()
    }

    #[test]
    fn window_three_on_five_samples_leaves_two_gaps() {
        let samples = recording(&[3.0, 6.0, 9.0, 12.0, 15.0]);
        let smoothed = moving_average(&samples, 3).unwrap();
        assert_eq!(smoothed.len(), 5);
        assert_eq!(&smoothed[..2], &[None, None]);
        assert_eq!(&smoothed[2..], &[Some(6.0), Some(9.0), Some(12.0)]);
    }

    #[test]
    fn window_one_is_identity() {
        let samples = recording(&[1.0, 4.0, 2.0]);
        let smoothed = moving_average(&samples, 1).unwrap();
        assert_eq!(smoothed, vec![Some(1.0), Some(4.0), Some(2.0)]);
    }

    #[test]
    fn window_equal_to_length_yields_one_value() {
        let samples = recording(&[2.0, 4.0, 6.0]);
        let smoothed = moving_average(&samples, 3).unwrap();
        assert_eq!(smoothed, vec![None, None, Some(4.0)]);
    }

    #[test]
    fn rejects_zero_window() {
        let samples = recording(&[1.0, 2.0]);
        assert!(matches!(
            moving_average(&samples, 0),
            Err(AnalysisError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_window_longer_than_recording() {
        let samples = recording(&[1.0, 2.0, 3.0]);
        let err = moving_average(&samples, 5).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientData {
                found: 3,
                minimum: 5
            }
        );
    }
}
