//! Knobs for the analysis pipeline stages.

use crate::error::AnalysisError;
use crate::movement::DEFAULT_MOVEMENT_THRESHOLD;
use crate::smoothing::DEFAULT_WINDOW_SIZE;
use crate::speed::DEFAULT_NOISE_THRESHOLD;
use crate::stats::DEFAULT_RAPID_CHANGE_THRESHOLD;
use serde::Deserialize;

/// Parameters controlling the four pipeline stages.
///
/// Defaults match the original datalogger tuning (HC-SR04 class sensor at a
/// roughly 10 Hz sampling rate).
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// Moving-average window, in samples. Must be at least 1 and no longer
    /// than the recording.
    pub window_size: usize,
    /// Speed magnitude (cm/s) above which a reading is sensor artifact.
    pub noise_threshold: f64,
    /// Speed magnitude (cm/s) above which motion counts as significant.
    pub movement_threshold: f64,
    /// Distance delta (cm) between consecutive readings counted as a rapid
    /// change by the statistics stage.
    pub rapid_change_threshold: f64,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            noise_threshold: DEFAULT_NOISE_THRESHOLD,
            movement_threshold: DEFAULT_MOVEMENT_THRESHOLD,
            rapid_change_threshold: DEFAULT_RAPID_CHANGE_THRESHOLD,
        }
    }
}

impl AnalyzerParams {
    /// Check every option against its valid domain.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.window_size < 1 {
            return Err(AnalysisError::InvalidConfig {
                option: "window_size",
                reason: "must be at least 1".to_string(),
            });
        }
        let thresholds = [
            ("noise_threshold", self.noise_threshold),
            ("movement_threshold", self.movement_threshold),
            ("rapid_change_threshold", self.rapid_change_threshold),
        ];
        for (option, value) in thresholds {
            if !(value.is_finite() && value > 0.0) {
                return Err(AnalysisError::invalid_threshold(option, value));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AnalyzerParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_window() {
        let params = AnalyzerParams {
            window_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(AnalysisError::InvalidConfig {
                option: "window_size",
                ..
            })
        ));
    }

    #[test]
    fn rejects_degenerate_thresholds() {
        for (field, value) in [
            ("noise", -1.0),
            ("movement", 0.0),
            ("rapid", f64::NAN),
        ] {
            let mut params = AnalyzerParams::default();
            match field {
                "noise" => params.noise_threshold = value,
                "movement" => params.movement_threshold = value,
                _ => params.rapid_change_threshold = value,
            }
            assert!(
                matches!(params.validate(), Err(AnalysisError::InvalidConfig { .. })),
                "expected {field} threshold {value} to be rejected"
            );
        }
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let params: AnalyzerParams = serde_json::from_str(r#"{"window_size": 3}"#).unwrap();
        assert_eq!(params.window_size, 3);
        assert_eq!(params.noise_threshold, DEFAULT_NOISE_THRESHOLD);
        assert_eq!(params.movement_threshold, DEFAULT_MOVEMENT_THRESHOLD);
    }
}
