//! Analysis pipeline driving the recording analysis end-to-end.
//!
//! The [`DistanceAnalyzer`] exposes a simple API: feed an ordered recording
//! and get descriptive statistics, the smoothed signal, the sanitized speed
//! series and the detected movement regions in one report.
//!
//! Typical usage:
//! ```
//! use distance_analyzer::types::Sample;
//! use distance_analyzer::{AnalyzerParams, DistanceAnalyzer};
//!
//! let samples: Vec<Sample> = (0..20)
//!     .map(|i| Sample::new(i as f64 * 100.0, 25.0))
//!     .collect();
//!
//! let analyzer = DistanceAnalyzer::new(AnalyzerParams::default());
//! let report = analyzer.analyze(&samples).expect("valid recording");
//! assert!(report.regions.is_empty());
//! ```

pub mod params;
pub mod report;

pub use params::AnalyzerParams;
pub use report::{AnalysisReport, TimingBreakdown};

use crate::error::AnalysisError;
use crate::movement;
use crate::smoothing;
use crate::speed;
use crate::stats;
use crate::types::Sample;
use log::debug;
use std::time::Instant;

/// Orchestrates the consumers of a recording: descriptive statistics, the
/// smoothing filter, and speed estimation feeding movement segmentation.
///
/// Holds no state across calls; `analyze` may be invoked repeatedly and
/// yields identical output for identical input.
pub struct DistanceAnalyzer {
    params: AnalyzerParams,
}

impl DistanceAnalyzer {
    /// Create an analyzer with the supplied parameters.
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Run the full pipeline over an immutable recording.
    ///
    /// Statistics, smoothing and the speed→segmentation chain read only the
    /// raw sequence, so they run as parallel fan-outs. The segmentation scan
    /// itself stays sequential: its state machine is order-dependent.
    pub fn analyze(&self, samples: &[Sample]) -> Result<AnalysisReport, AnalysisError> {
        self.params.validate()?;
        let total = Instant::now();

        let (stats_out, (smoothing_out, chain_out)) = rayon::join(
            || timed(|| stats::compute_summary(samples, self.params.rapid_change_threshold)),
            || {
                rayon::join(
                    || timed(|| smoothing::moving_average(samples, self.params.window_size)),
                    || {
                        timed(|| -> Result<_, AnalysisError> {
                            let speeds =
                                speed::estimate_speeds(samples, self.params.noise_threshold)?;
                            let regions = movement::detect_regions(
                                &speeds,
                                self.params.movement_threshold,
                            )?;
                            Ok((speeds, regions))
                        })
                    },
                )
            },
        );

        let (summary, stats_ms) = stats_out;
        let (smoothed, smoothing_ms) = smoothing_out;
        let (chain, speed_ms) = chain_out;
        let summary = summary?;
        let smoothed = smoothed?;
        let (speeds, regions) = chain?;

        debug!(
            "DistanceAnalyzer::analyze n={} regions={} rapid_changes={}",
            samples.len(),
            regions.len(),
            summary.rapid_change_count
        );

        Ok(AnalysisReport {
            summary,
            smoothed,
            speeds,
            regions,
            timing: TimingBreakdown {
                total_ms: total.elapsed().as_secs_f64() * 1e3,
                stats_ms,
                smoothing_ms,
                speed_ms,
            },
        })
    }
}

fn timed<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64() * 1e3)
}
