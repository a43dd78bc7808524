//! Structured output of one pipeline run.

use crate::stats::StatsSummary;
use crate::types::MovementRegion;
use serde::Serialize;

/// Wall-clock timing of the pipeline stages, in milliseconds.
///
/// `speed_ms` covers the estimation together with the segmentation scan
/// that consumes it.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stats_ms: f64,
    pub smoothing_ms: f64,
    pub speed_ms: f64,
}

/// Full output of one pipeline run.
///
/// `smoothed` and `speeds` are aligned index-for-index with the input
/// recording; missing entries (no full smoothing window, noise-suppressed
/// speeds) serialize as `null`.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    pub summary: StatsSummary,
    pub smoothed: Vec<Option<f64>>,
    pub speeds: Vec<Option<f64>>,
    pub regions: Vec<MovementRegion>,
    pub timing: TimingBreakdown,
}
