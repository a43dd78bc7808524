#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod config;
pub mod error;
pub mod io;
pub mod types;

// Stage modules — usable on their own, coordinated by the analyzer.
pub mod movement;
pub mod smoothing;
pub mod speed;
pub mod stats;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{AnalysisReport, AnalyzerParams, DistanceAnalyzer, TimingBreakdown};
pub use crate::error::AnalysisError;
pub use crate::stats::StatsSummary;
pub use crate::types::{MovementRegion, Sample};

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::{AnalyzerParams, DistanceAnalyzer, MovementRegion, Sample, StatsSummary};
}
