//! Segmentation of the speed series into movement regions.

use crate::error::AnalysisError;
use crate::types::MovementRegion;

/// Speed magnitude (cm/s) above which motion counts as significant.
pub const DEFAULT_MOVEMENT_THRESHOLD: f64 = 10.0;

/// Collapse the per-interval moving/still classification into contiguous
/// movement regions.
///
/// An index classifies as moving iff its speed entry is present and its
/// magnitude exceeds `movement_threshold`; noise-suppressed entries never
/// do. Single left-to-right scan, O(N) with O(1) state beyond the output.
///
/// Boundary convention: a run closed mid-scan ends at the first non-moving
/// index (one past the last moving sample), while a run still open at the
/// end of the series ends at the last index. Downstream consumers count
/// regions from these bounds, so the asymmetry is kept as-is.
pub fn detect_regions(
    speeds: &[Option<f64>],
    movement_threshold: f64,
) -> Result<Vec<MovementRegion>, AnalysisError> {
    if !(movement_threshold.is_finite() && movement_threshold > 0.0) {
        return Err(AnalysisError::invalid_threshold(
            "movement_threshold",
            movement_threshold,
        ));
    }

    let mut regions = Vec::new();
    let mut run_start: Option<usize> = None;
    for (i, entry) in speeds.iter().enumerate() {
        let moving = matches!(entry, Some(v) if v.abs() > movement_threshold);
        match (moving, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                regions.push(MovementRegion {
                    start_index: start,
                    end_index: i,
                });
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        regions.push(MovementRegion {
            start_index: start,
            end_index: speeds.len() - 1,
        });
    }
    Ok(regions)
}
