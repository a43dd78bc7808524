//! Synthetic recordings for integration tests.

use distance_analyzer::types::Sample;

pub const PERIOD_MS: f64 = 100.0;

/// Recording sampled every [`PERIOD_MS`] holding a constant distance.
pub fn steady(n: usize, distance_cm: f64) -> Vec<Sample> {
    (0..n)
        .map(|i| Sample::new(i as f64 * PERIOD_MS, distance_cm))
        .collect()
}

/// Still phase, then a linear move of `step_cm` per sample, then still again
/// at the final position. All phases sampled every [`PERIOD_MS`].
pub fn still_move_still(
    still_before: usize,
    moving: usize,
    still_after: usize,
    start_cm: f64,
    step_cm: f64,
) -> Vec<Sample> {
    let mut samples = Vec::with_capacity(still_before + moving + still_after);
    let mut distance = start_cm;
    for _ in 0..still_before {
        samples.push(Sample::new(samples.len() as f64 * PERIOD_MS, distance));
    }
    for _ in 0..moving {
        distance += step_cm;
        samples.push(Sample::new(samples.len() as f64 * PERIOD_MS, distance));
    }
    for _ in 0..still_after {
        samples.push(Sample::new(samples.len() as f64 * PERIOD_MS, distance));
    }
    samples
}
