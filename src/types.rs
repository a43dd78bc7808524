use serde::{Deserialize, Serialize};

/// One timestamped ultrasonic distance reading.
///
/// Within a recording, samples are expected to be ordered by non-decreasing
/// `time_ms`. The pipeline treats this as a precondition of the loader and
/// does not re-validate it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Milliseconds since the datalogger started.
    #[serde(rename = "Time(ms)")]
    pub time_ms: f64,
    /// Measured distance in centimetres. May be negative in degenerate
    /// sensor states; such readings are kept, not rejected.
    #[serde(rename = "Distance(cm)")]
    pub distance_cm: f64,
}

impl Sample {
    pub fn new(time_ms: f64, distance_cm: f64) -> Self {
        Self {
            time_ms,
            distance_cm,
        }
    }

    /// Timestamp in seconds.
    pub fn time_s(&self) -> f64 {
        self.time_ms / 1000.0
    }
}

/// Maximal contiguous index span classified as significant movement.
///
/// A region closed mid-scan ends at the first non-moving index, one past the
/// last moving sample. A region still open at the end of the recording ends
/// at the last sample index instead. See [`crate::movement::detect_regions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRegion {
    pub start_index: usize,
    pub end_index: usize,
}
