use std::fmt;

/// Structural failures that abort a pipeline stage.
///
/// These indicate misuse (bad configuration, too little data), not data
/// noise. Numeric degeneracies inside otherwise-valid recordings (zero time
/// delta, zero mean) are recovered locally with a documented substitution
/// and reported through `log::warn!` instead.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisError {
    /// A stage needs more samples than the recording provides.
    InsufficientData { found: usize, minimum: usize },
    /// A configuration option is outside its valid domain.
    InvalidConfig {
        option: &'static str,
        reason: String,
    },
}

impl AnalysisError {
    /// Rejection for a threshold option that must be positive and finite.
    pub(crate) fn invalid_threshold(option: &'static str, value: f64) -> Self {
        AnalysisError::InvalidConfig {
            option,
            reason: format!("{value} is not a positive finite value"),
        }
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InsufficientData { found, minimum } => {
                write!(f, "insufficient samples ({found} < {minimum})")
            }
            AnalysisError::InvalidConfig { option, reason } => {
                write!(f, "invalid {option}: {reason}")
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
