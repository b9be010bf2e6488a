//! Error types for interval and sequence operations.

/// Result type for interval operations
pub type PeriodResult<T> = Result<T, PeriodError>;

/// Error type for interval and sequence operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    #[error("Invalid boundary type: '{0}' (expected one of \"[)\", \"(]\", \"()\", \"[]\")")]
    InvalidBoundary(String),

    #[error("Invalid interval order: start {start} must not be after end {end}")]
    InvalidIntervalOrder { start: String, end: String },

    #[error("Both intervals must overlap")]
    NonOverlappingIntervals,

    #[error("Both intervals must not overlap")]
    OverlappingIntervals,

    #[error("Both intervals are identical, there is nothing to diff")]
    IdenticalIntervals,

    #[error("Invalid duration direction: {0}")]
    InvalidDurationDirection(String),

    #[error("Type mismatch at key {key}: {reason}")]
    TypeMismatch { key: String, reason: String },

    #[error("At least one interval is required")]
    EmptyArguments,

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PeriodError {
    pub(crate) fn invalid_order<T: std::fmt::Debug>(start: &T, end: &T) -> Self {
        PeriodError::InvalidIntervalOrder {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        }
    }
}
