//! Error type shared by every operation.

/// Errors produced by the descriptive statistics operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// The operation is undefined on an empty sample.
    #[error("operation is undefined on empty input")]
    EmptyInput,

    /// The sample is shorter than the operation requires.
    #[error("need at least {required} values, got {actual}")]
    InsufficientData {
        /// Minimum sample length.
        required: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// NaN or ±∞ in the input.
    #[error("non-finite value at index {index}")]
    NonFinite {
        /// Position of the first offending value.
        index: usize,
    },

    /// Negative or non-finite outlier threshold.
    #[error("outlier threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),

    /// Configuration text could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

/// Result alias for [`StatsError`].
pub type StatsResult<T> = Result<T, StatsError>;
