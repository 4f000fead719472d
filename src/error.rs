//! Error types for valorar
//!
//! `ConfigurationError` names the exact precondition a computation rejected.
//! `Error` is the crate-wide error that wraps it alongside file, parse and
//! parameter failures.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for valorar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed input to the confusion-matrix builder, the impact calculator or
/// the dataset split. Raised eagerly, never turned into a default value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("reward vector has {rewards} entries but the matrix has {labels} labels")]
    RewardLengthMismatch { rewards: usize, labels: usize },

    #[error("confusion matrix is not square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix { row: usize, len: usize, expected: usize },

    #[error("confusion matrix entry ({row}, {col}) is negative: {value}")]
    NegativeEntry { row: usize, col: usize, value: i64 },

    #[error("misclassified count is negative: total {total}, correct {correct}")]
    NegativeMisclassified { total: i64, correct: i64 },

    #[error("label sequences differ in length: {actual} actual vs {predicted} predicted")]
    LabelLengthMismatch { actual: usize, predicted: usize },

    #[error("unknown admission label {0} (expected 0, 1 or 2)")]
    UnknownLabel(i64),

    #[error("label {label} is not in the fixed label set {labels:?}")]
    LabelNotInSet { label: usize, labels: Vec<usize> },

    #[error("test size {0} must be strictly between 0 and 1")]
    InvalidTestSize(f64),

    #[error("split of {n_samples} samples at test size {test_size} leaves an empty {side} set")]
    EmptySplit { n_samples: usize, test_size: f64, side: &'static str },

    #[error("confusion matrix count {0} does not fit in a signed 64-bit integer")]
    CountOverflow(usize),

    #[error("confusion matrix counts overflow a signed 64-bit sum at entry ({row}, {col})")]
    SumOverflow { row: usize, col: usize },
}

/// Crate-wide error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    InvalidRange { field: &'static str, value: f64, min: f64, max: f64 },

    #[error("Dataset file not found: {0}")]
    DatasetNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Whether the error stems from user-supplied input rather than an
    /// environment failure.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Serialization(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
