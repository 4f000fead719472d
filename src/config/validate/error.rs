//! Validation error types
//!
//! Defines all validation error variants for pipeline configurations.

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid test size: {0} (must be > 0.0 and < 1.0)")]
    InvalidTestSize(f64),

    #[error("Invalid n_estimators: {0} (must be > 0)")]
    InvalidEstimators(usize),

    #[error("Invalid min_samples_split: {0} (must be >= 2)")]
    InvalidMinSamplesSplit(usize),

    #[error("Invalid min_samples_leaf: {0} (must be > 0)")]
    InvalidMinSamplesLeaf(usize),

    #[error("Invalid max_depth: {0} (must be > 0 when set)")]
    InvalidMaxDepth(usize),

    #[error("Invalid max_features count: {0} (must be > 0)")]
    InvalidMaxFeatures(usize),

    #[error("Invalid reward count: {got} (one reward per label, expected {expected})")]
    InvalidRewardCount { got: usize, expected: usize },

    #[error("Invalid reward at index {index}: {value} (must be finite)")]
    NonFiniteReward { index: usize, value: f64 },

    #[error("Invalid penalty: {0} (must be finite)")]
    NonFinitePenalty(f64),

    #[error("Dataset path does not exist: {0}")]
    DatasetNotFound(String),
}
