//! Configuration validation logic
//!
//! Validates pipeline configurations for correctness before execution.

use super::error::ValidationError;
use crate::config::schema::ValorarConfig;
use crate::data::Admission;
use crate::forest::MaxFeatures;

/// Validate a pipeline configuration
///
/// Checks:
/// - The dataset path exists, if one is given
/// - Numeric values are in valid ranges
/// - One finite reward per admission label
pub fn validate_config(config: &ValorarConfig) -> Result<(), ValidationError> {
    if let Some(path) = &config.data.path {
        if !path.exists() {
            return Err(ValidationError::DatasetNotFound(path.display().to_string()));
        }
    }

    let test_size = config.split.test_size;
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(ValidationError::InvalidTestSize(test_size));
    }

    let forest = &config.forest;
    if forest.n_estimators == 0 {
        return Err(ValidationError::InvalidEstimators(forest.n_estimators));
    }
    if forest.min_samples_split < 2 {
        return Err(ValidationError::InvalidMinSamplesSplit(forest.min_samples_split));
    }
    if forest.min_samples_leaf == 0 {
        return Err(ValidationError::InvalidMinSamplesLeaf(forest.min_samples_leaf));
    }
    if let Some(depth @ 0) = forest.max_depth {
        return Err(ValidationError::InvalidMaxDepth(depth));
    }
    if let MaxFeatures::Count(k @ 0) = forest.max_features {
        return Err(ValidationError::InvalidMaxFeatures(k));
    }

    let economics = &config.economics;
    if economics.rewards.len() != Admission::ALL.len() {
        return Err(ValidationError::InvalidRewardCount {
            got: economics.rewards.len(),
            expected: Admission::ALL.len(),
        });
    }
    if let Some((index, &value)) =
        economics.rewards.iter().enumerate().find(|(_, v)| !v.is_finite())
    {
        return Err(ValidationError::NonFiniteReward { index, value });
    }
    if !economics.penalty.is_finite() {
        return Err(ValidationError::NonFinitePenalty(economics.penalty));
    }

    Ok(())
}
