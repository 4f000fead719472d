//! Economic impact of a classifier's decisions

use super::currency::format_currency;
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reward per correct classification of each label, and a flat penalty per
/// misclassified sample regardless of which labels were confused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicParameters {
    /// `rewards[i]` is the value of correctly classifying label `i`
    pub rewards: Vec<f64>,
    /// Cost per misclassification (conventionally negative)
    pub penalty: f64,
}

impl Default for EconomicParameters {
    fn default() -> Self {
        Self { rewards: vec![500.0, 1000.0, 1500.0], penalty: -300.0 }
    }
}

impl EconomicParameters {
    pub fn new(rewards: Vec<f64>, penalty: f64) -> Self {
        Self { rewards, penalty }
    }

    /// Impact of the decisions summarised by a confusion matrix.
    pub fn evaluate(
        &self,
        cm: &crate::eval::ConfusionMatrix,
    ) -> Result<EconomicImpact, ConfigurationError> {
        economic_impact(&cm.to_signed()?, self)
    }
}

/// Aggregate value of a classifier's decisions on an evaluated sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicImpact {
    /// `correct_value + penalty_value`
    pub value: f64,
    /// Sum of diagonal counts weighted by their rewards
    pub correct_value: f64,
    /// `misclassified * penalty`
    pub penalty_value: f64,
    /// Samples on the diagonal
    pub correct: u64,
    /// Samples off the diagonal
    pub misclassified: u64,
}

impl EconomicImpact {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Total number of evaluated samples
    pub fn total(&self) -> u64 {
        self.correct + self.misclassified
    }
}

impl fmt::Display for EconomicImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_currency(self.value))
    }
}

/// Convert a confusion matrix into one economic-impact figure.
///
/// `matrix[i][j]` counts samples of actual label `i` predicted as `j`.
/// `impact = Σ diag[i] * rewards[i] + (Σ matrix - trace) * penalty`.
///
/// Rejects a non-square matrix, a reward vector whose length differs from
/// the matrix dimension, negative counts, and counts whose sum does not fit
/// in an `i64`. The result is unbounded in both directions.
pub fn economic_impact<R: AsRef<[i64]>>(
    matrix: &[R],
    params: &EconomicParameters,
) -> Result<EconomicImpact, ConfigurationError> {
    let n = matrix.len();
    for (row, r) in matrix.iter().enumerate() {
        let len = r.as_ref().len();
        if len != n {
            return Err(ConfigurationError::NonSquareMatrix { row, len, expected: n });
        }
    }

    if params.rewards.len() != n {
        return Err(ConfigurationError::RewardLengthMismatch {
            rewards: params.rewards.len(),
            labels: n,
        });
    }

    for (row, r) in matrix.iter().enumerate() {
        if let Some((col, &value)) = r.as_ref().iter().enumerate().find(|(_, &v)| v < 0) {
            return Err(ConfigurationError::NegativeEntry { row, col, value });
        }
    }

    let diagonal: Vec<i64> = matrix.iter().enumerate().map(|(i, r)| r.as_ref()[i]).collect();
    let mut correct: i64 = 0;
    for (i, &count) in diagonal.iter().enumerate() {
        correct = correct
            .checked_add(count)
            .ok_or(ConfigurationError::SumOverflow { row: i, col: i })?;
    }
    let mut total: i64 = 0;
    for (row, r) in matrix.iter().enumerate() {
        for (col, &count) in r.as_ref().iter().enumerate() {
            total = total.checked_add(count).ok_or(ConfigurationError::SumOverflow { row, col })?;
        }
    }
    let misclassified = total - correct;
    if misclassified < 0 {
        return Err(ConfigurationError::NegativeMisclassified { total, correct });
    }

    let correct_value: f64 =
        diagonal.iter().zip(&params.rewards).map(|(&count, &reward)| count as f64 * reward).sum();
    let penalty_value = misclassified as f64 * params.penalty;

    Ok(EconomicImpact {
        value: correct_value + penalty_value,
        correct_value,
        penalty_value,
        correct: correct.unsigned_abs(),
        misclassified: misclassified.unsigned_abs(),
    })
}
