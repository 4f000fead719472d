//! Random forest hyperparameters

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of features considered when looking for the best split at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFeatures {
    /// `floor(sqrt(n_features))`, at least one
    #[default]
    Sqrt,
    /// `floor(log2(n_features))`, at least one
    Log2,
    /// Every feature
    All,
    /// A fixed count, capped at `n_features`
    Count(usize),
}

impl MaxFeatures {
    /// Resolve to a concrete count for a table with `n_features` columns.
    pub fn resolve(self, n_features: usize) -> usize {
        let k = match self {
            Self::Sqrt => (n_features as f64).sqrt().floor() as usize,
            Self::Log2 => (n_features as f64).log2().floor() as usize,
            Self::All => n_features,
            Self::Count(k) => k,
        };
        k.clamp(1, n_features.max(1))
    }
}

/// Forest shape and tree-growing limits.
///
/// Defaults match a stock scikit-learn `RandomForestClassifier`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestParams {
    /// Number of trees
    pub n_estimators: usize,
    /// Maximum depth; `None` grows until leaves are pure or too small
    pub max_depth: Option<usize>,
    /// Minimum samples required to split a node
    pub min_samples_split: usize,
    /// Minimum samples required in each child of a split
    pub min_samples_leaf: usize,
    /// Features examined per split
    pub max_features: MaxFeatures,
    /// Train each tree on a bootstrap resample
    pub bootstrap: bool,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::Sqrt,
            bootstrap: true,
        }
    }
}

impl ForestParams {
    /// Reject parameter combinations that cannot grow a forest.
    pub fn validate(&self) -> Result<()> {
        if self.n_estimators == 0 {
            return Err(Error::InvalidParameter("n_estimators must be > 0".into()));
        }
        if self.min_samples_split < 2 {
            return Err(Error::InvalidParameter(format!(
                "min_samples_split must be >= 2, got {}",
                self.min_samples_split
            )));
        }
        if self.min_samples_leaf == 0 {
            return Err(Error::InvalidParameter("min_samples_leaf must be > 0".into()));
        }
        if self.max_depth == Some(0) {
            return Err(Error::InvalidParameter("max_depth must be > 0 when set".into()));
        }
        if self.max_features == MaxFeatures::Count(0) {
            return Err(Error::InvalidParameter("max_features count must be > 0".into()));
        }
        Ok(())
    }
}
