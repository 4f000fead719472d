//! YAML schema for the evaluation pipeline
//!
//! Every section is optional; missing fields take the values the admission
//! dashboard was built around (seed 0, 25% test split, a stock 100-tree
//! forest, rewards 500/1000/1500 and a -300 penalty).

use crate::eval::EconomicParameters;
use crate::forest::ForestParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete pipeline configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValorarConfig {
    /// Seed shared by the train/test split and the forest
    pub seed: u64,

    /// Train/test split
    pub split: SplitConfig,

    /// Random forest hyperparameters
    pub forest: ForestParams,

    /// Reward/penalty scheme for the impact figure
    pub economics: EconomicParameters,

    /// Candidate table source
    pub data: DataConfig,
}

/// Train/test split configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Fraction of rows held out for evaluation
    pub test_size: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self { test_size: 0.25 }
    }
}

/// Dataset source
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON/YAML candidate table; the built-in table when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
