//! End-to-end run: split, train, evaluate, price

use super::evaluation::{evaluate, Evaluation};
use super::model::train;
use crate::config::ValorarConfig;
use crate::data::{train_test_split, Dataset, Feature};
use crate::error::Result;
use crate::eval::{EconomicImpact, EconomicParameters};
use serde::Serialize;

/// Importance of one feature column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: Feature,
    pub importance: f64,
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineReport {
    pub seed: u64,
    pub test_size: f64,
    pub n_train: usize,
    pub n_test: usize,
    pub evaluation: Evaluation,
    /// Most important first
    pub importances: Vec<FeatureImportance>,
    pub economics: EconomicParameters,
    pub impact: EconomicImpact,
}

/// Run the whole pipeline on `dataset` with the split, forest and economics
/// settings of `config`. The config seed drives both the split and the forest.
pub fn run(dataset: &Dataset, config: &ValorarConfig) -> Result<PipelineReport> {
    let (train_set, test_set) = train_test_split(dataset, config.split.test_size, config.seed)?;
    let model = train(&train_set, &config.forest, config.seed)?;
    let evaluation = evaluate(&model, &test_set)?;
    let impact = config.economics.evaluate(&evaluation.confusion)?;

    tracing::debug!(
        correct = impact.correct,
        misclassified = impact.misclassified,
        value = impact.value(),
        "computed economic impact"
    );

    let importances = model
        .feature_importances()
        .into_iter()
        .map(|(feature, importance)| FeatureImportance { feature, importance })
        .collect();

    Ok(PipelineReport {
        seed: config.seed,
        test_size: config.split.test_size,
        n_train: train_set.len(),
        n_test: test_set.len(),
        evaluation,
        importances,
        economics: config.economics.clone(),
        impact,
    })
}
