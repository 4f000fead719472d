//! Held-out evaluation of a trained model

use super::model::TrainedModel;
use crate::data::{Admission, Dataset};
use crate::error::{Error, Result};
use crate::eval::{classification_report, ConfusionMatrix, MultiClassMetrics};
use serde::Serialize;

/// Classification quality on a test split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Actual × predicted counts over the labels {0, 1, 2}
    pub confusion: ConfusionMatrix,
    pub metrics: MultiClassMetrics,
    pub accuracy: f64,
    /// Text classification report with per-label rows
    pub report: String,
}

/// Predict every test row and cross-tabulate against the true labels.
///
/// The matrix always has one row and column per [`Admission`] label, even
/// when a label is missing from this split.
pub fn evaluate(model: &TrainedModel, test_set: &Dataset) -> Result<Evaluation> {
    if test_set.is_empty() {
        return Err(Error::InsufficientData("cannot evaluate on an empty test set".into()));
    }

    let predicted = model.forest().predict_batch(&test_set.feature_matrix())?;
    let y_true: Vec<usize> = test_set.labels().iter().map(|a| a.index()).collect();
    let y_pred: Vec<usize> = predicted.iter().map(|a| a.index()).collect();

    let confusion = ConfusionMatrix::from_labels(&y_true, &y_pred, Some(&Admission::indices()))?;
    let metrics = MultiClassMetrics::from_confusion_matrix(&confusion);
    let names: Vec<&str> = Admission::ALL.iter().map(|a| a.name()).collect();
    let report = classification_report(&confusion, Some(&names));
    let accuracy = confusion.accuracy();

    tracing::debug!(n_test = test_set.len(), accuracy, "evaluated admission classifier");

    Ok(Evaluation { confusion, metrics, accuracy, report })
}
