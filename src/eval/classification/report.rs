//! Classification report functions

use super::average::Average;
use super::confusion::ConfusionMatrix;
use super::metrics::MultiClassMetrics;
use crate::error::ConfigurationError;

/// Compute confusion matrix from ground truth and predictions
///
/// Axes are the distinct labels of both sequences, ascending.
///
/// # Example
/// ```
/// use valorar::eval::confusion_matrix;
///
/// let y_true = vec![0, 1, 0, 2, 1];
/// let y_pred = vec![0, 1, 1, 2, 0];
/// let cm = confusion_matrix(&y_true, &y_pred).unwrap();
///
/// assert_eq!(cm.get(0, 0), 1);  // True 0, predicted 0
/// assert_eq!(cm.get(0, 1), 1);  // True 0, predicted 1
/// ```
pub fn confusion_matrix(
    y_true: &[usize],
    y_pred: &[usize],
) -> Result<ConfusionMatrix, ConfigurationError> {
    ConfusionMatrix::from_labels(y_true, y_pred, None)
}

/// Generate a scikit-learn style classification report
///
/// `target_names` labels the per-class rows; when absent (or of the wrong
/// length) the numeric label is used.
pub fn classification_report(cm: &ConfusionMatrix, target_names: Option<&[&str]>) -> String {
    let metrics = MultiClassMetrics::from_confusion_matrix(cm);
    let names: Vec<String> = match target_names {
        Some(names) if names.len() == cm.n_classes() => {
            names.iter().map(|s| (*s).to_string()).collect()
        }
        _ => cm.labels().iter().map(ToString::to_string).collect(),
    };

    let width = names.iter().map(String::len).chain(["weighted avg".len()]).max().unwrap_or(12);
    let total_support: usize = metrics.support.iter().sum();
    let mut report = String::new();

    // Header
    report.push_str(&format!(
        "{:>width$} {:>10} {:>10} {:>10} {:>10}\n\n",
        "", "precision", "recall", "f1-score", "support"
    ));

    // Per-class metrics
    for (class, name) in names.iter().enumerate() {
        report.push_str(&format!(
            "{:>width$} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            name,
            metrics.precision[class],
            metrics.recall[class],
            metrics.f1[class],
            metrics.support[class]
        ));
    }
    report.push('\n');

    report.push_str(&format!(
        "{:>width$} {:>10} {:>10} {:>10.2} {:>10}\n",
        "accuracy",
        "",
        "",
        cm.accuracy(),
        total_support
    ));

    for (label, average) in [("macro avg", Average::Macro), ("weighted avg", Average::Weighted)] {
        report.push_str(&format!(
            "{:>width$} {:>10.2} {:>10.2} {:>10.2} {:>10}\n",
            label,
            metrics.precision_avg(average),
            metrics.recall_avg(average),
            metrics.f1_avg(average),
            total_support
        ));
    }

    report
}
