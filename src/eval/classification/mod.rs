//! Classification metrics for model evaluation
//!
//! Provides multi-class classification metrics including:
//! - Confusion matrix construction with a fixed or inferred label set
//! - Per-class precision, recall, F1
//! - Macro, micro, and weighted averaging
//! - scikit-learn style classification reports

mod average;
mod confusion;
mod metrics;
mod report;


pub use average::Average;
pub use confusion::ConfusionMatrix;
pub use metrics::MultiClassMetrics;
pub use report::{classification_report, confusion_matrix};
