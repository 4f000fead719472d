//! Multi-class classification metrics

use super::average::Average;
use super::confusion::ConfusionMatrix;
use serde::Serialize;

/// Multi-class classification metrics
///
/// Division by zero (a class never predicted, or never present) yields 0.0,
/// as scikit-learn does with `zero_division=0`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MultiClassMetrics {
    /// Per-class precision
    pub precision: Vec<f64>,
    /// Per-class recall
    pub recall: Vec<f64>,
    /// Per-class F1 score
    pub f1: Vec<f64>,
    /// Per-class support (count)
    pub support: Vec<usize>,
    /// Number of classes
    pub n_classes: usize,
    /// Globally pooled precision (sum TP / sum predicted)
    micro_precision: f64,
    /// Globally pooled recall (sum TP / sum actual)
    micro_recall: f64,
}

fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

fn harmonic(p: f64, r: f64) -> f64 {
    if p + r > 0.0 {
        2.0 * p * r / (p + r)
    } else {
        0.0
    }
}

impl MultiClassMetrics {
    /// Compute metrics from confusion matrix
    pub fn from_confusion_matrix(cm: &ConfusionMatrix) -> Self {
        let n_classes = cm.n_classes();
        let mut precision = Vec::with_capacity(n_classes);
        let mut recall = Vec::with_capacity(n_classes);
        let mut f1 = Vec::with_capacity(n_classes);
        let mut support = Vec::with_capacity(n_classes);
        let (mut tp_sum, mut fp_sum, mut fn_sum) = (0.0, 0.0, 0.0);

        for class in 0..n_classes {
            let tp = cm.true_positives(class) as f64;
            let fp = cm.false_positives(class) as f64;
            let fn_ = cm.false_negatives(class) as f64;
            tp_sum += tp;
            fp_sum += fp;
            fn_sum += fn_;

            let p = ratio(tp, tp + fp);
            let r = ratio(tp, tp + fn_);

            precision.push(p);
            recall.push(r);
            f1.push(harmonic(p, r));
            support.push(cm.support(class));
        }

        Self {
            precision,
            recall,
            f1,
            support,
            n_classes,
            micro_precision: ratio(tp_sum, tp_sum + fp_sum),
            micro_recall: ratio(tp_sum, tp_sum + fn_sum),
        }
    }

    /// Get averaged precision
    pub fn precision_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => self.micro_precision,
            _ => self.average_metric(&self.precision, average),
        }
    }

    /// Get averaged recall
    pub fn recall_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => self.micro_recall,
            _ => self.average_metric(&self.recall, average),
        }
    }

    /// Get averaged F1
    pub fn f1_avg(&self, average: Average) -> f64 {
        match average {
            Average::Micro => harmonic(self.micro_precision, self.micro_recall),
            _ => self.average_metric(&self.f1, average),
        }
    }

    fn average_metric(&self, values: &[f64], average: Average) -> f64 {
        match average {
            Average::Macro | Average::Micro => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
            Average::Weighted => {
                let total_support: usize = self.support.iter().sum();
                if total_support == 0 {
                    return 0.0;
                }
                values
                    .iter()
                    .zip(self.support.iter())
                    .map(|(&v, &s)| v * s as f64)
                    .sum::<f64>()
                    / total_support as f64
            }
        }
    }
}
