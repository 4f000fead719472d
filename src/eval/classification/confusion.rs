//! Confusion matrix for multi-class classification

use crate::error::ConfigurationError;
use serde::Serialize;
use std::fmt;

/// Confusion matrix for multi-class classification
///
/// Element [i][j] counts samples whose actual label is `labels[i]` and whose
/// predicted label is `labels[j]`. Labels are kept in ascending order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// The matrix data: matrix[actual][predicted] = count
    matrix: Vec<Vec<usize>>,
    /// Label value of each row/column
    labels: Vec<usize>,
}

impl ConfusionMatrix {
    /// Cross-tabulate actual against predicted labels.
    ///
    /// With `labels = None` the axes are the distinct labels of both
    /// sequences. With a fixed label set the shape is stable even when a
    /// class is missing from this particular split; a label outside the set
    /// is rejected.
    pub fn from_labels(
        y_true: &[usize],
        y_pred: &[usize],
        labels: Option<&[usize]>,
    ) -> Result<Self, ConfigurationError> {
        if y_true.len() != y_pred.len() {
            return Err(ConfigurationError::LabelLengthMismatch {
                actual: y_true.len(),
                predicted: y_pred.len(),
            });
        }

        let mut axis: Vec<usize> = match labels {
            Some(fixed) => fixed.to_vec(),
            None => y_true.iter().chain(y_pred).copied().collect(),
        };
        axis.sort_unstable();
        axis.dedup();

        let mut cm = Self {
            matrix: vec![vec![0; axis.len()]; axis.len()],
            labels: axis,
        };

        for (&actual, &predicted) in y_true.iter().zip(y_pred) {
            let i = cm.position(actual)?;
            let j = cm.position(predicted)?;
            cm.matrix[i][j] += 1;
        }

        Ok(cm)
    }

    /// Wrap precomputed counts over labels `0..n`.
    pub fn from_counts(matrix: Vec<Vec<usize>>) -> Result<Self, ConfigurationError> {
        let n = matrix.len();
        if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(ConfigurationError::NonSquareMatrix { row, len: r.len(), expected: n });
        }
        Ok(Self { matrix, labels: (0..n).collect() })
    }

    fn position(&self, label: usize) -> Result<usize, ConfigurationError> {
        self.labels
            .binary_search(&label)
            .map_err(|_| ConfigurationError::LabelNotInSet { label, labels: self.labels.clone() })
    }

    /// Get the raw matrix
    pub fn matrix(&self) -> &[Vec<usize>] {
        &self.matrix
    }

    /// Get the class labels
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Get number of classes
    pub fn n_classes(&self) -> usize {
        self.labels.len()
    }

    /// Get element at [actual index][predicted index]
    pub fn get(&self, actual: usize, predicted: usize) -> usize {
        self.matrix[actual][predicted]
    }

    /// Diagonal counts (correct predictions per class)
    pub fn diagonal(&self) -> Vec<usize> {
        (0..self.n_classes()).map(|i| self.matrix[i][i]).collect()
    }

    /// Sum of the diagonal
    pub fn trace(&self) -> usize {
        self.diagonal().iter().sum()
    }

    /// Calculate true positives for a class
    pub fn true_positives(&self, class: usize) -> usize {
        self.matrix[class][class]
    }

    /// Calculate false positives for a class (predicted as class but wasn't)
    pub fn false_positives(&self, class: usize) -> usize {
        (0..self.n_classes()).filter(|&i| i != class).map(|i| self.matrix[i][class]).sum()
    }

    /// Calculate false negatives for a class (was class but predicted differently)
    pub fn false_negatives(&self, class: usize) -> usize {
        (0..self.n_classes()).filter(|&j| j != class).map(|j| self.matrix[class][j]).sum()
    }

    /// Calculate true negatives for a class
    pub fn true_negatives(&self, class: usize) -> usize {
        self.total()
            - self.true_positives(class)
            - self.false_positives(class)
            - self.false_negatives(class)
    }

    /// Calculate support (total true instances) for a class
    pub fn support(&self, class: usize) -> usize {
        self.matrix[class].iter().sum()
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.matrix.iter().flatten().sum()
    }

    /// Number of off-diagonal samples
    pub fn misclassified(&self) -> usize {
        self.total() - self.trace()
    }

    /// Calculate accuracy
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.trace() as f64 / total as f64
    }

    /// Signed copy of the counts, the input shape of the impact calculator.
    pub fn to_signed(&self) -> Result<Vec<Vec<i64>>, ConfigurationError> {
        self.matrix
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| i64::try_from(c).map_err(|_| ConfigurationError::CountOverflow(c)))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Confusion Matrix:")?;

        // Header
        write!(f, "      ")?;
        for label in &self.labels {
            write!(f, "Pred {label} ")?;
        }
        writeln!(f)?;

        // Rows
        for (i, label) in self.labels.iter().enumerate() {
            write!(f, "True {label}")?;
            for j in 0..self.n_classes() {
                write!(f, "{:>6} ", self.matrix[i][j])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
