//! Dataset provider
//!
//! Supplies the labelled candidate table the classifier is trained on:
//! - the built-in 40-row synthetic table ([`Dataset::candidates`])
//! - JSON or YAML files with the same row shape ([`Dataset::from_path`])
//! - seeded train/test splitting ([`train_test_split`])

mod candidates;
mod sample;
mod split;

#[cfg(test)]
mod tests;

pub use candidates::N_CANDIDATES;
pub use sample::{Admission, CandidateFeatures, Feature, Sample, N_FEATURES};
pub use split::train_test_split;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An ordered, immutable table of labelled candidates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// The built-in synthetic candidate table.
    pub fn candidates() -> Self {
        Self::new(candidates::candidate_samples())
    }

    /// Load rows from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::DatasetNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read dataset {}: {e}", path.display()))
        })?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let dataset: Self = match extension.to_lowercase().as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| {
                Error::ConfigError(format!("Failed to parse JSON dataset {}: {e}", path.display()))
            })?,
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| {
                Error::ConfigError(format!("Failed to parse YAML dataset {}: {e}", path.display()))
            })?,
            other => {
                return Err(Error::ConfigError(format!(
                    "Unsupported dataset extension '{other}' for {} (expected json, yaml or yml)",
                    path.display()
                )))
            }
        };

        if dataset.is_empty() {
            return Err(Error::InsufficientData(format!(
                "dataset {} contains no rows",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), rows = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Row-major feature matrix in [`Feature::ALL`] column order.
    pub fn feature_matrix(&self) -> Vec<Vec<f64>> {
        self.samples.iter().map(|s| s.features.to_vec()).collect()
    }

    /// Labels in row order.
    pub fn labels(&self) -> Vec<Admission> {
        self.samples.iter().map(|s| s.label).collect()
    }

    /// Number of rows carrying each label, in class-index order.
    pub fn class_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for sample in &self.samples {
            counts[sample.label.index()] += 1;
        }
        counts
    }

    /// New dataset made of the rows at `indices`, in that order.
    pub(crate) fn select(&self, indices: &[usize]) -> Self {
        Self::new(indices.iter().map(|&i| self.samples[i]).collect())
    }
}

impl FromIterator<Sample> for Dataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
