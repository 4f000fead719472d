//! Random forest classifier
//!
//! Bagged CART trees with per-split feature sub-sampling. Every random draw
//! (bootstrap rows, candidate features) comes from one `StdRng` seeded with
//! the forest seed, so a given seed and training table always produce the
//! same forest.

use super::params::ForestParams;
use super::tree::{argmax, DecisionTree};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random forest over any ordered label type.
///
/// Predictions can only ever be labels seen during `fit`.
#[derive(Debug, Clone)]
pub struct RandomForest<L> {
    params: ForestParams,
    seed: u64,
    classes: Vec<L>,
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl<L: Copy + Ord> RandomForest<L> {
    /// Create an unfitted forest.
    pub fn new(params: ForestParams) -> Self {
        Self {
            params,
            seed: 0,
            classes: Vec::new(),
            trees: Vec::new(),
            n_features: 0,
        }
    }

    /// Set the random seed for bootstrap and feature sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Fit the forest on row-major features `x` and labels `y`.
    pub fn fit(&mut self, x: &[Vec<f64>], y: &[L]) -> Result<()> {
        self.params.validate()?;

        if x.is_empty() {
            return Err(Error::InsufficientData("cannot fit a forest on zero rows".into()));
        }
        if x.len() != y.len() {
            return Err(Error::InvalidParameter(format!(
                "features have {} rows but labels have {}",
                x.len(),
                y.len()
            )));
        }
        let n_features = x[0].len();
        if n_features == 0 {
            return Err(Error::InvalidParameter("feature rows are empty".into()));
        }
        if let Some(row) = x.iter().position(|r| r.len() != n_features) {
            return Err(Error::InvalidParameter(format!(
                "row {row} has {} features, expected {n_features}",
                x[row].len()
            )));
        }
        if x.iter().flatten().any(|v| !v.is_finite()) {
            return Err(Error::InvalidParameter("features must be finite".into()));
        }

        let mut classes: Vec<L> = y.to_vec();
        classes.sort();
        classes.dedup();
        // Dense class indices; binary_search cannot miss, every label is in `classes`.
        let y_idx: Vec<usize> =
            y.iter().map(|l| classes.binary_search(l).unwrap_or_default()).collect();

        let n_samples = x.len();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut trees = Vec::with_capacity(self.params.n_estimators);

        for _ in 0..self.params.n_estimators {
            let mut tree_rng = StdRng::seed_from_u64(rng.random::<u64>());
            let indices: Vec<usize> = if self.params.bootstrap {
                (0..n_samples).map(|_| tree_rng.random_range(0..n_samples)).collect()
            } else {
                (0..n_samples).collect()
            };
            trees.push(DecisionTree::grow(
                x,
                &y_idx,
                indices,
                classes.len(),
                &self.params,
                &mut tree_rng,
            ));
        }

        tracing::debug!(
            seed = self.seed,
            n_trees = trees.len(),
            n_samples,
            n_classes = classes.len(),
            "fitted random forest"
        );

        self.classes = classes;
        self.trees = trees;
        self.n_features = n_features;
        Ok(())
    }

    /// Whether `fit` has completed.
    pub fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }

    fn check_input(&self, features: &[f64]) -> Result<()> {
        if !self.is_fitted() {
            return Err(Error::InvalidParameter("forest has not been fitted".into()));
        }
        if features.len() != self.n_features {
            return Err(Error::InvalidParameter(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }
        Ok(())
    }

    /// Mean class distribution over all trees, aligned with [`Self::classes`].
    pub fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>> {
        self.check_input(features)?;
        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (p, t) in proba.iter_mut().zip(tree.predict_proba(features)) {
                *p += t;
            }
        }
        let n_trees = self.trees.len() as f64;
        for p in &mut proba {
            *p /= n_trees;
        }
        Ok(proba)
    }

    /// Most probable label (soft vote); ties go to the lowest label.
    pub fn predict(&self, features: &[f64]) -> Result<L> {
        let proba = self.predict_proba(features)?;
        Ok(self.classes[argmax(&proba)])
    }

    /// Predict every row of `x`.
    pub fn predict_batch(&self, x: &[Vec<f64>]) -> Result<Vec<L>> {
        x.iter().map(|row| self.predict(row)).collect()
    }

    /// Mean decrease in impurity per feature, summing to 1.0.
    ///
    /// Trees that never split are left out of the average. If no tree split
    /// at all, every feature gets the same share.
    pub fn feature_importances(&self) -> Vec<f64> {
        let mut total = vec![0.0; self.n_features];
        let mut contributing = 0usize;
        for tree in self.trees.iter().filter(|t| t.has_splits()) {
            for (acc, imp) in total.iter_mut().zip(tree.feature_importances()) {
                *acc += imp;
            }
            contributing += 1;
        }

        let sum: f64 = total.iter().sum();
        if contributing == 0 || sum <= 0.0 {
            let share = 1.0 / self.n_features.max(1) as f64;
            return vec![share; self.n_features];
        }
        total.iter().map(|v| v / sum).collect()
    }

    /// Labels seen during training, ascending.
    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
