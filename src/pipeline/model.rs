//! Training and one-shot prediction

use crate::data::{Admission, CandidateFeatures, Dataset, Feature};
use crate::error::Result;
use crate::forest::{ForestParams, RandomForest};
use serde::Serialize;

/// A fitted admission classifier and the inputs that produced it.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    forest: RandomForest<Admission>,
    n_train: usize,
}

impl TrainedModel {
    /// Underlying forest.
    pub fn forest(&self) -> &RandomForest<Admission> {
        &self.forest
    }

    /// Rows the model was trained on.
    pub fn n_train(&self) -> usize {
        self.n_train
    }

    pub fn seed(&self) -> u64 {
        self.forest.seed()
    }

    /// Feature importances paired with their column, most important first.
    ///
    /// Equal importances keep column order.
    pub fn feature_importances(&self) -> Vec<(Feature, f64)> {
        let mut ranked: Vec<(Feature, f64)> =
            Feature::ALL.into_iter().zip(self.forest.feature_importances()).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}

/// Fit a seeded forest on the training rows.
pub fn train(train_set: &Dataset, params: &ForestParams, seed: u64) -> Result<TrainedModel> {
    let mut forest = RandomForest::new(params.clone()).with_seed(seed);
    forest.fit(&train_set.feature_matrix(), &train_set.labels())?;

    tracing::debug!(
        seed,
        n_train = train_set.len(),
        n_trees = forest.trees().len(),
        "trained admission classifier"
    );

    Ok(TrainedModel { forest, n_train: train_set.len() })
}

/// Outcome of classifying one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub features: CandidateFeatures,
    pub label: Admission,
    /// Soft-vote share per label seen in training, in label order
    pub probabilities: Vec<(Admission, f64)>,
}

impl Prediction {
    /// Sentence to show the user.
    pub fn message(&self) -> &'static str {
        self.label.message()
    }
}

/// Classify a single candidate. Inputs outside the accepted ranges are
/// rejected with [`crate::error::Error::InvalidRange`].
pub fn predict(model: &TrainedModel, features: &CandidateFeatures) -> Result<Prediction> {
    features.check_ranges()?;

    let row = features.to_vec();
    let proba = model.forest.predict_proba(&row)?;
    let label = model.forest.predict(&row)?;
    let probabilities = model.forest.classes().iter().copied().zip(proba).collect();

    Ok(Prediction { features: *features, label, probabilities })
}
