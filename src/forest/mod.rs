//! Classifier service
//!
//! A seeded random forest classifier:
//! - `fit` on a row-major feature table and a label slice
//! - `predict` / `predict_proba` for single rows, `predict_batch` for tables
//! - `feature_importances` as mean decrease in Gini impurity

mod params;
mod random_forest;
mod tree;


pub use params::{ForestParams, MaxFeatures};
pub use random_forest::RandomForest;
pub use tree::{DecisionTree, TreeNode};
