//! Admission pipeline
//!
//! Explicit-value composition of the dataset, classifier and evaluators:
//!
//! ```text
//! Dataset → train_test_split → train → evaluate → EconomicParameters::evaluate
//! ```
//!
//! Nothing is cached between calls; each function takes everything it needs
//! as arguments.
//!
//! ## Example
//!
//! ```
//! use valorar::config::ValorarConfig;
//! use valorar::data::Dataset;
//! use valorar::pipeline;
//!
//! let mut config = ValorarConfig::default();
//! config.forest.n_estimators = 10;
//! let report = pipeline::run(&Dataset::candidates(), &config)?;
//! assert_eq!(report.n_test, 10);
//! assert_eq!(report.evaluation.confusion.total(), 10);
//! # Ok::<(), valorar::error::Error>(())
//! ```

mod evaluation;
mod model;
mod report;


pub use evaluation::{evaluate, Evaluation};
pub use model::{predict, train, Prediction, TrainedModel};
pub use report::{run, FeatureImportance, PipelineReport};
