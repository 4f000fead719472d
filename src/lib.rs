//! Valorar: admission classifier evaluation and economic impact
//!
//! Trains a seeded random forest on a labelled candidate table, evaluates it
//! on a held-out split, and turns the resulting confusion matrix into a single
//! signed economic figure.
//!
//! # Modules
//!
//! - [`data`]: the built-in candidate table, dataset files, seeded splitting
//! - [`forest`]: random forest classifier (CART trees, Gini impurity)
//! - [`eval`]: confusion matrix, classification metrics, economic impact
//! - [`pipeline`]: `train` / `predict` / `evaluate` / `run` over explicit values
//! - [`render`]: terminal table, heat map and bar chart
//! - [`config`]: YAML configuration, validation and CLI arguments
//! - [`cli`]: command handlers behind the `valorar` binary
//!
//! # Logging
//!
//! Library code emits `tracing` events (`debug!` for split, training,
//! evaluation and impact). The `valorar` binary installs a subscriber on
//! stderr that honours `RUST_LOG`.
//!
//! # Example
//!
//! ```
//! use valorar::eval::{economic_impact, EconomicParameters};
//!
//! let matrix = [[5_i64, 0, 0], [1, 3, 0], [0, 2, 9]];
//! let impact = economic_impact(&matrix, &EconomicParameters::default())?;
//! assert_eq!(impact.value(), 18_100.0);
//! assert_eq!(impact.to_string(), "$18,100.00");
//! # Ok::<(), valorar::error::ConfigurationError>(())
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod eval;
pub mod forest;
pub mod pipeline;
pub mod render;

pub use error::{ConfigurationError, Error, Result};
