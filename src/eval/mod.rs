//! Model evaluation
//!
//! ## Architecture
//!
//! - `classification`: confusion matrix, per-class metrics, reports
//! - `impact`: economic value of the decisions recorded in a confusion matrix
//!
//! ## Example
//!
//! ```
//! use valorar::eval::{ConfusionMatrix, EconomicParameters};
//!
//! let cm = ConfusionMatrix::from_labels(&[0, 1, 2, 2], &[0, 1, 2, 1], Some(&[0, 1, 2]))?;
//! let impact = EconomicParameters::default().evaluate(&cm)?;
//! assert_eq!(impact.value(), 500.0 + 1000.0 + 1500.0 - 300.0);
//! # Ok::<(), valorar::error::ConfigurationError>(())
//! ```

pub mod classification;
pub mod impact;

pub use classification::{
    classification_report, confusion_matrix, Average, ConfusionMatrix, MultiClassMetrics,
};
pub use impact::{economic_impact, format_currency, EconomicImpact, EconomicParameters};
