//! Terminal rendering
//!
//! Plain-text views of the candidate table, the confusion matrix and the
//! feature importances. Every function returns a `String`; printing is up to
//! the caller.

mod chart;
mod heatmap;
mod table;


pub use chart::{importance_chart, BAR_WIDTH};
pub use heatmap::{confusion_heatmap, SHADES};
pub use table::dataset_table;

pub(crate) const BLOCK_FULL: char = '\u{2588}';
