//! Economic impact scoring
//!
//! Turns a confusion matrix plus a reward-per-label vector and a flat
//! misclassification penalty into one signed value.

mod calculator;
mod currency;

#[cfg(test)]
mod tests;

pub use calculator::{economic_impact, EconomicImpact, EconomicParameters};
pub use currency::format_currency;
