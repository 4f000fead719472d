//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! valorar evaluate
//! valorar evaluate --config valorar.yaml --seed 7 --format json
//! valorar predict --exam 720 --psychometric 85 --experience 6 --age 31
//! valorar impact --matrix "5,0,0;1,3,0;0,2,9" --rewards 500,1000,1500 --penalty -300
//! valorar validate valorar.yaml --detailed
//! valorar init --output valorar.yaml
//! ```

mod core;
mod init;
mod types;

#[cfg(test)]
mod tests;

pub use self::core::{
    apply_overrides, parse_args, Cli, Command, DatasetArgs, EvaluateArgs, ImpactArgs,
    PredictArgs, ValidateArgs,
};
pub use init::InitArgs;
pub use types::{CountMatrix, OutputFormat};
