//! Configuration: YAML schema, loading, validation and the CLI surface

pub mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, CountMatrix, DatasetArgs, EvaluateArgs,
    ImpactArgs, InitArgs, OutputFormat, PredictArgs, ValidateArgs,
};
pub use loader::{load_config, load_dataset, load_or_default, to_yaml};
pub use schema::{DataConfig, SplitConfig, ValorarConfig};
pub use validate::{validate_config, ValidationError};
