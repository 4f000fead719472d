//! CLI command implementations

mod dataset;
mod evaluate;
mod impact;
mod init;
mod predict;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Evaluate(args) => evaluate::run_evaluate(args, log_level),
        Command::Predict(args) => predict::run_predict(args, log_level),
        Command::Impact(args) => impact::run_impact(args, log_level),
        Command::Dataset(args) => dataset::run_dataset(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Init(args) => init::run_init(args, log_level),
    }
}
