//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::init::InitArgs;
use super::types::{CountMatrix, OutputFormat};
use crate::config::ValorarConfig;

/// Valorar: admission classifier evaluation and economic impact
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "valorar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Train a seeded admission classifier, evaluate it, and price its decisions"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Split, train, evaluate and report the economic impact
    Evaluate(EvaluateArgs),

    /// Classify a single candidate
    Predict(PredictArgs),

    /// Economic impact of a confusion matrix given inline
    Impact(ImpactArgs),

    /// Print the candidate table
    Dataset(DatasetArgs),

    /// Validate a configuration file
    Validate(ValidateArgs),

    /// Write the default configuration as YAML
    Init(InitArgs),
}

/// Arguments for the evaluate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EvaluateArgs {
    /// Path to YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the held-out fraction
    #[arg(long)]
    pub test_size: Option<f64>,

    /// Override the per-label rewards (comma separated)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub rewards: Option<Vec<f64>>,

    /// Override the misclassification penalty
    #[arg(long, allow_negative_numbers = true)]
    pub penalty: Option<f64>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the predict command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PredictArgs {
    /// Path to YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Admission exam score (0-1000)
    #[arg(long, default_value_t = 500.0, allow_negative_numbers = true)]
    pub exam: f64,

    /// Psychometric score (0-100)
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
    pub psychometric: f64,

    /// Years of work experience (0-10)
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub experience: f64,

    /// Age in years (0-100)
    #[arg(long, default_value_t = 40.0, allow_negative_numbers = true)]
    pub age: f64,

    /// Override the random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the impact command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ImpactArgs {
    /// Confusion matrix, rows separated by ';' and cells by ','
    #[arg(short, long, allow_hyphen_values = true)]
    pub matrix: CountMatrix,

    /// Per-label rewards (comma separated)
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_value = "500,1000,1500"
    )]
    pub rewards: Vec<f64>,

    /// Flat penalty per misclassified sample
    #[arg(long, default_value_t = -300.0, allow_negative_numbers = true)]
    pub penalty: f64,
}

/// Arguments for the dataset command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct DatasetArgs {
    /// Path to YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a configuration
pub fn apply_overrides(config: &mut ValorarConfig, args: &EvaluateArgs) {
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(test_size) = args.test_size {
        config.split.test_size = test_size;
    }
    if let Some(rewards) = &args.rewards {
        config.economics.rewards = rewards.clone();
    }
    if let Some(penalty) = args.penalty {
        config.economics.penalty = penalty;
    }
}
