//! Valorar CLI
//!
//! # Usage
//!
//! ```bash
//! # Evaluate the classifier on the built-in candidate table
//! valorar evaluate
//!
//! # Evaluate with overrides, as JSON
//! valorar evaluate --seed 7 --test-size 0.3 --penalty -250 --format json
//!
//! # Classify one candidate
//! valorar predict --exam 720 --psychometric 85 --experience 6 --age 31
//!
//! # Price an existing confusion matrix
//! valorar impact --matrix "5,0,0;1,3,0;0,2,9"
//!
//! # Write and check a configuration file
//! valorar init --output valorar.yaml
//! valorar validate valorar.yaml --detailed
//! ```

use clap::Parser;
use std::process::ExitCode;
use valorar::cli::{run_command, Cli, LogLevel};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = LogLevel::from_flags(cli.quiet, cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.tracing_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
