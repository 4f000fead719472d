//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_config, ValidateArgs, ValorarConfig};
use crate::eval::format_currency;
use crate::forest::MaxFeatures;

/// Format split and data settings as a string
pub fn format_data_info(config: &ValorarConfig) -> String {
    let source = config
        .data
        .path
        .as_ref()
        .map_or_else(|| "built-in candidate table".to_string(), |p| p.display().to_string());
    [
        format!("  Dataset: {source}"),
        format!("  Test size: {}", config.split.test_size),
        format!("  Seed: {}", config.seed),
    ]
    .join("\n")
}

/// Format forest hyperparameters as a string
pub fn format_forest_info(config: &ValorarConfig) -> String {
    let forest = &config.forest;
    let max_features = match forest.max_features {
        MaxFeatures::Sqrt => "sqrt".to_string(),
        MaxFeatures::Log2 => "log2".to_string(),
        MaxFeatures::All => "all".to_string(),
        MaxFeatures::Count(k) => k.to_string(),
    };
    let mut lines = vec![
        format!("  Trees: {}", forest.n_estimators),
        format!("  Max features: {max_features}"),
        format!("  Min samples split/leaf: {}/{}", forest.min_samples_split, forest.min_samples_leaf),
        format!("  Bootstrap: {}", forest.bootstrap),
    ];
    if let Some(depth) = forest.max_depth {
        lines.push(format!("  Max depth: {depth}"));
    }
    lines.join("\n")
}

/// Format the reward scheme as a string
pub fn format_economics_info(config: &ValorarConfig) -> String {
    let rewards: Vec<String> = config.economics.rewards.iter().map(|r| format_currency(*r)).collect();
    [
        format!("  Rewards: {}", rewards.join(", ")),
        format!("  Penalty: {}", format_currency(config.economics.penalty)),
    ]
    .join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(config: &ValorarConfig) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_data_info(config));
    println!();
    println!("{}", format_forest_info(config));
    println!();
    println!("{}", format_economics_info(config));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_config(&args.config).map_err(|e| format!("Config error: {e}"))?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&config);
    }

    Ok(())
}
