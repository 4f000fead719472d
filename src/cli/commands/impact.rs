//! Impact command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::ImpactArgs;
use crate::eval::{economic_impact, format_currency, EconomicImpact, EconomicParameters};

/// Format the impact breakdown
pub fn format_impact(impact: &EconomicImpact) -> String {
    [
        format!("  Correct: {} ({})", impact.correct, format_currency(impact.correct_value)),
        format!(
            "  Misclassified: {} ({})",
            impact.misclassified,
            format_currency(impact.penalty_value)
        ),
        format!("  Total: {impact}"),
    ]
    .join("\n")
}

pub fn run_impact(args: ImpactArgs, level: LogLevel) -> Result<(), String> {
    let params = EconomicParameters::new(args.rewards, args.penalty);
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Matrix: {} (rewards={:?}, penalty={})",
            args.matrix, params.rewards, params.penalty
        ),
    );

    let impact = economic_impact(args.matrix.rows(), &params)
        .map_err(|e| format!("Configuration error: {e}"))?;

    log(level, LogLevel::Normal, "Economic impact:");
    if level == LogLevel::Quiet {
        println!("{impact}");
    } else {
        println!("{}", format_impact(&impact));
    }
    Ok(())
}
