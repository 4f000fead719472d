//! Evaluate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{
    apply_overrides, load_dataset, load_or_default, validate_config, EvaluateArgs, OutputFormat,
};
use crate::data::{Admission, Feature};
use crate::pipeline::{self, PipelineReport};
use crate::render::{confusion_heatmap, importance_chart};

/// Format a pipeline report as terminal text
pub fn format_report(report: &PipelineReport) -> String {
    let names: Vec<&str> = Admission::ALL.iter().map(|a| a.name()).collect();
    let importances: Vec<(Feature, f64)> =
        report.importances.iter().map(|fi| (fi.feature, fi.importance)).collect();

    let lines = [
        format!(
            "Split: {} train / {} test (test_size={}, seed={})",
            report.n_train, report.n_test, report.test_size, report.seed
        ),
        String::new(),
        "Classification report:".to_string(),
        report.evaluation.report.clone(),
        format!("Accuracy: {:.2}", report.evaluation.accuracy),
        String::new(),
        "Confusion matrix:".to_string(),
        confusion_heatmap(&report.evaluation.confusion, &names),
        importance_chart(&importances),
        format!(
            "Economic impact: {} ({} correct, {} misclassified)",
            report.impact, report.impact.correct, report.impact.misclassified
        ),
    ];
    lines.join("\n")
}

pub fn run_evaluate(args: EvaluateArgs, level: LogLevel) -> Result<(), String> {
    let mut config =
        load_or_default(args.config.as_deref()).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut config, &args);
    validate_config(&config).map_err(|e| format!("Validation failed: {e}"))?;

    let dataset = load_dataset(&config).map_err(|e| format!("Dataset error: {e}"))?;
    log(
        level,
        LogLevel::Verbose,
        &format!("Loaded {} candidates", dataset.len()),
    );

    let report = pipeline::run(&dataset, &config).map_err(|e| format!("Evaluation error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Valorar: admission classifier evaluation");
            println!();
            println!("{}", format_report(&report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&report)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
