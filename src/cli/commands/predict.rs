//! Predict command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_dataset, load_or_default, PredictArgs};
use crate::data::{train_test_split, CandidateFeatures};
use crate::pipeline::{self, Prediction};

/// Format a prediction with its per-label vote shares
pub fn format_prediction(prediction: &Prediction) -> String {
    let mut lines = vec![prediction.message().to_string()];
    for (label, share) in &prediction.probabilities {
        lines.push(format!("  {label:<10} {share:.2}"));
    }
    lines.join("\n")
}

pub fn run_predict(args: PredictArgs, level: LogLevel) -> Result<(), String> {
    let mut config =
        load_or_default(args.config.as_deref()).map_err(|e| format!("Config error: {e}"))?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let features = CandidateFeatures::new(args.exam, args.psychometric, args.experience, args.age);
    features.check_ranges().map_err(|e| format!("Input error: {e}"))?;

    let dataset = load_dataset(&config).map_err(|e| format!("Dataset error: {e}"))?;
    let (train_set, _) = train_test_split(&dataset, config.split.test_size, config.seed)
        .map_err(|e| format!("Split error: {e}"))?;
    let model = pipeline::train(&train_set, &config.forest, config.seed)
        .map_err(|e| format!("Training error: {e}"))?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Trained on {} candidates (seed={}): exam={}, psychometric={}, experience={}, age={}",
            model.n_train(),
            config.seed,
            features.exam_score,
            features.psychometric,
            features.work_experience,
            features.age
        ),
    );

    let prediction =
        pipeline::predict(&model, &features).map_err(|e| format!("Prediction error: {e}"))?;

    if level == LogLevel::Verbose {
        println!("{}", format_prediction(&prediction));
    } else {
        println!("{}", prediction.message());
    }
    Ok(())
}
