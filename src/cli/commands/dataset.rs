//! Dataset command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_dataset, load_or_default, DatasetArgs, OutputFormat};
use crate::data::Admission;
use crate::render::dataset_table;

pub fn run_dataset(args: DatasetArgs, level: LogLevel) -> Result<(), String> {
    let config =
        load_or_default(args.config.as_deref()).map_err(|e| format!("Config error: {e}"))?;
    let dataset = load_dataset(&config).map_err(|e| format!("Dataset error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            let counts = dataset.class_counts();
            let summary: Vec<String> = Admission::ALL
                .iter()
                .map(|a| format!("{}={}", a.name(), counts[a.index()]))
                .collect();
            log(
                level,
                LogLevel::Normal,
                &format!("{} candidates ({})", dataset.len(), summary.join(", ")),
            );
            println!("{}", dataset_table(&dataset));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&dataset)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&dataset)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
