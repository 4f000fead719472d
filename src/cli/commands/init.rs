//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{to_yaml, InitArgs, ValorarConfig};

/// Default configuration document with a leading comment
pub fn default_config_yaml() -> Result<String, String> {
    let body = to_yaml(&ValorarConfig::default())
        .map_err(|e| format!("YAML serialization error: {e}"))?;
    Ok(format!("# valorar pipeline configuration\n{body}"))
}

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let yaml = default_config_yaml()?;

    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            std::fs::write(path, &yaml)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote default configuration to {}", path.display()),
            );
        }
        None => print!("{yaml}"),
    }

    Ok(())
}
