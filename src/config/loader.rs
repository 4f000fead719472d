//! Loading configuration and the dataset it points at

use super::schema::ValorarConfig;
use super::validate::validate_config;
use crate::data::Dataset;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read, parse and validate a YAML configuration file.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ValorarConfig> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let config: ValorarConfig = serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;

    validate_config(&config).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;

    Ok(config)
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<ValorarConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ValorarConfig::default()),
    }
}

/// The dataset named by the config, or the built-in candidate table.
pub fn load_dataset(config: &ValorarConfig) -> Result<Dataset> {
    match &config.data.path {
        Some(path) => Dataset::from_path(path),
        None => Ok(Dataset::candidates()),
    }
}

/// Serialise a configuration as YAML.
pub fn to_yaml(config: &ValorarConfig) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}
