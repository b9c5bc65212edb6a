use bevy::prelude::*;
use std::path::Path;

use super::FlightConfig;
use crate::utils::ConfigError;

impl FlightConfig {
    /// Loads and validates a configuration file.
    ///
    /// The format is picked from the extension: `.yaml`/`.yml` or `.json`.
    /// Fields missing from the file keep their `Classic` values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let contents = std::fs::read_to_string(path)?;
        debug!("Loading flight config from {}", path.display());

        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&contents),
            "json" => Self::from_json_str(&contents),
            other => Err(ConfigError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: FlightConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: FlightConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}
