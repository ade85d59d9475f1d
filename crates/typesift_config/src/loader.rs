//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::Config;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "typesift.toml";

/// Loads `<dir>/typesift.toml`, falling back to defaults when it does not exist.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Ok(Config::default());
    }
    load_config_file(&config_path)
}

/// Loads and validates the configuration file at `path`.
///
/// Unlike [`load_config`], a missing file is an error.
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a `typesift.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configured values are usable.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if let Some(baseline) = &config.diff.baseline {
        if baseline.as_os_str().is_empty() {
            return Err(ConfigError::EmptyBaseline);
        }
    }
    Ok(())
}
