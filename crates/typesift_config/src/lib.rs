//! Parsing and validation of `typesift.toml` configuration files.
//!
//! The configuration is optional: when no file is present, [`Config::default`]
//! applies. It controls the output format and the default baseline report.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
