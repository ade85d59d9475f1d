//! Configuration types deserialized from `typesift.toml`.

use serde::Deserialize;
use std::path::PathBuf;

/// The top-level configuration parsed from `typesift.toml`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// How reports are printed.
    #[serde(default)]
    pub output: OutputConfig,
    /// Settings for `typesift diff`.
    #[serde(default)]
    pub diff: DiffConfig,
}

/// Output settings.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// The output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Whether to prefix text output with the error count.
    #[serde(default = "default_header")]
    pub header: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            header: default_header(),
        }
    }
}

fn default_header() -> bool {
    true
}

/// Output format for rendered reports.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text with source snippets (default).
    #[default]
    Text,
    /// The report in the checker's JSON shape.
    Json,
}

/// Settings for comparing against a baseline report.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DiffConfig {
    /// Path of the baseline report used when none is given on the command line.
    #[serde(default)]
    pub baseline: Option<PathBuf>,
}
