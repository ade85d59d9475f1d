//! Shared helpers for CLI commands.
//!
//! Report loading, configuration resolution, renderer selection, and output.
//! This is the only place that touches the filesystem; the diagnostics crate
//! works purely on in-memory reports.

use std::io::Read;
use std::path::{Path, PathBuf};

use typesift_config::{Config, OutputFormat};
use typesift_diagnostics::{DiagnosticReport, JsonRenderer, ReportRenderer, TextRenderer};

use crate::{GlobalArgs, OutputArgs};

/// Path argument that stands for standard input.
const STDIN_PATH: &str = "-";

/// Loads a report from a JSON file, or from stdin when `path` is `-`.
pub fn load_report(path: &Path) -> Result<DiagnosticReport, Box<dyn std::error::Error>> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read report {}: {e}", path.display()))?
    };

    let report: DiagnosticReport = serde_json::from_str(&content)
        .map_err(|e| format!("failed to parse report {}: {e}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        errors = report.error_count(),
        version = %report.tool_version,
        "loaded report"
    );
    Ok(report)
}

/// Resolves the configuration from global CLI args.
///
/// If `--config` is specified that file must exist. Otherwise `typesift.toml`
/// in the current directory is used when present, and defaults when not.
pub fn resolve_config(global: &GlobalArgs) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match &global.config {
        Some(path) => typesift_config::load_config_file(&PathBuf::from(path))?,
        None => typesift_config::load_config(&std::env::current_dir()?)?,
    };
    Ok(config)
}

/// Picks the renderer for the output flags, falling back to the config.
pub fn select_renderer(args: &OutputArgs, config: &Config) -> Box<dyn ReportRenderer> {
    let format = args
        .format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format);
    match format {
        OutputFormat::Text => {
            let header = config.output.header && !args.no_header;
            Box::new(TextRenderer::new(header))
        }
        OutputFormat::Json => Box::new(JsonRenderer::new(true)),
    }
}

/// Renders `report` and prints it to stdout.
///
/// Returns exit code 0 if the report passed, 1 if it lists errors.
pub fn emit(
    report: &DiagnosticReport,
    renderer: &dyn ReportRenderer,
) -> Result<i32, Box<dyn std::error::Error>> {
    let output = renderer.render(report)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(exit_code(report))
}

/// Exit code for a rendered report: 1 whenever it lists errors, whatever its
/// `passed` flag says.
pub fn exit_code(report: &DiagnosticReport) -> i32 {
    if report.errors.is_empty() {
        0
    } else {
        1
    }
}
