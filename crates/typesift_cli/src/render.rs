//! `typesift render`: print a report.

use std::path::Path;

use crate::pipeline::{emit, load_report, resolve_config, select_renderer};
use crate::{GlobalArgs, RenderArgs};

/// Runs the `typesift render` command.
///
/// Returns exit code 0 if the report passed, 1 if it lists errors.
pub fn run(args: &RenderArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let report = load_report(Path::new(&args.report))?;
    let renderer = select_renderer(&args.output, &config);
    emit(&report, renderer.as_ref())
}
