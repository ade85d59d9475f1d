//! `typesift diff`: print only the errors that are new relative to a baseline.
//!
//! 1. Resolve the config (for the default baseline and output settings)
//! 2. Load the current and baseline reports
//! 3. Compute the difference
//! 4. Render the difference

use std::path::{Path, PathBuf};

use typesift_diagnostics::difference;

use crate::pipeline::{emit, load_report, resolve_config, select_renderer};
use crate::{DiffArgs, GlobalArgs};

/// Runs the `typesift diff` command.
///
/// Returns exit code 0 if no new errors were introduced, 1 otherwise.
pub fn run(args: &DiffArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let baseline_path = args
        .baseline
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.diff.baseline.clone())
        .ok_or("no baseline report given (use --baseline or set diff.baseline)")?;

    let current = load_report(Path::new(&args.current))?;
    let baseline = load_report(&baseline_path)?;
    let fresh = difference(&current, &baseline);

    if !global.quiet {
        eprintln!(
            "   Compared {} error(s) against {} baseline error(s): {} new",
            current.error_count(),
            baseline.error_count(),
            fresh.error_count()
        );
    }

    let renderer = select_renderer(&args.output, &config);
    emit(&fresh, renderer.as_ref())
}
