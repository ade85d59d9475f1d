//! Tracing subscriber setup.
//!
//! Events go to stderr so that rendered reports on stdout stay byte-exact.

use tracing_subscriber::EnvFilter;

use crate::GlobalArgs;

/// Returns the filter used when `RUST_LOG` is not set.
///
/// The `typesift` directive matches every workspace crate target
/// (`typesift_cli`, `typesift_diagnostics`, ...) by prefix.
fn default_filter(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        "error"
    } else if global.verbose {
        "typesift=debug"
    } else {
        "typesift=warn"
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the flag-derived level.
pub fn init(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(global)));
    // A subscriber may already be set (e.g. by a test harness); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
