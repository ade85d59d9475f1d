//! typesift CLI: render type-checker reports and surface newly introduced errors.
//!
//! Provides `typesift render` to print a report as text with source snippets,
//! and `typesift diff` to print only the errors of a report that are absent
//! from a baseline report.

#![warn(missing_docs)]

mod diff;
mod logging;
mod pipeline;
mod render;

use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use typesift_config::OutputFormat;

/// Exit code used when a command fails to run at all.
const EXIT_FAILURE: i32 = 2;

/// typesift: type-checker report differ and renderer.
#[derive(Parser, Debug)]
#[command(name = "typesift", version, about = "Type-checker report differ and renderer")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a custom `typesift.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a report.
    Render(RenderArgs),
    /// Print only the errors of a report that are not in a baseline report.
    Diff(DiffArgs),
}

/// Arguments for the `typesift render` subcommand.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Report JSON file (`-` reads standard input).
    pub report: String,

    /// Output format and header flags.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `typesift diff` subcommand.
#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Report JSON file of the current run (`-` reads standard input).
    pub current: String,

    /// Baseline report JSON file. Defaults to `diff.baseline` from the config.
    #[arg(short, long)]
    pub baseline: Option<String>,

    /// Output format and header flags.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output flags shared by all commands.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format. Defaults to `output.format` from the config.
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Omit the error count line from text output.
    #[arg(long)]
    pub no_header: bool,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text with source snippets.
    Text,
    /// The report as JSON, usable as a later baseline.
    Json,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
        }
    }
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };
    logging::init(&global);

    let result = match cli.command {
        Command::Render(ref args) => render::run(args, &global),
        Command::Diff(ref args) => diff::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(EXIT_FAILURE);
        }
    }
}
