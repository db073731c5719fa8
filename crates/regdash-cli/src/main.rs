//! # regdash CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regdash_cli::runs::{run_runs, RunsArgs};
use regdash_cli::summarize::{run_summarize, SummarizeArgs};

/// Regulatory compliance dashboard toolchain.
///
/// Aggregates precomputed compliance assessment datasets into the summary
/// statistics the dashboard displays: per-domain tallies, percentage
/// breakdowns, unique entity counts, and regulator distribution.
#[derive(Parser, Debug)]
#[command(name = "regdash", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a dataset and print the dashboard summary.
    Summarize(SummarizeArgs),

    /// List the assessment runs in a run configuration file.
    Runs(RunsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Summarize(args) => run_summarize(&args),
        Commands::Runs(args) => run_runs(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
