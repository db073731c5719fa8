//! # Runs Subcommand
//!
//! Lists the assessment runs in a run configuration file: version, date,
//! domains in view, per-domain exclusions, and any fixed total override.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use regdash_engine::RunConfig;

/// Arguments for the `regdash runs` subcommand.
#[derive(Args, Debug)]
pub struct RunsArgs {
    /// Path to the assessment run configuration JSON.
    #[arg(long, value_name = "PATH")]
    pub runs: PathBuf,
}

/// Execute the runs subcommand.
///
/// Returns exit code: 0 on success, 1 if the file lists no runs.
pub fn run_runs(args: &RunsArgs) -> Result<u8> {
    let config = RunConfig::from_path(&args.runs)
        .with_context(|| format!("failed to load run configuration {}", args.runs.display()))?;

    if config.runs.is_empty() {
        println!("no assessment runs configured in {}", args.runs.display());
        return Ok(1);
    }

    for run in &config.runs {
        let domains: Vec<&str> = run.domains.iter().map(String::as_str).collect();
        print!("{} ({}) domains: {}", run.version, run.date, domains.join(", "));
        if let Some(total) = run.fixed_total_override {
            print!("  override total: {total}");
        }
        println!();

        for (domain, codes) in &run.excluded_policy_codes {
            let codes: Vec<&str> = codes.iter().map(String::as_str).collect();
            println!("  excludes from {}: {}", domain, codes.join(", "));
        }
    }

    Ok(0)
}
