//! # regdash-cli — CLI Tool for the Regdash Stack
//!
//! Provides the `regdash` command-line interface over the aggregation
//! engine: load a compliance dataset, select an assessment run, and print
//! the summary a dashboard would display.
//!
//! ## Subcommands
//!
//! - `regdash summarize` — Aggregate a dataset under one or all runs.
//! - `regdash runs` — List the assessment runs in a configuration file.
//!
//! ```bash
//! regdash summarize --dataset policy_assessment_results.json \
//!     --runs assessment_runs.json --run v2
//! regdash runs --runs assessment_runs.json
//! ```

pub mod runs;
pub mod summarize;
