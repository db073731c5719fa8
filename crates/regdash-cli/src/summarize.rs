//! # Summarize Subcommand
//!
//! Loads a compliance dataset, resolves the assessment runs in scope, and
//! prints the aggregated summary for each: the per-domain evaluation table,
//! global unique-entity statistics, and the regulator distribution.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use regdash_core::ComplianceStatus;
use regdash_dataset::ComplianceDataset;
use regdash_engine::{aggregate, AssessmentRun, RunConfig, SummaryResult, ViewParams};

/// Arguments for the `regdash summarize` subcommand.
#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Path to the compliance dataset JSON.
    #[arg(long, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Path to the assessment run configuration JSON.
    #[arg(long, value_name = "PATH")]
    pub runs: Option<PathBuf>,

    /// Summarize only this run version (requires --runs).
    #[arg(long, value_name = "VERSION")]
    pub run: Option<String>,
}

/// Execute the summarize subcommand.
///
/// Returns exit code: 0 on success, 1 on user/data failure.
pub fn run_summarize(args: &SummarizeArgs) -> Result<u8> {
    let dataset = ComplianceDataset::from_path(&args.dataset)
        .with_context(|| format!("failed to read dataset {}", args.dataset.display()))?;

    if dataset.is_empty() {
        tracing::warn!(path = %args.dataset.display(), "dataset is empty or malformed");
    }

    let Some(runs_path) = &args.runs else {
        if args.run.is_some() {
            println!("--run requires --runs");
            return Ok(1);
        }
        // No run configuration: one unfiltered pass over every domain.
        let params = ViewParams::all_domains(&dataset);
        let summary = aggregate(&dataset, &params);
        print_summary("all domains", None, &summary);
        return Ok(0);
    };

    let config = RunConfig::from_path(runs_path)
        .with_context(|| format!("failed to load run configuration {}", runs_path.display()))?;

    let selected: Vec<&AssessmentRun> = match &args.run {
        Some(version) => match config.find(version) {
            Some(run) => vec![run],
            None => {
                println!("unknown run version {version:?}");
                return Ok(1);
            }
        },
        None => config.runs.iter().collect(),
    };

    for run in selected {
        let summary = aggregate(&dataset, &run.view_params());
        print_summary(&run.version, Some(run), &summary);
    }

    Ok(0)
}

/// Print one run's summary in the dashboard's table shape.
fn print_summary(label: &str, run: Option<&AssessmentRun>, summary: &SummaryResult) {
    match run {
        Some(run) => println!("Assessment {} ({})", run.version, run.date),
        None => println!("Assessment ({label})"),
    }

    println!(
        "  {:<32} {:>14} {:>14} {:>14}",
        "Domain", "Compliant", "Needs Review", "Non-Compliant"
    );
    for domain in summary.domains.values() {
        println!(
            "  {:<32} {:>8} ({:>2}%) {:>8} ({:>2}%) {:>8} ({:>2}%)",
            domain.display_name,
            domain.formatted(ComplianceStatus::Compliant),
            domain.percentages.compliant,
            domain.formatted(ComplianceStatus::PartialCompliance),
            domain.percentages.partial_compliance,
            domain.formatted(ComplianceStatus::NonCompliant),
            domain.percentages.non_compliant,
        );
    }

    println!(
        "  Policies: {}  Test cases: {}  Regulators: {}",
        summary.unique_policies, summary.unique_test_cases, summary.unique_regulators
    );
    println!(
        "  Overall: {}/{} compliant ({}%), {}/{} needs review ({}%), {}/{} non-compliant ({}%)",
        summary.global.compliant,
        summary.global_total,
        summary.global_percentages.compliant,
        summary.global.partial_compliance,
        summary.global_total,
        summary.global_percentages.partial_compliance,
        summary.global.non_compliant,
        summary.global_total,
        summary.global_percentages.non_compliant,
    );

    if !summary.regulator_test_cases.is_empty() {
        let parts: Vec<String> = summary
            .regulator_test_cases
            .iter()
            .map(|(name, count)| format!("{name}: {count}"))
            .collect();
        println!("  By regulator: {}", parts.join(", "));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn dataset_file() -> tempfile::NamedTempFile {
        write_temp(
            r#"{
                "policy_validation": {
                    "operational_resilience": {
                        "FCA": [{
                            "policy_code": "sup15",
                            "policy_validations": [
                                {"Test_case_no": 1, "Compliance_Status": "Compliant"},
                                {"Test_case_no": 2, "Compliance_Status": "Non-Compliant"}
                            ]
                        }]
                    }
                }
            }"#,
        )
    }

    fn runs_file() -> tempfile::NamedTempFile {
        write_temp(
            r#"{
                "runs": [
                    {
                        "version": "v1",
                        "date": "2025-03-04",
                        "domains": ["operational_resilience"],
                        "fixed_total_override": 78
                    }
                ]
            }"#,
        )
    }

    #[test]
    fn summarize_without_runs_succeeds() {
        let dataset = dataset_file();
        let args = SummarizeArgs {
            dataset: dataset.path().to_path_buf(),
            runs: None,
            run: None,
        };
        assert_eq!(run_summarize(&args).unwrap(), 0);
    }

    #[test]
    fn summarize_with_run_selection() {
        let dataset = dataset_file();
        let runs = runs_file();
        let args = SummarizeArgs {
            dataset: dataset.path().to_path_buf(),
            runs: Some(runs.path().to_path_buf()),
            run: Some("v1".into()),
        };
        assert_eq!(run_summarize(&args).unwrap(), 0);
    }

    #[test]
    fn unknown_run_version_exits_one() {
        let dataset = dataset_file();
        let runs = runs_file();
        let args = SummarizeArgs {
            dataset: dataset.path().to_path_buf(),
            runs: Some(runs.path().to_path_buf()),
            run: Some("v9".into()),
        };
        assert_eq!(run_summarize(&args).unwrap(), 1);
    }

    #[test]
    fn run_flag_without_runs_file_exits_one() {
        let dataset = dataset_file();
        let args = SummarizeArgs {
            dataset: dataset.path().to_path_buf(),
            runs: None,
            run: Some("v1".into()),
        };
        assert_eq!(run_summarize(&args).unwrap(), 1);
    }

    #[test]
    fn missing_dataset_file_is_error() {
        let args = SummarizeArgs {
            dataset: PathBuf::from("/nonexistent/dataset.json"),
            runs: None,
            run: None,
        };
        assert!(run_summarize(&args).is_err());
    }

    #[test]
    fn malformed_dataset_summarizes_to_zeros() {
        let dataset = write_temp("{malformed");
        let args = SummarizeArgs {
            dataset: dataset.path().to_path_buf(),
            runs: None,
            run: None,
        };
        assert_eq!(run_summarize(&args).unwrap(), 0);
    }
}
