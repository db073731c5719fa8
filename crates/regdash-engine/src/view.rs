//! # View Parameters and Assessment Runs
//!
//! [`ViewParams`] is the immutable value controlling one aggregation pass:
//! which domains are traversed, which policy codes are dropped first, and
//! whether a fixed display total is mandated.
//!
//! [`AssessmentRun`] is the named, dated selector a dashboard exposes
//! ("v1", "v2"). Runs are configuration data loaded from a JSON file —
//! the override totals and excluded codes that used to live as inline
//! literals in presentation code are auditable fields here.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use regdash_core::RegdashError;
use regdash_dataset::ComplianceDataset;

/// Per-domain sets of policy codes to drop before tallying.
pub type ExcludedPolicyCodes = BTreeMap<String, BTreeSet<String>>;

/// Parameters for one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    /// Domain keys to traverse. Domains not listed are skipped entirely.
    pub included_domains: BTreeSet<String>,

    /// Policy codes filtered out per domain before tallying.
    #[serde(default)]
    pub excluded_policy_codes: ExcludedPolicyCodes,

    /// When set, category counts are rescaled to sum to this value exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_total_override: Option<u64>,
}

impl ViewParams {
    /// Parameters covering every domain in `dataset`, with no exclusions
    /// and no override.
    pub fn all_domains(dataset: &ComplianceDataset) -> Self {
        Self {
            included_domains: dataset.domain_keys().map(str::to_string).collect(),
            excluded_policy_codes: BTreeMap::new(),
            fixed_total_override: None,
        }
    }

    /// Whether `domain` is traversed under these parameters.
    pub fn includes_domain(&self, domain: &str) -> bool {
        self.included_domains.contains(domain)
    }

    /// Whether `policy_code` is filtered out within `domain`.
    pub fn excludes_policy(&self, domain: &str, policy_code: &str) -> bool {
        self.excluded_policy_codes
            .get(domain)
            .is_some_and(|codes| codes.contains(policy_code))
    }
}

/// A named, dated assessment snapshot selecting what is in view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRun {
    /// Version label shown to users (e.g. `v1`, `v2`).
    pub version: String,

    /// Date the assessment was run.
    pub date: NaiveDate,

    /// Domain keys visible in this run.
    pub domains: BTreeSet<String>,

    /// Policy codes dropped per domain for this run.
    #[serde(default)]
    pub excluded_policy_codes: ExcludedPolicyCodes,

    /// Mandated display total for this run, when one applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_total_override: Option<u64>,
}

impl AssessmentRun {
    /// The view parameters this run resolves to.
    pub fn view_params(&self) -> ViewParams {
        ViewParams {
            included_domains: self.domains.clone(),
            excluded_policy_codes: self.excluded_policy_codes.clone(),
            fixed_total_override: self.fixed_total_override,
        }
    }
}

/// A set of assessment runs loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// The configured runs, in file order.
    pub runs: Vec<AssessmentRun>,
}

impl RunConfig {
    /// Load a run configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Unlike dataset loading, run configuration is operator-authored:
    /// unreadable files and malformed JSON are both hard errors.
    pub fn from_path(path: &Path) -> Result<Self, RegdashError> {
        let text = std::fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Find a run by version label.
    pub fn find(&self, version: &str) -> Option<&AssessmentRun> {
        self.runs.iter().find(|run| run.version == version)
    }
}
