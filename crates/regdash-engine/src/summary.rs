//! # Summary Output
//!
//! The flat records [`aggregate`](crate::engine::aggregate) produces for
//! presentation: per-domain breakdowns, global unique-entity counts, and
//! the regulator distribution. All maps are `BTreeMap` so output ordering
//! is stable across calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use regdash_core::ComplianceStatus;

use crate::tally::{CategoryCounts, CategoryPercentages};

/// Summary statistics for one included domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSummary {
    /// Domain key as it appears in the dataset.
    pub domain: String,

    /// Title-cased display name ("operational_resilience" →
    /// "Operational Resilience").
    pub display_name: String,

    /// Category counts — raw, or reconciled when an override applied.
    pub counts: CategoryCounts,

    /// Display total: the raw tally total, or the override value.
    pub total: u64,

    /// Percentages relative to [`DomainSummary::total`].
    pub percentages: CategoryPercentages,
}

impl DomainSummary {
    /// The `"count/total"` pair presentation renders for one category.
    pub fn formatted(&self, status: ComplianceStatus) -> String {
        format!("{}/{}", self.counts.get(status), self.total)
    }
}

/// The complete output of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Per-domain summaries, keyed by domain key.
    pub domains: BTreeMap<String, DomainSummary>,

    /// Distinct (domain, regulator, policy_code) triples traversed.
    pub unique_policies: u64,

    /// Distinct (domain, regulator, policy_code, test_case_no) tuples
    /// traversed.
    pub unique_test_cases: u64,

    /// Distinct regulator keys traversed.
    pub unique_regulators: u64,

    /// Global category breakdown over unique test cases — raw, or
    /// reconciled when an override applied.
    pub global: CategoryCounts,

    /// Display total for the global breakdown.
    pub global_total: u64,

    /// Percentages relative to [`SummaryResult::global_total`].
    pub global_percentages: CategoryPercentages,

    /// Test-case volume per regulator, across all included domains.
    pub regulator_test_cases: BTreeMap<String, u64>,
}

impl SummaryResult {
    /// The all-zero result an empty or fully filtered dataset produces.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Format a snake_case domain key for display.
///
/// Each `_`-separated word is capitalized: "operational_resilience" →
/// "Operational Resilience".
pub(crate) fn display_name(domain_key: &str) -> String {
    domain_key
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
