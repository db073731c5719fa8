//! # Aggregation Traversal
//!
//! The single traversal that every presentation surface shares. Walks
//! domain → regulator → policy → test case under the view parameters,
//! accumulating per-domain tallies and global deduplicated sets, then
//! derives percentages and applies override reconciliation.
//!
//! Accumulation is commutative — traversal order cannot change the output
//! beyond the documented reconciliation tie-break — and the input is never
//! mutated.

use std::collections::{BTreeMap, BTreeSet};

use regdash_core::{ComplianceStatus, PolicyKey, TestCaseKey};
use regdash_dataset::ComplianceDataset;

use crate::summary::{display_name, DomainSummary, SummaryResult};
use crate::tally::CategoryCounts;
use crate::view::ViewParams;

/// Aggregate a compliance dataset under the given view parameters.
///
/// For each included domain: every regulator's policies are traversed,
/// skipping policies excluded by code or flagged `included: false`, and
/// each test case's status is tallied. Unknown statuses are excluded from
/// tallies (with a debug trace) but still count toward unique test cases
/// and regulator volume.
///
/// When `fixed_total_override` is set, each domain's counts and the
/// global breakdown are rescaled to sum to the override exactly (no-op
/// for zero raw totals).
///
/// Pure and deterministic: identical inputs produce identical output, and
/// the dataset is never mutated.
pub fn aggregate(dataset: &ComplianceDataset, params: &ViewParams) -> SummaryResult {
    let mut domains = BTreeMap::new();
    let mut unique_policies: BTreeSet<PolicyKey> = BTreeSet::new();
    let mut unique_test_cases: BTreeSet<TestCaseKey> = BTreeSet::new();
    let mut regulators: BTreeSet<String> = BTreeSet::new();
    let mut regulator_test_cases: BTreeMap<String, u64> = BTreeMap::new();
    // Status per unique test case; re-traversal of the same key overwrites,
    // so the global breakdown is deduplicated.
    let mut global_statuses: BTreeMap<TestCaseKey, ComplianceStatus> = BTreeMap::new();

    for (domain_key, domain_data) in &dataset.policy_validation {
        if !params.includes_domain(domain_key) {
            continue;
        }

        let mut counts = CategoryCounts::default();

        for (regulator_key, policies) in domain_data {
            regulators.insert(regulator_key.clone());

            for policy in policies {
                if !policy.included {
                    tracing::debug!(
                        domain = %domain_key,
                        regulator = %regulator_key,
                        policy_code = %policy.policy_code,
                        "policy flagged not included; skipping"
                    );
                    continue;
                }
                if params.excludes_policy(domain_key, &policy.policy_code) {
                    tracing::debug!(
                        domain = %domain_key,
                        regulator = %regulator_key,
                        policy_code = %policy.policy_code,
                        "policy code excluded by view parameters; skipping"
                    );
                    continue;
                }

                let policy_key =
                    PolicyKey::new(domain_key, regulator_key, &policy.policy_code);
                unique_policies.insert(policy_key.clone());

                for test_case in &policy.policy_validations {
                    let key = TestCaseKey::new(policy_key.clone(), test_case.test_case_no);
                    unique_test_cases.insert(key.clone());
                    *regulator_test_cases
                        .entry(regulator_key.clone())
                        .or_default() += 1;

                    match test_case.status() {
                        Some(status) => {
                            counts.record(status);
                            global_statuses.insert(key, status);
                        }
                        None => {
                            tracing::debug!(
                                test_case = %key,
                                status = %test_case.compliance_status,
                                "unrecognized compliance status; excluded from tallies"
                            );
                        }
                    }
                }
            }
        }

        let (final_counts, total) = apply_override(counts, params.fixed_total_override);
        domains.insert(
            domain_key.clone(),
            DomainSummary {
                domain: domain_key.clone(),
                display_name: display_name(domain_key),
                counts: final_counts,
                total,
                percentages: final_counts.percentages(),
            },
        );
    }

    let mut global_counts = CategoryCounts::default();
    for status in global_statuses.values() {
        global_counts.record(*status);
    }
    let (global, global_total) = apply_override(global_counts, params.fixed_total_override);

    SummaryResult {
        domains,
        unique_policies: unique_policies.len() as u64,
        unique_test_cases: unique_test_cases.len() as u64,
        unique_regulators: regulators.len() as u64,
        global,
        global_total,
        global_percentages: global.percentages(),
        regulator_test_cases,
    }
}

/// Reconcile `counts` against an override, if one applies.
///
/// Returns the (possibly rescaled) counts and the display total. A zero
/// raw total skips reconciliation entirely.
fn apply_override(counts: CategoryCounts, override_total: Option<u64>) -> (CategoryCounts, u64) {
    match override_total {
        Some(target) if counts.total() > 0 => {
            let reconciled = counts.reconcile_to(target);
            (reconciled, target)
        }
        _ => (counts, counts.total()),
    }
}
