//! # Dataset Model
//!
//! Serde structs for the nested compliance dataset. Maps are `BTreeMap`
//! throughout so iteration order — and therefore every derived summary —
//! is deterministic regardless of input key order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use regdash_core::ComplianceStatus;

/// Policies grouped by regulator key within one domain.
pub type RegulatorPolicies = BTreeMap<String, Vec<PolicyRecord>>;

/// The full nested compliance dataset.
///
/// The root object of the upstream assessment JSON. Missing
/// `policy_validation` deserializes as an empty map rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceDataset {
    /// Domain key → regulator key → policies.
    #[serde(default)]
    pub policy_validation: BTreeMap<String, RegulatorPolicies>,
}

impl ComplianceDataset {
    /// Whether the dataset contains no domains at all.
    pub fn is_empty(&self) -> bool {
        self.policy_validation.is_empty()
    }

    /// Domain keys present in the dataset, in sorted order.
    pub fn domain_keys(&self) -> impl Iterator<Item = &str> {
        self.policy_validation.keys().map(String::as_str)
    }

    /// Look up one domain's regulator → policies mapping.
    pub fn domain(&self, key: &str) -> Option<&RegulatorPolicies> {
        self.policy_validation.get(key)
    }
}

/// One policy mapped to a regulator within a domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecord {
    /// Policy code. Unique only combined with domain and regulator.
    pub policy_code: String,

    /// Path to the source policy document.
    #[serde(default)]
    pub policy_document_path: String,

    /// Regulation reference this policy maps to, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulation: Option<String>,

    /// Whether the policy participates in aggregation. Defaults to true.
    #[serde(default = "default_included")]
    pub included: bool,

    /// Free-text reviewer comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    /// Test-case validation results for this policy.
    #[serde(default)]
    pub policy_validations: Vec<TestCaseValidation>,
}

fn default_included() -> bool {
    true
}

/// One test-case validation result — the atomic unit of compliance data.
///
/// Field names mirror the upstream JSON. `Compliance_Status` stays a raw
/// string here: the dataset layer does not schema-validate upstream data,
/// and an unrecognized status must be skippable rather than a load failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCaseValidation {
    /// Test case number within the policy.
    #[serde(rename = "Test_case_no")]
    pub test_case_no: u32,

    /// Raw compliance status string. Parse via [`TestCaseValidation::status`].
    #[serde(rename = "Compliance_Status", default)]
    pub compliance_status: String,

    /// The interpreted regulatory rule this test case checks.
    #[serde(
        rename = "Interpreted_Rule",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub interpreted_rule: Option<String>,

    /// Description of the underlying regulation.
    #[serde(
        rename = "Regulation_Description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub regulation_description: Option<String>,

    /// Citation locating the rule in the regulation text.
    #[serde(
        rename = "Rule_Citation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rule_citation: Option<String>,

    /// Reason supporting the compliance determination.
    #[serde(rename = "Reason", default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Evidence excerpt quoted from the policy document.
    #[serde(
        rename = "Excerpt_Evidence_From_Policy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub excerpt_evidence: Option<String>,

    /// Remediation recommendation, present for non-compliant findings.
    #[serde(
        rename = "Remediation_Recommendation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub remediation_recommendation: Option<String>,
}

impl TestCaseValidation {
    /// Parse the raw status string into the closed status set.
    ///
    /// Returns `None` for anything outside the three recognized values;
    /// the engine excludes such records from tallies.
    pub fn status(&self) -> Option<ComplianceStatus> {
        self.compliance_status.parse().ok()
    }
}
