//! # Deduplication Keys
//!
//! Newtype keys identifying policies and test cases for unique-entity
//! counting.
//!
//! ## Identity Rules
//!
//! - A policy is identified by the (domain, regulator, policy_code) triple.
//!   The same `policy_code` can recur under different regulators or domains
//!   and counts separately in each.
//! - A test case is identified by (domain, regulator, policy_code,
//!   test_case_no).
//!
//! Both keys derive `Ord` so they can live in `BTreeSet`/`BTreeMap`, which
//! keeps aggregation output deterministically ordered.

use serde::{Deserialize, Serialize};

/// Unique identity of a policy within the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PolicyKey {
    /// Domain key the policy was found under (e.g. `operational_resilience`).
    pub domain: String,
    /// Regulator the policy is scoped to (e.g. `FCA`).
    pub regulator: String,
    /// Policy code as it appears in the dataset. Not unique on its own.
    pub policy_code: String,
}

impl PolicyKey {
    /// Build a policy key from its three components.
    pub fn new(
        domain: impl Into<String>,
        regulator: impl Into<String>,
        policy_code: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            regulator: regulator.into(),
            policy_code: policy_code.into(),
        }
    }
}

impl std::fmt::Display for PolicyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.domain, self.regulator, self.policy_code)
    }
}

/// Unique identity of a test-case validation within the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TestCaseKey {
    /// The policy this test case validates.
    pub policy: PolicyKey,
    /// Test case number within the policy.
    pub test_case_no: u32,
}

impl TestCaseKey {
    /// Build a test-case key from a policy key and test case number.
    pub fn new(policy: PolicyKey, test_case_no: u32) -> Self {
        Self {
            policy,
            test_case_no,
        }
    }
}

impl std::fmt::Display for TestCaseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.policy, self.test_case_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn same_code_different_regulator_is_distinct() {
        let a = PolicyKey::new("operational_resilience", "FCA", "ops-1");
        let b = PolicyKey::new("operational_resilience", "PRA", "ops-1");
        assert_ne!(a, b);

        let mut set = BTreeSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn identical_triple_deduplicates() {
        let a = PolicyKey::new("operational_resilience", "FCA", "sup15");
        let b = PolicyKey::new("operational_resilience", "FCA", "sup15");
        assert_eq!(a, b);

        let mut set = BTreeSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_case_key_extends_policy_key() {
        let policy = PolicyKey::new("operational_resilience", "FCA", "sup15");
        let a = TestCaseKey::new(policy.clone(), 1);
        let b = TestCaseKey::new(policy, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn display_joins_components() {
        let key = TestCaseKey::new(
            PolicyKey::new("operational_resilience", "FCA", "sup15"),
            3,
        );
        assert_eq!(key.to_string(), "operational_resilience-FCA-sup15-3");
    }
}
