//! # Category Tallies
//!
//! Per-category compliance counts with percentage derivation and
//! fixed-total override reconciliation.
//!
//! ## Rounding Rules
//!
//! One rounding rule everywhere: round half up ([`percentage`] and the
//! proportional rescale in [`CategoryCounts::reconcile_to`] both use it).
//! Zero totals yield zero percentages — never NaN, never an error.
//!
//! ## Reconciliation Invariant
//!
//! After reconciliation against a fixed total, the three category counts
//! sum to the target exactly. Rounding residue lands on the largest
//! category; ties break by the fixed priority order
//! Compliant > Partial Compliance > Non-Compliant.

use serde::{Deserialize, Serialize};

use regdash_core::ComplianceStatus;

/// Percentage of `count` over `total`, rounded half up.
///
/// Defined as 0 when `total` is 0. Callers pass `count <= total`, so the
/// result is always within 0..=100.
pub fn percentage(count: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    ((100.0 * count as f64) / total as f64).round() as u8
}

/// Counts per compliance category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    /// Number of compliant test cases.
    pub compliant: u64,
    /// Number of partially compliant (needs-review) test cases.
    pub partial_compliance: u64,
    /// Number of non-compliant test cases.
    pub non_compliant: u64,
}

impl CategoryCounts {
    /// Increment the count for one status.
    pub fn record(&mut self, status: ComplianceStatus) {
        *self.get_mut(status) += 1;
    }

    /// The count for one status.
    pub fn get(&self, status: ComplianceStatus) -> u64 {
        match status {
            ComplianceStatus::Compliant => self.compliant,
            ComplianceStatus::PartialCompliance => self.partial_compliance,
            ComplianceStatus::NonCompliant => self.non_compliant,
        }
    }

    fn get_mut(&mut self, status: ComplianceStatus) -> &mut u64 {
        match status {
            ComplianceStatus::Compliant => &mut self.compliant,
            ComplianceStatus::PartialCompliance => &mut self.partial_compliance,
            ComplianceStatus::NonCompliant => &mut self.non_compliant,
        }
    }

    /// Sum over all three categories.
    pub fn total(&self) -> u64 {
        self.compliant + self.partial_compliance + self.non_compliant
    }

    /// Category percentages relative to [`CategoryCounts::total`].
    pub fn percentages(&self) -> CategoryPercentages {
        let total = self.total();
        CategoryPercentages {
            compliant: percentage(self.compliant, total),
            partial_compliance: percentage(self.partial_compliance, total),
            non_compliant: percentage(self.non_compliant, total),
        }
    }

    /// Rescale the counts so they sum to `target` exactly.
    ///
    /// Each category is scaled by `target / total` and rounded half up;
    /// any residue from rounding is pushed into the largest adjusted
    /// category, ties broken Compliant > Partial Compliance >
    /// Non-Compliant. Reconciliation with a zero raw total is a no-op —
    /// raw (zero) counts come back unchanged rather than inventing
    /// numbers.
    pub fn reconcile_to(&self, target: u64) -> CategoryCounts {
        let total = self.total();
        if total == 0 {
            tracing::debug!(target, "override reconciliation skipped: zero raw total");
            return *self;
        }

        let ratio = target as f64 / total as f64;
        let scale = |count: u64| (count as f64 * ratio).round() as u64;
        let mut adjusted = CategoryCounts {
            compliant: scale(self.compliant),
            partial_compliance: scale(self.partial_compliance),
            non_compliant: scale(self.non_compliant),
        };

        // Push the rounding residue into the largest category. A negative
        // residue can exhaust a category; the loop moves the remainder to
        // the next-largest until the sum is exact.
        let mut diff = target as i64 - adjusted.total() as i64;
        while diff != 0 {
            let bucket = adjusted.largest();
            let cell = adjusted.get_mut(bucket);
            let updated = (*cell as i64 + diff).max(0);
            diff += *cell as i64 - updated;
            *cell = updated as u64;
        }

        debug_assert_eq!(adjusted.total(), target);
        adjusted
    }

    /// The category with the largest count, ties broken by priority order.
    fn largest(&self) -> ComplianceStatus {
        let mut best = ComplianceStatus::Compliant;
        for &status in ComplianceStatus::all() {
            if self.get(status) > self.get(best) {
                best = status;
            }
        }
        best
    }
}

/// Rounded percentage per compliance category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPercentages {
    /// Percentage of compliant test cases.
    pub compliant: u8,
    /// Percentage of partially compliant test cases.
    pub partial_compliance: u8,
    /// Percentage of non-compliant test cases.
    pub non_compliant: u8,
}

impl CategoryPercentages {
    /// Sum of the three percentages. 100 ± 1 for any nonzero total.
    pub fn sum(&self) -> u16 {
        self.compliant as u16 + self.partial_compliance as u16 + self.non_compliant as u16
    }
}
