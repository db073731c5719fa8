//! # Compliance Status — Single Source of Truth
//!
//! Defines the `ComplianceStatus` enum with the three closed outcome values.
//! This is the ONE definition used across the entire stack. Every `match`
//! on `ComplianceStatus` must be exhaustive — adding a new status forces
//! every consumer to handle it at compile time.
//!
//! ## Invariant
//!
//! The set is closed. Upstream validation records carry free-form strings;
//! anything that does not parse into one of the three variants is excluded
//! from tallies by the engine — never crashed on, never silently counted
//! under another category.
//!
//! ## Tie-Break Order
//!
//! [`ComplianceStatus::all()`] returns the variants in the canonical
//! priority order used by override reconciliation:
//! Compliant > Partial Compliance > Non-Compliant.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RegdashError;

/// A single test-case compliance outcome.
///
/// Wire format matches the upstream assessment JSON exactly:
/// `"Compliant"`, `"Partial Compliance"`, `"Non-Compliant"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    /// The policy satisfies the interpreted rule.
    Compliant,
    /// The policy partially satisfies the rule and needs review.
    #[serde(rename = "Partial Compliance")]
    PartialCompliance,
    /// The policy does not satisfy the rule.
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

/// Total number of compliance statuses. Used for compile-time assertions.
pub const COMPLIANCE_STATUS_COUNT: usize = 3;

impl ComplianceStatus {
    /// Returns all statuses in canonical priority order
    /// (Compliant first, Non-Compliant last).
    pub fn all() -> &'static [ComplianceStatus] {
        &[
            Self::Compliant,
            Self::PartialCompliance,
            Self::NonCompliant,
        ]
    }

    /// Returns the wire-format string for this status.
    ///
    /// This must match the serde serialization format and the
    /// `Compliance_Status` values in the upstream assessment JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::PartialCompliance => "Partial Compliance",
            Self::NonCompliant => "Non-Compliant",
        }
    }

    /// Returns the human-facing display name.
    ///
    /// Presentation surfaces render "Partial Compliance" as "Needs Review";
    /// the other two display as their wire names.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::PartialCompliance => "Needs Review",
            Self::NonCompliant => "Non-Compliant",
        }
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplianceStatus {
    type Err = RegdashError;

    /// Parse a compliance status from its wire-format string.
    ///
    /// Accepts the same strings produced by [`ComplianceStatus::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Compliant" => Ok(Self::Compliant),
            "Partial Compliance" => Ok(Self::PartialCompliance),
            "Non-Compliant" => Ok(Self::NonCompliant),
            other => Err(RegdashError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_statuses_count() {
        assert_eq!(ComplianceStatus::all().len(), COMPLIANCE_STATUS_COUNT);
    }

    #[test]
    fn test_all_statuses_priority_order() {
        assert_eq!(
            ComplianceStatus::all(),
            &[
                ComplianceStatus::Compliant,
                ComplianceStatus::PartialCompliance,
                ComplianceStatus::NonCompliant,
            ]
        );
    }

    #[test]
    fn test_as_str_roundtrip() {
        for status in ComplianceStatus::all() {
            let s = status.as_str();
            let parsed: ComplianceStatus = s
                .parse()
                .unwrap_or_else(|e| panic!("Failed to parse {s:?}: {e}"));
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("Unknown".parse::<ComplianceStatus>().is_err());
        assert!("compliant".parse::<ComplianceStatus>().is_err()); // case-sensitive
        assert!("Partial".parse::<ComplianceStatus>().is_err());
        assert!("".parse::<ComplianceStatus>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for status in ComplianceStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            let expected = format!("\"{}\"", status.as_str());
            assert_eq!(json, expected);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        for status in ComplianceStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            let parsed: ComplianceStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(*status, parsed);
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ComplianceStatus::Compliant.display_name(), "Compliant");
        assert_eq!(
            ComplianceStatus::PartialCompliance.display_name(),
            "Needs Review"
        );
        assert_eq!(
            ComplianceStatus::NonCompliant.display_name(),
            "Non-Compliant"
        );
    }
}
