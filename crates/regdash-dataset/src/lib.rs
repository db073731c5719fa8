#![deny(missing_docs)]

//! # regdash-dataset — Compliance Dataset Model
//!
//! The nested compliance dataset consumed by the aggregation engine:
//!
//! ```text
//! ComplianceDataset
//!   policy_validation: domain key → regulator key → [PolicyRecord]
//!     PolicyRecord: policy_code, document path, included flag, comments,
//!                   policy_validations: [TestCaseValidation]
//! ```
//!
//! Wire-format field names match the upstream assessment JSON exactly
//! (`Test_case_no`, `Compliance_Status`, `Interpreted_Rule`, ...), so the
//! original data files load without transformation.
//!
//! ## Forgiving Loads
//!
//! A display pipeline has no meaningful recovery from a malformed dataset,
//! so the loaders here never fail on data shape: anything that does not
//! deserialize becomes the empty dataset (with a `tracing::warn!`). Only
//! IO failures surface as errors.

pub mod loader;
pub mod model;

pub use model::{ComplianceDataset, PolicyRecord, RegulatorPolicies, TestCaseValidation};
