#![deny(missing_docs)]

//! # regdash-core — Foundational Types for the Regdash Stack
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It has no internal crate dependencies — only `serde`, `serde_json`,
//! and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **One [`ComplianceStatus`] enum.** The compliance status set is
//!    closed: three variants, one definition, exhaustive `match` everywhere.
//!    Upstream strings that do not parse are excluded from tallies by the
//!    engine, never coerced into a variant.
//!
//! 2. **Newtype keys for deduplication.** A policy code is not globally
//!    unique — [`PolicyKey`] carries the full (domain, regulator, code)
//!    triple, and [`TestCaseKey`] extends it with the test case number.
//!    You cannot accidentally deduplicate on the bare code.
//!
//! 3. **[`RegdashError`] hierarchy.** Structured errors with `thiserror` —
//!    no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod error;
pub mod keys;
pub mod status;

// Re-export primary types at crate root for ergonomic imports.
pub use error::RegdashError;
pub use keys::{PolicyKey, TestCaseKey};
pub use status::{ComplianceStatus, COMPLIANCE_STATUS_COUNT};
