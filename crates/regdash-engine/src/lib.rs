#![deny(missing_docs)]

//! # regdash-engine — Compliance Aggregation Engine
//!
//! Converts the nested compliance dataset plus a set of view parameters
//! into flat, display-ready summary statistics. One engine, one contract:
//! the original dashboard computed these numbers independently in three
//! presentation surfaces; every surface now calls [`aggregate`].
//!
//! ## Data Flow
//!
//! ```text
//! ComplianceDataset + ViewParams
//!   → domain/regulator/policy/test-case traversal   (engine)
//!   → category tallies + unique-entity sets          (tally, keys)
//!   → percentages + override reconciliation          (tally)
//!   → SummaryResult                                  (summary)
//! ```
//!
//! ## Contract
//!
//! - Pure: the engine never mutates its input and returns identical output
//!   for identical input. No I/O, no suspension, no shared state — safe to
//!   call from concurrent rendering passes.
//! - Forgiving: data-shape problems never fault. Unknown statuses are
//!   excluded from tallies; an empty dataset aggregates to all zeros.
//! - Exact: when a fixed total override is set, the reconciled category
//!   counts sum to the override exactly, with the documented tie-break
//!   (Compliant > Partial Compliance > Non-Compliant).

pub mod engine;
pub mod summary;
pub mod tally;
pub mod view;

// Re-export primary types.
pub use engine::aggregate;
pub use summary::{DomainSummary, SummaryResult};
pub use tally::{percentage, CategoryCounts, CategoryPercentages};
pub use view::{AssessmentRun, RunConfig, ViewParams};
