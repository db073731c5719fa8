//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the regdash stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Data-shape problems in the compliance dataset are deliberately NOT
//! errors: a display pipeline has nothing useful to do with a partial-data
//! fault, so malformed datasets degrade to empty ones at the loading layer.
//! The variants here cover the remaining genuinely fatal conditions:
//! unreadable files, invalid run configuration, and contract violations.

use thiserror::Error;

/// Top-level error type for the regdash stack.
#[derive(Error, Debug)]
pub enum RegdashError {
    /// A compliance status string outside the closed three-value set.
    #[error("unknown compliance status: {0:?}")]
    UnknownStatus(String),

    /// Assessment-run configuration is invalid or references missing data.
    #[error("run configuration error: {0}")]
    RunConfig(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
