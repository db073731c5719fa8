//! # Dataset Loading
//!
//! Loaders that turn JSON text, values, or files into a
//! [`ComplianceDataset`].
//!
//! Data-shape failures degrade to the empty dataset instead of erroring:
//! the consuming summary has no recovery path beyond showing zeros, and an
//! empty dataset aggregates to exactly that. IO failures (missing file,
//! permission) are real operational errors and do propagate.

use std::path::Path;

use regdash_core::RegdashError;

use crate::model::ComplianceDataset;

impl ComplianceDataset {
    /// Build a dataset from an in-memory JSON value.
    ///
    /// A value that does not match the expected nesting yields the empty
    /// dataset, never an error.
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::warn!(error = %e, "malformed compliance dataset; treating as empty");
                Self::default()
            }
        }
    }

    /// Parse a dataset from JSON text.
    ///
    /// Syntax errors and shape mismatches both yield the empty dataset.
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                tracing::warn!(error = %e, "unparseable compliance dataset JSON; treating as empty");
                Self::default()
            }
        }
    }

    /// Load a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegdashError::Io`] if the file cannot be read. Content
    /// problems do not error; they yield the empty dataset.
    pub fn from_path(path: &Path) -> Result<Self, RegdashError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&text))
    }
}
