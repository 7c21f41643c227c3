// src/errors.rs

use thiserror::Error;

/// Errors a reconciliation run can surface to the caller.
///
/// Per-field parse failures are deliberately not represented here: a raw
/// height or date that cannot be understood becomes a `None` in the merged
/// row, never an error. Only misconfiguration aborts a run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReconcileError {
    /// Rejected configuration, reported before any matching work starts
    #[error("configuration error: {0}")]
    Configuration(String),
}
