// src/config.rs

use serde::{Deserialize, Serialize};

use crate::errors::ReconcileError;

// Minimum similarity score (0-100 scale) a fuzzy candidate must reach
// before a ranking row is paired with it
pub const DEFAULT_MATCH_THRESHOLD: u32 = 80;

/// Tunable knobs for a reconciliation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Fuzzy pairing cutoff on the 0-100 similarity scale
    pub match_threshold: u32,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }
}

impl ReconcilerConfig {
    /// Rejects out-of-range settings before any matching work starts.
    ///
    /// The threshold lives on the same 0-100 scale the similarity scores
    /// use; values above 100 would silently mark every row unmatched, so
    /// they are refused here instead.
    pub fn validate(&self) -> Result<(), ReconcileError> {
        if self.match_threshold > 100 {
            return Err(ReconcileError::Configuration(format!(
                "match_threshold must be within 0-100, got {}",
                self.match_threshold
            )));
        }
        Ok(())
    }
}
