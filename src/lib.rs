// src/lib.rs

pub mod cleaning;
pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod results;

// Re-export common types for easier access
pub use config::{ReconcilerConfig, DEFAULT_MATCH_THRESHOLD};
pub use errors::ReconcileError;
pub use models::{MatchKind, MergedRecord, NormalizedName, ProfileRecord, RankingRecord};
pub use results::{FieldNullCounts, ReconcileStats};

// Re-export important functionality
pub use matching::name::{name_similarity, normalize_name};
pub use matching::reconcile::find_matches;
