// src/models.rs

use serde::{Deserialize, Serialize};

//------------------------------------------------------------------------------
// IDENTIFIER TYPES
//------------------------------------------------------------------------------
// Using newtype pattern so matching keys cannot be mixed up with the raw
// scraped names they were derived from

/// Canonical lower-cased, punctuation-stripped player name used as the
/// matching key. Produced only by `matching::name::normalize_name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedName(pub String);

impl NormalizedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//------------------------------------------------------------------------------
// CORE DOMAIN MODELS
//------------------------------------------------------------------------------

/// One row of the performance ranking source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingRecord {
    /// Position in the ranking; positive and unique within a batch
    pub rank: u32,

    /// Player name as scraped, arbitrary capitalization and punctuation
    pub name: String,

    /// Non-negative career performance score
    pub points: f64,
}

/// One biographical profile row, immutable once scraped
///
/// Every field except the name is free text in whatever shape the source
/// page used; canonicalization happens at merge time, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Player name as scraped
    pub name: String,

    /// Playing position (e.g. "Small Forward")
    pub position: Option<String>,

    /// Shooting hand (e.g. "Right")
    pub shoots: Option<String>,

    /// Height as scraped; multiple unit and format conventions
    pub height: Option<String>,

    /// Weight as scraped (e.g. "250lb")
    pub weight: Option<String>,

    /// Birth date as scraped; multiple textual formats
    pub born_date: Option<String>,

    /// Birth place as scraped, often with a leading "in " artifact
    pub born_location: Option<String>,

    /// League debut date as scraped
    pub debut: Option<String>,

    /// Career span (e.g. "21 years")
    pub career_length: Option<String>,
}

/// Which pass of the reconciliation paired a merged row with its profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MatchKind {
    /// Paired by the exact-key lookup
    Exact,

    /// Paired by the scoring pass at or above the configured threshold
    Fuzzy,

    /// No candidate reached the threshold; biographical fields are None
    Unmatched,
}

impl MatchKind {
    /// Converts the enum to a string representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::Unmatched => "unmatched",
        }
    }
}

/// One ranking row joined with at most one profile, biographical fields
/// rewritten into canonical form.
///
/// Created once per reconciliation run and never mutated afterwards; the
/// output sink is its only consumer. A `None` in a canonical field means
/// either the row went unmatched or the raw value failed to parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedRecord {
    /// Rank carried over from the ranking row
    pub rank: u32,

    /// Player name as it appeared in the ranking source
    pub name: String,

    /// Performance score carried over from the ranking row
    pub points: f64,

    /// How the profile pairing was made
    pub match_kind: MatchKind,

    /// Similarity score of the pairing (100 for exact); None when unmatched
    pub match_score: Option<u32>,

    /// Profile name as scraped, kept for auditing the pairing
    pub profile_name: Option<String>,

    /// Playing position, carried through unchanged
    pub position: Option<String>,

    /// Shooting hand, carried through unchanged
    pub shoots: Option<String>,

    /// Canonical feet-inches height (e.g. "6-9")
    pub height: Option<String>,

    /// Weight, carried through unchanged
    pub weight: Option<String>,

    /// Canonical ISO birth date (YYYY-MM-DD)
    pub born_date: Option<String>,

    /// Birth place in "City, Region" form
    pub born_location: Option<String>,

    /// Canonical ISO league debut date (YYYY-MM-DD)
    pub debut: Option<String>,

    /// Career span, carried through unchanged
    pub career_length: Option<String>,
}
