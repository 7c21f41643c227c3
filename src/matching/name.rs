// src/matching/name.rs

use std::collections::BTreeSet;

use strsim::jaro_winkler;

use crate::models::NormalizedName;

const SIMILARITY_SCALE: f64 = 100.0;

// Generational suffixes dropped from matching keys; the two sources
// disagree on whether to print them
const NAME_SUFFIXES: [&str; 6] = ["jr", "sr", "ii", "iii", "iv", "v"];

/// Builds the canonical matching key for a scraped player name.
///
/// Lower-cases, drops every character that is not a letter, whitespace or
/// hyphen (so "Shaquille O'Neal" and "shaquille oneal" collapse to the same
/// key), strips generational suffixes off the end of the name and collapses
/// runs of whitespace. Only trailing tokens are treated as suffixes:
/// initials that happen to spell one keep their key ("J.R. Smith" stays
/// "jr smith"). Applying it to its own output changes nothing.
pub fn normalize_name(raw: &str) -> NormalizedName {
    let lowered = raw.trim().to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace() || *c == '-')
        .collect();
    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    while tokens.last().is_some_and(|token| NAME_SUFFIXES.contains(token)) {
        tokens.pop();
    }
    NormalizedName(tokens.join(" "))
}

/// Scores how alike two normalized names are, on a 0-100 scale.
///
/// Symmetric, and insensitive to token order ("james lebron" scores 100
/// against "lebron james"). When one name's tokens are all contained in the
/// other's the score is also 100; that is what pairs "kobe bryant" with
/// "kobe bean bryant" when one source prints the middle name. Otherwise the
/// score is Jaro-Winkler over the token-sorted strings, so single-character
/// spelling drift ("akeem" for "hakeem") still lands in the high nineties
/// while names that merely share a surname do not.
pub fn name_similarity(a: &NormalizedName, b: &NormalizedName) -> u32 {
    if a == b {
        return 100;
    }
    if a.0.is_empty() || b.0.is_empty() {
        return 0;
    }

    let tokens_a: BTreeSet<&str> = a.0.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.0.split_whitespace().collect();
    if tokens_a.is_subset(&tokens_b) || tokens_b.is_subset(&tokens_a) {
        return 100;
    }

    let sorted_a = tokens_a.into_iter().collect::<Vec<_>>().join(" ");
    let sorted_b = tokens_b.into_iter().collect::<Vec<_>>().join(" ");
    let score = jaro_winkler(&sorted_a, &sorted_b) * SIMILARITY_SCALE;
    score.round().clamp(0.0, SIMILARITY_SCALE) as u32
}
