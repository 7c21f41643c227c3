// src/results.rs

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{MatchKind, MergedRecord};

/// Null counts for the canonical biographical fields of the merged output.
/// Counted over every output row, so unmatched rows show up in each field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldNullCounts {
    pub born_date: usize,
    pub born_location: usize,
    pub height: usize,
    pub debut: usize,
}

/// Statistics for one reconciliation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileStats {
    pub total_ranking_rows: usize,
    pub total_profiles: usize,
    pub exact_matches: usize,
    pub fuzzy_matches: usize,
    pub unmatched: usize,
    pub total_matches: usize,
    pub match_percentage: f64,
    pub avg_fuzzy_score: f64,
    pub null_counts: FieldNullCounts,
    pub elapsed: Duration,
}

impl ReconcileStats {
    /// Derives the run statistics from the finished merge output
    pub fn from_run(total_profiles: usize, merged: &[MergedRecord], elapsed: Duration) -> Self {
        let exact_matches = merged
            .iter()
            .filter(|row| row.match_kind == MatchKind::Exact)
            .count();
        let fuzzy_rows: Vec<_> = merged
            .iter()
            .filter(|row| row.match_kind == MatchKind::Fuzzy)
            .collect();
        let fuzzy_matches = fuzzy_rows.len();
        let unmatched = merged.len() - exact_matches - fuzzy_matches;
        let total_matches = exact_matches + fuzzy_matches;

        let match_percentage = if merged.is_empty() {
            0.0
        } else {
            total_matches as f64 / merged.len() as f64 * 100.0
        };
        let avg_fuzzy_score = if fuzzy_rows.is_empty() {
            0.0
        } else {
            fuzzy_rows
                .iter()
                .filter_map(|row| row.match_score)
                .sum::<u32>() as f64
                / fuzzy_matches as f64
        };

        let mut null_counts = FieldNullCounts::default();
        for row in merged {
            if row.born_date.is_none() {
                null_counts.born_date += 1;
            }
            if row.born_location.is_none() {
                null_counts.born_location += 1;
            }
            if row.height.is_none() {
                null_counts.height += 1;
            }
            if row.debut.is_none() {
                null_counts.debut += 1;
            }
        }

        Self {
            total_ranking_rows: merged.len(),
            total_profiles,
            exact_matches,
            fuzzy_matches,
            unmatched,
            total_matches,
            match_percentage,
            avg_fuzzy_score,
            null_counts,
            elapsed,
        }
    }
}

/// Prints a human-readable report of the reconciliation run
pub fn print_report(stats: &ReconcileStats) {
    println!("\n========== NAME RECONCILIATION REPORT ==========");

    println!("\n--- SOURCE TOTALS ---");
    println!("Ranking rows processed: {}", stats.total_ranking_rows);
    println!("Profiles available: {}", stats.total_profiles);

    println!("\n--- MATCHING ---");
    println!("Exact matches: {}", stats.exact_matches);
    println!("Fuzzy matches: {}", stats.fuzzy_matches);
    println!("Unmatched rows: {}", stats.unmatched);
    println!("Match rate: {:.1}%", stats.match_percentage);
    println!("Average fuzzy score: {:.1}", stats.avg_fuzzy_score);

    println!("\n--- DATA QUALITY (null canonical fields) ---");
    println!("born_date: {}", stats.null_counts.born_date);
    println!("born_location: {}", stats.null_counts.born_location);
    println!("height: {}", stats.null_counts.height);
    println!("debut: {}", stats.null_counts.debut);

    println!("\n--- TIMING ---");
    println!("Total runtime: {:.2?}", stats.elapsed);

    println!("\n================================================\n");
}
