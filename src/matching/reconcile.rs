// src/matching/reconcile.rs

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info};

use crate::cleaning::{normalize_date, normalize_height, normalize_location};
use crate::config::ReconcilerConfig;
use crate::errors::ReconcileError;
use crate::matching::name::{name_similarity, normalize_name};
use crate::models::{MatchKind, MergedRecord, NormalizedName, ProfileRecord, RankingRecord};
use crate::results::ReconcileStats;

/// Pairs every ranking row with at most one biographical profile and
/// merges the pair into an output row with canonicalized fields.
///
/// Rows are processed in ranking order. An exact key match is taken first
/// through a hash lookup; otherwise the highest-scoring unconsumed profile
/// wins if it reaches the configured threshold, ties going to the profile
/// that appeared first in the input. The match kind records which pass
/// paired the row, so a duplicate-key profile reached by the scoring pass
/// counts as fuzzy even at score 100. Names that normalize to an empty key
/// pair with nothing on either side. Each profile backs at most one row,
/// and every ranking row appears in the output exactly once, unmatched
/// rows included. An empty profile batch simply leaves every row
/// unmatched.
///
/// Pairing is greedy: an earlier row keeps its profile even when a later
/// row would have scored higher against it, which can pair sub-optimally
/// when several rows compete for the same profile.
pub fn find_matches(
    rankings: &[RankingRecord],
    profiles: &[ProfileRecord],
    config: &ReconcilerConfig,
) -> Result<(Vec<MergedRecord>, ReconcileStats), ReconcileError> {
    config.validate()?;

    info!(
        "Starting name reconciliation of {} ranking rows against {} profiles (threshold: {})...",
        rankings.len(),
        profiles.len(),
        config.match_threshold
    );
    let start_time = Instant::now();

    let profile_keys: Vec<NormalizedName> = profiles
        .iter()
        .map(|profile| normalize_name(&profile.name))
        .collect();

    // Earliest profile wins when two share a key; empty keys stay out of
    // the index
    let mut exact_index: HashMap<&NormalizedName, usize> = HashMap::new();
    for (idx, key) in profile_keys.iter().enumerate() {
        if key.0.is_empty() {
            continue;
        }
        exact_index.entry(key).or_insert(idx);
    }

    let mut consumed = vec![false; profiles.len()];
    let mut merged = Vec::with_capacity(rankings.len());

    for ranking in rankings {
        let ranking_key = normalize_name(&ranking.name);

        // Nothing left of the name after normalization: never pair it
        if ranking_key.0.is_empty() {
            debug!(
                "Rank {} name '{}' normalizes to nothing, leaving unmatched",
                ranking.rank, ranking.name
            );
            merged.push(merge_pair(ranking, None));
            continue;
        }

        if let Some(&idx) = exact_index.get(&ranking_key) {
            if !consumed[idx] {
                consumed[idx] = true;
                debug!("Exact name match for rank {}: '{}'", ranking.rank, ranking.name);
                merged.push(merge_pair(
                    ranking,
                    Some((&profiles[idx], MatchKind::Exact, 100)),
                ));
                continue;
            }
        }

        let mut best_idx = None;
        let mut best_score = 0;
        for (idx, key) in profile_keys.iter().enumerate() {
            if consumed[idx] || key.0.is_empty() {
                continue;
            }
            let score = name_similarity(&ranking_key, key);
            // Strict comparison keeps the earliest profile on ties
            if score > best_score {
                best_score = score;
                best_idx = Some(idx);
            }
        }

        match best_idx {
            Some(idx) if best_score >= config.match_threshold => {
                consumed[idx] = true;
                debug!(
                    "Fuzzy match for rank {}: '{}' -> '{}' (score: {})",
                    ranking.rank, ranking.name, profiles[idx].name, best_score
                );
                merged.push(merge_pair(
                    ranking,
                    Some((&profiles[idx], MatchKind::Fuzzy, best_score)),
                ));
            }
            _ => {
                debug!(
                    "No profile reached the threshold for rank {}: '{}' (best: {})",
                    ranking.rank, ranking.name, best_score
                );
                merged.push(merge_pair(ranking, None));
            }
        }
    }

    let stats = ReconcileStats::from_run(profiles.len(), &merged, start_time.elapsed());
    info!(
        "Name reconciliation complete in {:.2?}: {} exact, {} fuzzy, {} unmatched ({:.1}% matched)",
        stats.elapsed, stats.exact_matches, stats.fuzzy_matches, stats.unmatched, stats.match_percentage
    );

    Ok((merged, stats))
}

/// Joins one ranking row with its paired profile (or none), rewriting the
/// biographical fields into canonical form. Fields that fail to parse
/// become `None` rather than failing the run.
fn merge_pair(
    ranking: &RankingRecord,
    paired: Option<(&ProfileRecord, MatchKind, u32)>,
) -> MergedRecord {
    match paired {
        Some((profile, kind, score)) => MergedRecord {
            rank: ranking.rank,
            name: ranking.name.clone(),
            points: ranking.points,
            match_kind: kind,
            match_score: Some(score),
            profile_name: Some(profile.name.clone()),
            position: profile.position.clone(),
            shoots: profile.shoots.clone(),
            height: profile.height.as_deref().and_then(normalize_height),
            weight: profile.weight.clone(),
            born_date: profile.born_date.as_deref().and_then(normalize_date),
            born_location: profile
                .born_location
                .as_deref()
                .and_then(normalize_location),
            debut: profile.debut.as_deref().and_then(normalize_date),
            career_length: profile.career_length.clone(),
        },
        None => MergedRecord {
            rank: ranking.rank,
            name: ranking.name.clone(),
            points: ranking.points,
            match_kind: MatchKind::Unmatched,
            match_score: None,
            profile_name: None,
            position: None,
            shoots: None,
            height: None,
            weight: None,
            born_date: None,
            born_location: None,
            debut: None,
            career_length: None,
        },
    }
}
