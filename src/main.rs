// src/main.rs

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;

use reconciler_lib::{find_matches, results, ProfileRecord, RankingRecord, ReconcilerConfig};

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Starting basketball name reconciliation run");
    let run_start = Instant::now();
    let mut phase_times: HashMap<String, Duration> = HashMap::new();

    // Phase 1: Load the two scraped sources
    info!("Phase 1: Loading scraped sources");
    let phase1_start = Instant::now();
    let rankings: Vec<RankingRecord> =
        serde_json::from_str(include_str!("../data/sample_rankings.json"))
            .context("Failed to parse bundled ranking rows")?;
    let profiles: Vec<ProfileRecord> =
        serde_json::from_str(include_str!("../data/sample_profiles.json"))
            .context("Failed to parse bundled profile rows")?;
    info!(
        "Loaded {} ranking rows and {} profiles",
        rankings.len(),
        profiles.len()
    );
    phase_times.insert("source_loading".to_string(), phase1_start.elapsed());

    // Phase 2: Reconcile and merge
    info!("Phase 2: Reconciling names and merging records");
    let phase2_start = Instant::now();
    let config = ReconcilerConfig::default();
    let (merged, stats) =
        find_matches(&rankings, &profiles, &config).context("Reconciliation run failed")?;
    phase_times.insert("reconciliation".to_string(), phase2_start.elapsed());

    for row in merged.iter().take(5) {
        info!(
            "Merged row {}: {} ({}) born {} height {}",
            row.rank,
            row.name,
            row.match_kind.as_str(),
            row.born_date.as_deref().unwrap_or("-"),
            row.height.as_deref().unwrap_or("-"),
        );
    }

    for (phase, duration) in &phase_times {
        info!("Phase '{}' took {:.2?}", phase, duration);
    }
    info!("Run finished in {:.2?}", run_start.elapsed());

    results::print_report(&stats);

    Ok(())
}
