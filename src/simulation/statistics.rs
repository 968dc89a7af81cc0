//! Statistics aggregation from simulation results.
//!
//! Computes national win counts/rates, electoral-vote distribution summary,
//! and per-state win rates from a finished [`SimulationSummary`].

use serde::Serialize;

use crate::types::{Candidate, SimulationSummary, StateRecord};

#[derive(Serialize)]
pub struct ElectionStatistics {
    pub num_trials: u64,
    pub seed: u64,
    pub polling_error_enabled: bool,
    pub total_electoral_votes: u32,
    pub harris_wins: u64,
    pub trump_wins: u64,
    pub harris_win_rate: f64,
    pub trump_win_rate: f64,
    pub harris_electoral_votes: EvDistribution,
    pub trump_electoral_votes: EvDistribution,
    pub states: Vec<StateStatistics>,
}

/// Summary of one candidate's per-trial electoral-vote totals.
#[derive(Serialize)]
pub struct EvDistribution {
    pub mean: f64,
    pub min: u32,
    pub max: u32,
}

#[derive(Serialize)]
pub struct StateStatistics {
    pub name: String,
    pub electoral_votes: u32,
    pub harris_win_rate: f64,
    pub trump_win_rate: f64,
}

fn ev_distribution<F>(summary: &SimulationSummary, ev: F) -> EvDistribution
where
    F: Fn(&crate::types::TrialResult) -> u32,
{
    let n = summary.len().max(1) as f64;
    let sum: u64 = summary.trials.iter().map(|t| ev(t) as u64).sum();
    EvDistribution {
        mean: sum as f64 / n,
        min: summary.trials.iter().map(&ev).min().unwrap_or(0),
        max: summary.trials.iter().map(&ev).max().unwrap_or(0),
    }
}

/// Aggregate a finished batch into serializable statistics.
///
/// `states` must be the table the summary was simulated against (per-state
/// rates are joined by index).
pub fn aggregate_statistics(
    summary: &SimulationSummary,
    states: &[StateRecord],
    seed: u64,
    polling_error_enabled: bool,
) -> ElectionStatistics {
    let num_trials = summary.len() as u64;
    let n = num_trials.max(1) as f64;

    let harris_wins = summary.harris_wins() as u64;
    let trump_wins = summary.trump_wins() as u64;

    let mut state_harris_wins = vec![0u64; states.len()];
    for trial in &summary.trials {
        for (i, winner) in trial.state_winners.iter().enumerate() {
            if *winner == Candidate::Harris {
                state_harris_wins[i] += 1;
            }
        }
    }

    let states = states
        .iter()
        .zip(&state_harris_wins)
        .map(|(state, &wins)| StateStatistics {
            name: state.name.clone(),
            electoral_votes: state.electoral_votes,
            harris_win_rate: wins as f64 / n,
            trump_win_rate: (num_trials - wins) as f64 / n,
        })
        .collect();

    ElectionStatistics {
        num_trials,
        seed,
        polling_error_enabled,
        total_electoral_votes: summary
            .trials
            .first()
            .map(|t| t.harris_electoral_votes + t.trump_electoral_votes)
            .unwrap_or(0),
        harris_wins,
        trump_wins,
        harris_win_rate: harris_wins as f64 / n,
        trump_win_rate: trump_wins as f64 / n,
        harris_electoral_votes: ev_distribution(summary, |t| t.harris_electoral_votes),
        trump_electoral_votes: ev_distribution(summary, |t| t.trump_electoral_votes),
        states,
    }
}

/// Write statistics as pretty-printed JSON, creating parent directories.
pub fn save_statistics(stats: &ElectionStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}
