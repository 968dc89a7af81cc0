//! End-to-end simulation tests: CSV table in, winner tables and statistics
//! out, plus the contract scenarios for the tie-break and degenerate inputs.

use electionsim::input::parse_state_table;
use electionsim::simulation::{
    aggregate_statistics, save_national_winners, save_state_winners, simulate_batch,
    simulate_batch_sequential,
};
use electionsim::types::{Candidate, ElectionContext};

const HEADER: &str = "State,Total Registered Voters,Voter Turnout Percent (2020),\
                      Poll Numbers for Harris,Poll Numbers for Trump,Margin of Error,\
                      Electoral Votes";

fn battleground_table() -> String {
    format!(
        "{}\n\
         Pennsylvania,2000,70.0,48.2,47.9,3.2,19\n\
         Georgia,1800,67.8,47.5,48.4,2.9,16\n\
         Arizona,1500,65.9,47.0,48.7,2.7,11\n\
         Wisconsin,1200,72.3,48.8,47.6,3.1,10\n",
        HEADER
    )
}

#[test]
fn test_full_pipeline_invariants() {
    let states = parse_state_table(&battleground_table()).unwrap();
    let ctx = ElectionContext::new(states, true);
    let total_ev = ctx.total_electoral_votes();

    let summary = simulate_batch(&ctx, 100, 42).unwrap();
    assert_eq!(summary.len(), 100);

    for trial in &summary.trials {
        // Exactly one winner per state.
        assert_eq!(trial.state_winners.len(), ctx.states.len());
        // Electoral totals partition the full EV pool.
        assert_eq!(
            trial.harris_electoral_votes + trial.trump_electoral_votes,
            total_ev
        );
        // National winner matches the strict-majority rule, ties to Trump.
        let expected = if trial.harris_electoral_votes > trial.trump_electoral_votes {
            Candidate::Harris
        } else {
            Candidate::Trump
        };
        assert_eq!(trial.national_winner, expected);
    }

    assert_eq!(summary.harris_wins() + summary.trump_wins(), 100);
}

#[test]
fn test_fixed_seed_reproducibility() {
    let states = parse_state_table(&battleground_table()).unwrap();
    let ctx = ElectionContext::new(states, true);

    let a = simulate_batch(&ctx, 50, 1234).unwrap();
    let b = simulate_batch(&ctx, 50, 1234).unwrap();
    let c = simulate_batch_sequential(&ctx, 50, 1234).unwrap();

    for ((ta, tb), tc) in a.trials.iter().zip(&b.trials).zip(&c.trials) {
        assert_eq!(ta.national_winner, tb.national_winner);
        assert_eq!(ta.state_winners, tb.state_winners);
        assert_eq!(ta.national_winner, tc.national_winner);
        assert_eq!(ta.state_winners, tc.state_winners);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let states = parse_state_table(&battleground_table()).unwrap();
    let ctx = ElectionContext::new(states, true);

    let a = simulate_batch(&ctx, 50, 1).unwrap();
    let b = simulate_batch(&ctx, 50, 2).unwrap();
    let identical = a
        .trials
        .iter()
        .zip(&b.trials)
        .all(|(ta, tb)| ta.state_winners == tb.state_winners);
    assert!(!identical, "different seeds produced identical batches");
}

#[test]
fn test_electoral_tie_scenario_goes_to_trump() {
    // One state forced to each candidate via 100/0 shares, equal 5 EV each.
    let csv = format!(
        "{}\nSolid Harris,1000,100.0,100.0,0.0,0.0,5\nSolid Trump,1000,100.0,0.0,100.0,0.0,5\n",
        HEADER
    );
    let states = parse_state_table(&csv).unwrap();
    let ctx = ElectionContext::new(states, false);

    let summary = simulate_batch(&ctx, 20, 42).unwrap();
    for trial in &summary.trials {
        assert_eq!(trial.state_winners[0], Candidate::Harris);
        assert_eq!(trial.state_winners[1], Candidate::Trump);
        assert_eq!(trial.harris_electoral_votes, 5);
        assert_eq!(trial.trump_electoral_votes, 5);
        assert_eq!(trial.national_winner, Candidate::Trump);
    }
}

#[test]
fn test_zero_voter_state_goes_to_trump() {
    let csv = format!("{}\nGhost Town,0,100.0,100.0,0.0,0.0,3\n", HEADER);
    let states = parse_state_table(&csv).unwrap();
    let ctx = ElectionContext::new(states, false);

    let summary = simulate_batch(&ctx, 10, 42).unwrap();
    for trial in &summary.trials {
        assert_eq!(trial.state_winners[0], Candidate::Trump);
        assert_eq!(trial.national_winner, Candidate::Trump);
    }
}

#[test]
fn test_landslide_scenario_statistical() {
    // 1000 voters, full turnout, 60/40, no perturbation: Harris should take
    // the state in at least 95% of 200 single-trial runs.
    let csv = format!("{}\nLandslide,1000,100.0,60.0,40.0,0.0,10\n", HEADER);
    let states = parse_state_table(&csv).unwrap();
    let ctx = ElectionContext::new(states, false);

    let mut harris = 0;
    for seed in 0..200u64 {
        let summary = simulate_batch(&ctx, 1, seed).unwrap();
        if summary.trials[0].national_winner == Candidate::Harris {
            harris += 1;
        }
    }
    assert!(
        harris >= 190,
        "Harris won only {}/200 single-trial runs",
        harris
    );
}

#[test]
fn test_statistics_consistent_with_summary() {
    let states = parse_state_table(&battleground_table()).unwrap();
    let ctx = ElectionContext::new(states, true);
    let summary = simulate_batch(&ctx, 100, 42).unwrap();

    let stats = aggregate_statistics(&summary, &ctx.states, 42, true);
    assert_eq!(stats.num_trials, 100);
    assert_eq!(stats.harris_wins, summary.harris_wins() as u64);
    assert_eq!(stats.trump_wins, summary.trump_wins() as u64);
    assert_eq!(stats.harris_wins + stats.trump_wins, 100);
    assert_eq!(stats.total_electoral_votes, ctx.total_electoral_votes());
    assert_eq!(stats.states.len(), ctx.states.len());
    for state_stats in &stats.states {
        let rate_sum = state_stats.harris_win_rate + state_stats.trump_win_rate;
        assert!((rate_sum - 1.0).abs() < 1e-9);
    }
    assert!(stats.harris_electoral_votes.min <= stats.harris_electoral_votes.max);
    assert!(stats.harris_electoral_votes.mean <= ctx.total_electoral_votes() as f64);
}

#[test]
fn test_output_files_roundtrip() {
    let states = parse_state_table(&battleground_table()).unwrap();
    let ctx = ElectionContext::new(states, true);
    let summary = simulate_batch(&ctx, 5, 42).unwrap();

    let dir = std::env::temp_dir().join("electionsim_e2e_output");
    let state_path = dir.join("state_winners.csv");
    let national_path = dir.join("national_winners.csv");
    save_state_winners(&summary, &ctx.states, state_path.to_str().unwrap());
    save_national_winners(&summary, national_path.to_str().unwrap());

    let state_csv = std::fs::read_to_string(&state_path).unwrap();
    let national_csv = std::fs::read_to_string(&national_path).unwrap();

    // Header plus one row per trial per state / per trial.
    assert_eq!(state_csv.lines().count(), 1 + 5 * ctx.states.len());
    assert_eq!(national_csv.lines().count(), 1 + 5);
    assert!(state_csv.starts_with("trial,state,winner\n"));
    assert!(state_csv.contains("1,Pennsylvania,"));
    assert!(national_csv.starts_with("trial,winner\n"));

    // Every winner field is one of the two candidates.
    for line in national_csv.lines().skip(1) {
        let winner = line.split(',').nth(1).unwrap();
        assert!(winner == "Harris" || winner == "Trump");
    }

    let _ = std::fs::remove_dir_all(dir);
}
