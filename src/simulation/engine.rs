//! Trial engine — runs N election trials over the validated state table.
//!
//! One trial walks the state table in order: sample turnout, optionally
//! perturb the poll shares, allocate every ballot, then aggregate state
//! winners into electoral-vote totals. The driver repeats that N times with
//! an independently seeded RNG per trial, so sequential and parallel batches
//! produce identical summaries for the same base seed.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::ballots::{allocate_state_votes, decide_state_winner};
use crate::electoral::tally_electoral_votes;
use crate::polling::perturb_shares;
use crate::turnout::sample_ballots_cast;
use crate::types::{ElectionContext, SimulationSummary, StateRecord, TrialResult, TrialState};

/// Sequential driver prints progress every this many trials.
pub const PROGRESS_INTERVAL: usize = 100;

/// Simulate one state for one trial: turnout → shares → ballots → winner.
pub fn simulate_state(
    state: &StateRecord,
    add_polling_error: bool,
    rng: &mut SmallRng,
) -> Result<TrialState, String> {
    let ballots_cast = sample_ballots_cast(rng, state.registered_voters, state.turnout_rate)?;

    let (effective_harris_share, effective_trump_share) = if add_polling_error {
        perturb_shares(
            rng,
            state.harris_share,
            state.trump_share,
            state.margin_of_error,
        )?
    } else {
        // Disabled perturbation trusts the raw input shares unmodified, with
        // no renormalization even if they were to sum past 1.
        (state.harris_share, state.trump_share)
    };

    let counts = allocate_state_votes(
        rng,
        ballots_cast,
        effective_harris_share,
        effective_trump_share,
    );

    Ok(TrialState {
        ballots_cast,
        effective_harris_share,
        effective_trump_share,
        state_winner: decide_state_winner(counts),
    })
}

/// Run one full election trial, drawing all randomness from `rng`.
pub fn run_trial(ctx: &ElectionContext, rng: &mut SmallRng) -> Result<TrialResult, String> {
    let mut state_winners = Vec::with_capacity(ctx.states.len());
    for state in &ctx.states {
        let trial_state = simulate_state(state, ctx.add_polling_error, rng)?;
        state_winners.push(trial_state.state_winner);
    }

    let tally = tally_electoral_votes(&ctx.states, &state_winners);
    Ok(TrialResult {
        national_winner: tally.national_winner(),
        harris_electoral_votes: tally.harris,
        trump_electoral_votes: tally.trump,
        state_winners,
    })
}

/// RNG for trial `i` of a batch with base seed `seed`.
#[inline]
fn trial_rng(seed: u64, trial_index: usize) -> SmallRng {
    SmallRng::seed_from_u64(seed.wrapping_add(trial_index as u64))
}

/// Simulate N trials in parallel, one independently seeded RNG per trial.
pub fn simulate_batch(
    ctx: &ElectionContext,
    num_trials: usize,
    seed: u64,
) -> Result<SimulationSummary, String> {
    let trials: Vec<TrialResult> = (0..num_trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = trial_rng(seed, i);
            run_trial(ctx, &mut rng)
        })
        .collect::<Result<Vec<_>, String>>()?;
    Ok(SimulationSummary { trials })
}

/// Simulate N trials sequentially with periodic progress printing.
///
/// Uses the same per-trial seeding as [`simulate_batch`], so both drivers
/// produce identical summaries for the same inputs and base seed.
pub fn simulate_batch_sequential(
    ctx: &ElectionContext,
    num_trials: usize,
    seed: u64,
) -> Result<SimulationSummary, String> {
    let mut summary = SimulationSummary::with_capacity(num_trials);
    for i in 0..num_trials {
        if (i + 1) % PROGRESS_INTERVAL == 0 {
            println!("running trial {}", i + 1);
        }
        let mut rng = trial_rng(seed, i);
        summary.push(run_trial(ctx, &mut rng)?);
    }
    Ok(summary)
}
