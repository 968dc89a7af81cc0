//! Per-ballot vote allocation and state-winner determination.
//!
//! Each ballot is one uniform(0,1) draw `r`, classified against the effective
//! shares H and T on a single number line: Harris if `r <= H`, Trump if
//! `H < r <= H + T`, abstention/other above that.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::types::Candidate;

/// Per-candidate ballot counts for one state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateVoteCount {
    pub harris_votes: u64,
    pub trump_votes: u64,
}

/// Simulate every ballot in a state and count votes per candidate.
pub fn allocate_state_votes(
    rng: &mut SmallRng,
    ballots_cast: u64,
    effective_harris_share: f64,
    effective_trump_share: f64,
) -> StateVoteCount {
    let trump_cutoff = effective_harris_share + effective_trump_share;
    let mut counts = StateVoteCount::default();
    for _ in 0..ballots_cast {
        let r: f64 = rng.random();
        if r <= effective_harris_share {
            counts.harris_votes += 1;
        } else if r <= trump_cutoff {
            counts.trump_votes += 1;
        }
        // else: abstention/other, not counted
    }
    counts
}

/// Decide the state winner from the vote counts.
///
/// Harris wins only on a strictly greater count; an exact tie — including
/// the zero-ballot case — goes to Trump. The asymmetry is a deliberate
/// behavioral contract carried over from the reference model and must not be
/// changed to `>=` or a coin flip.
pub fn decide_state_winner(counts: StateVoteCount) -> Candidate {
    if counts.harris_votes > counts.trump_votes {
        Candidate::Harris
    } else {
        Candidate::Trump
    }
}
