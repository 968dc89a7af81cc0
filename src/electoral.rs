//! Electoral-vote aggregation: state winners → national winner.

use crate::types::{Candidate, StateRecord};

/// Electoral-vote totals for one trial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElectoralTally {
    pub harris: u32,
    pub trump: u32,
}

impl ElectoralTally {
    /// National winner for this tally.
    ///
    /// Same asymmetric tie-break as the state level: Harris needs a strictly
    /// greater total, an electoral-vote tie resolves to Trump.
    pub fn national_winner(&self) -> Candidate {
        if self.harris > self.trump {
            Candidate::Harris
        } else {
            Candidate::Trump
        }
    }
}

/// Sum each state's electoral votes by its winner.
///
/// `winners` must be index-aligned with `states`, one winner per state.
pub fn tally_electoral_votes(states: &[StateRecord], winners: &[Candidate]) -> ElectoralTally {
    debug_assert_eq!(states.len(), winners.len());
    let mut tally = ElectoralTally::default();
    for (state, winner) in states.iter().zip(winners) {
        match winner {
            Candidate::Harris => tally.harris += state.electoral_votes,
            Candidate::Trump => tally.trump += state.electoral_votes,
        }
    }
    tally
}
