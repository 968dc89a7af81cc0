//! Core data structures: candidates, per-state input records, and per-trial
//! results.
//!
//! The central type is [`ElectionContext`], which holds the validated state
//! table and simulation configuration. It is built once from the input CSV
//! ([`crate::input::load_state_table`]) and then shared immutably across
//! threads during batch simulation.

use std::fmt;

use serde::Serialize;

/// One of the two candidates on the ballot.
///
/// Serialized and displayed as `"Harris"` / `"Trump"`, the strings written to
/// the result tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Candidate {
    Harris,
    Trump,
}

impl Candidate {
    pub fn name(&self) -> &'static str {
        match self {
            Candidate::Harris => "Harris",
            Candidate::Trump => "Trump",
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated per-state input record. Shares and rates are fractions in [0,1]
/// (the CSV supplies percents, divided by 100 at parse time).
#[derive(Clone, Debug)]
pub struct StateRecord {
    /// State name, unique across the input table.
    pub name: String,
    /// Registered-voter count, the ceiling on ballots cast.
    pub registered_voters: u64,
    /// Historical turnout fraction in [0,1].
    pub turnout_rate: f64,
    /// Harris poll share in [0,1].
    pub harris_share: f64,
    /// Trump poll share in [0,1]. The two shares need not sum to 1;
    /// the remainder is abstention/other.
    pub trump_share: f64,
    /// Std-dev of the zero-mean Gaussian poll error, share units, >= 0.
    pub margin_of_error: f64,
    /// Electoral-vote weight, > 0.
    pub electoral_votes: u32,
}

/// Ephemeral per-state trial record. Owned by the trial runner for the
/// duration of one trial and discarded after aggregation.
#[derive(Clone, Copy, Debug)]
pub struct TrialState {
    /// Ballots actually cast, sampled Binomial(registered_voters, turnout_rate).
    pub ballots_cast: u64,
    /// Harris share after optional perturbation; sum with Trump's <= 1.
    pub effective_harris_share: f64,
    /// Trump share after optional perturbation.
    pub effective_trump_share: f64,
    /// Winner of the state's simulated vote.
    pub state_winner: Candidate,
}

/// Outcome of one full election trial.
///
/// `state_winners` is index-aligned with the input state order; state names
/// live in the shared [`StateRecord`] slice.
#[derive(Clone, Debug)]
pub struct TrialResult {
    pub national_winner: Candidate,
    pub harris_electoral_votes: u32,
    pub trump_electoral_votes: u32,
    pub state_winners: Vec<Candidate>,
}

/// Accumulated results of a batch run: one [`TrialResult`] per trial, in
/// trial order. Appended incrementally, finalized once for output.
#[derive(Clone, Debug, Default)]
pub struct SimulationSummary {
    pub trials: Vec<TrialResult>,
}

impl SimulationSummary {
    pub fn with_capacity(num_trials: usize) -> Self {
        Self {
            trials: Vec::with_capacity(num_trials),
        }
    }

    pub fn push(&mut self, trial: TrialResult) {
        self.trials.push(trial);
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Ordered sequence of national winners, one per trial.
    pub fn national_winners(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.trials.iter().map(|t| t.national_winner)
    }

    pub fn harris_wins(&self) -> usize {
        self.national_winners()
            .filter(|&w| w == Candidate::Harris)
            .count()
    }

    pub fn trump_wins(&self) -> usize {
        self.national_winners()
            .filter(|&w| w == Candidate::Trump)
            .count()
    }
}

/// Validated state table plus simulation configuration, shared immutably
/// across all trials.
#[derive(Clone, Debug)]
pub struct ElectionContext {
    pub states: Vec<StateRecord>,
    /// When true, each trial perturbs poll shares by the state's margin of
    /// error before allocating ballots.
    pub add_polling_error: bool,
}

impl ElectionContext {
    pub fn new(states: Vec<StateRecord>, add_polling_error: bool) -> Self {
        Self {
            states,
            add_polling_error,
        }
    }

    /// Total electoral votes at stake across all states.
    pub fn total_electoral_votes(&self) -> u32 {
        self.states.iter().map(|s| s.electoral_votes).sum()
    }
}
