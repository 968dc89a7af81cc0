//! # Electionsim — Monte Carlo electoral-college simulation
//!
//! Estimates the outcome distribution of a two-candidate, state-by-state
//! election by simulating individual voters. Each trial:
//!
//! 1. **Turnout** ([`turnout`]): each state's ballot count is one draw from
//!    Binomial(registered_voters, turnout_rate).
//! 2. **Polling error** ([`polling`], optional): each candidate's poll share
//!    is shifted by an independent zero-mean Gaussian with std-dev equal to
//!    the state's margin of error; if the shares then sum past 1 they are
//!    rescaled onto the simplex, ratio preserved.
//! 3. **Ballots** ([`ballots`]): every ballot is one uniform(0,1) draw,
//!    classified as Harris, Trump, or abstention against the effective
//!    shares; the state winner needs a strict majority of the two-way count,
//!    ties going to Trump.
//! 4. **Aggregation** ([`electoral`]): state winners collect their states'
//!    electoral votes; the national winner needs a strictly greater total,
//!    an electoral tie again going to Trump.
//!
//! The driver ([`simulation::engine`]) repeats this N times. Randomness is an
//! explicitly seeded [`rand::rngs::SmallRng`] handle threaded through every
//! component, with one independently seeded RNG per trial
//! (`seed + trial_index`), so batches are reproducible and trivially
//! parallel — the rayon batch and the sequential driver produce identical
//! summaries for the same base seed.
//!
//! The tie-break direction (Trump on equal counts at both the state and
//! national level) is a deliberate behavioral contract of the underlying
//! model, preserved exactly for reproducibility.
//!
//! Input is a per-state CSV table ([`input`]); results go to winner tables
//! in CSV and an aggregate statistics JSON ([`simulation::output`],
//! [`simulation::statistics`]).

pub mod ballots;
pub mod electoral;
pub mod env_config;
pub mod input;
pub mod polling;
pub mod simulation;
pub mod turnout;
pub mod types;
