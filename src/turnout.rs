//! Turnout sampling: registered voters → ballots cast.
//!
//! Each registered voter independently shows up with probability
//! `turnout_rate`, so the ballot count is one draw from
//! Binomial(registered_voters, turnout_rate).

use rand::rngs::SmallRng;
use rand_distr::{Binomial, Distribution};

/// Sample the number of ballots cast in one state for one trial.
///
/// Degenerate inputs are valid: zero registered voters yields zero ballots,
/// turnout 0 or 1 yields 0 or `registered_voters`. A `turnout_rate` outside
/// [0,1] is rejected; `registered_voters` cannot be negative by type.
pub fn sample_ballots_cast(
    rng: &mut SmallRng,
    registered_voters: u64,
    turnout_rate: f64,
) -> Result<u64, String> {
    if !turnout_rate.is_finite() || !(0.0..=1.0).contains(&turnout_rate) {
        return Err(format!(
            "turnout rate must be in [0,1], got {}",
            turnout_rate
        ));
    }
    let dist = Binomial::new(registered_voters, turnout_rate)
        .map_err(|e| format!("binomial turnout sampler: {}", e))?;
    Ok(dist.sample(rng))
}
