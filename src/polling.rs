//! Polling-error perturbation.
//!
//! Adds one independent zero-mean Gaussian error per candidate to the raw
//! poll shares, std-dev = the state's margin of error. A perturbed share may
//! transiently leave [0,1]; only the *sum* invariant is enforced: if the two
//! effective shares add up to more than 1 they are rescaled simultaneously so
//! the sum becomes exactly 1, preserving their ratio.

use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};

/// Rescale a share pair whose sum exceeds 1 back onto the simplex.
/// Pairs summing to <= 1 pass through unchanged.
pub fn renormalize_if_excess(harris: f64, trump: f64) -> (f64, f64) {
    let sum = harris + trump;
    if sum > 1.0 {
        (harris / sum, trump / sum)
    } else {
        (harris, trump)
    }
}

/// Perturb both candidates' shares by independent Gaussian error draws and
/// enforce the sum invariant.
///
/// `margin_of_error = 0` degenerates to the raw shares (still renormalized
/// if the raw inputs sum past 1, since the perturbation step was applied).
pub fn perturb_shares(
    rng: &mut SmallRng,
    harris_share: f64,
    trump_share: f64,
    margin_of_error: f64,
) -> Result<(f64, f64), String> {
    let noise = Normal::new(0.0, margin_of_error)
        .map_err(|e| format!("poll error distribution: {}", e))?;
    let harris = harris_share + noise.sample(rng);
    let trump = trump_share + noise.sample(rng);
    Ok(renormalize_if_excess(harris, trump))
}
