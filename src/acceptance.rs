//! Metropolis acceptance criterion shared by SA and LNS.

use rand::Rng;

/// Probability of accepting a move with cost change `delta` at `temperature`.
///
/// Non-worsening moves (`delta <= 0`) are always accepted.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else if temperature > 0.0 {
        (-delta / temperature).exp()
    } else {
        0.0
    }
}

/// Decides whether to accept a move, drawing a fresh uniform for worsening
/// moves.
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta <= 0.0 {
        return true;
    }
    rng.random_range(0.0..1.0) < acceptance_probability(delta, temperature)
}
