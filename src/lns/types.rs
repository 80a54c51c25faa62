//! Destruction/rebuild collaborator for LNS.

use crate::instance::Instance;
use crate::solution::Solution;
use rand::Rng;

/// Weighting a destruction/rebuild procedure starts each temperature stage
/// with.
pub const BASELINE_CONSTRUCTION_WEIGHT: [u32; 3] = [0, 1, 2];

/// Move-selection weighting owned by a [`DestroyRebuild`] procedure.
///
/// The procedure may adjust the weights while it runs; the LNS controller
/// resets them to [`BASELINE_CONSTRUCTION_WEIGHT`] at the end of every
/// temperature stage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructionWeight {
    weights: Vec<u32>,
}

impl ConstructionWeight {
    pub fn new() -> Self {
        Self {
            weights: BASELINE_CONSTRUCTION_WEIGHT.to_vec(),
        }
    }

    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut Vec<u32> {
        &mut self.weights
    }

    /// Restores the baseline weighting.
    pub fn reset(&mut self) {
        self.weights.clear();
        self.weights.extend_from_slice(&BASELINE_CONSTRUCTION_WEIGHT);
    }

    pub fn is_baseline(&self) -> bool {
        self.weights == BASELINE_CONSTRUCTION_WEIGHT
    }
}

impl Default for ConstructionWeight {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters handed to every destruction/rebuild call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestroyParams {
    /// Lower bound on the destruction size.
    pub betta_min: u32,
    /// Upper bound on the destruction size.
    pub betta_max: u32,
    /// Restricted candidate list length, as a percentage of candidates.
    pub rlc_length_percent: u32,
    /// Greediness of the rebuild, in `[0, 1]`.
    pub alpha: f64,
}

impl Default for DestroyParams {
    fn default() -> Self {
        Self {
            betta_min: 10,
            betta_max: 30,
            rlc_length_percent: 30,
            alpha: 0.3,
        }
    }
}

impl DestroyParams {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.betta_min > self.betta_max {
            return Err(format!(
                "betta_min ({}) must not exceed betta_max ({})",
                self.betta_min, self.betta_max
            ));
        }
        if self.rlc_length_percent > 100 {
            return Err(format!(
                "rlc_length_percent must be at most 100, got {}",
                self.rlc_length_percent
            ));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        Ok(())
    }
}

/// A destruction/rebuild procedure producing LNS candidates.
///
/// Implementations remove part of `current` and reinsert the removed
/// points, returning a complete candidate and its objective value. They
/// must not assume the candidate will be accepted.
///
/// # Examples
///
/// ```ignore
/// struct ReinsertWorst { weight: ConstructionWeight }
///
/// impl DestroyRebuild for ReinsertWorst {
///     fn destroy_rebuild<I: Instance + ?Sized, R: Rng>(
///         &mut self, instance: &I, current: &Solution, _current_fo: f64,
///         _best_fo: f64, params: &DestroyParams, rng: &mut R,
///     ) -> (Solution, f64) {
///         let candidate = remove_and_reinsert(instance, current, params, rng);
///         let fo = instance.calculate_fo(&candidate);
///         (candidate, fo)
///     }
///
///     fn construction_weight_mut(&mut self) -> &mut ConstructionWeight {
///         &mut self.weight
///     }
/// }
/// ```
pub trait DestroyRebuild {
    /// Produces a candidate neighbor of `current`.
    fn destroy_rebuild<I: Instance + ?Sized, R: Rng>(
        &mut self,
        instance: &I,
        current: &Solution,
        current_fo: f64,
        best_fo: f64,
        params: &DestroyParams,
        rng: &mut R,
    ) -> (Solution, f64);

    /// The weighting shared across calls, reset by the controller after
    /// each temperature stage.
    fn construction_weight_mut(&mut self) -> &mut ConstructionWeight;
}
