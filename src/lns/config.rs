//! LNS configuration.

use super::types::DestroyParams;
use crate::sa::{validate_schedule, DEFAULT_MIN_TEMPERATURE};

/// Configuration for the LNS controller.
///
/// The annealing schedule matches SA: geometric cooling by `cooling_rate`
/// after every `iterations_per_temperature` candidates, stopping at
/// `min_temperature`. `destroy` is forwarded unchanged to the
/// destruction/rebuild procedure.
///
/// # Examples
///
/// ```
/// use mtsp_metaheur::lns::{DestroyParams, LnsConfig};
///
/// let config = LnsConfig::default()
///     .with_temperature(50.0, 0.9)
///     .with_iterations_per_temperature(100)
///     .with_destroy_params(DestroyParams {
///         betta_min: 5,
///         betta_max: 20,
///         rlc_length_percent: 25,
///         alpha: 0.2,
///     })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LnsConfig {
    /// Initial temperature `T0`.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1).
    pub cooling_rate: f64,

    /// Candidates evaluated at each temperature (`SAMax`).
    pub iterations_per_temperature: usize,

    /// Stop once the temperature is at or below this value.
    pub min_temperature: f64,

    /// Parameters for the destruction/rebuild procedure.
    pub destroy: DestroyParams,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for LnsConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            iterations_per_temperature: 100,
            min_temperature: DEFAULT_MIN_TEMPERATURE,
            destroy: DestroyParams::default(),
            seed: None,
        }
    }
}

impl LnsConfig {
    pub fn with_temperature(mut self, initial: f64, cooling_rate: f64) -> Self {
        self.initial_temperature = initial;
        self.cooling_rate = cooling_rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_destroy_params(mut self, params: DestroyParams) -> Self {
        self.destroy = params;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        validate_schedule(
            self.initial_temperature,
            self.cooling_rate,
            self.min_temperature,
        )?;
        self.destroy.validate()
    }
}
