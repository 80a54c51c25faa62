//! SA configuration.

/// Temperature below which annealing stops.
pub const DEFAULT_MIN_TEMPERATURE: f64 = 0.0001;

/// Configuration for the Simulated Annealing controller.
///
/// Cooling is geometric: after every stage of
/// `iterations_per_temperature` moves, `T <- cooling_rate * T`. The run
/// ends once `T <= min_temperature`.
///
/// # Examples
///
/// ```
/// use mtsp_metaheur::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.95)
///     .with_iterations_per_temperature(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature `T0`.
    pub initial_temperature: f64,

    /// Geometric cooling factor `alpha` in (0, 1).
    pub cooling_rate: f64,

    /// Moves evaluated at each temperature (`SAMax`).
    pub iterations_per_temperature: usize,

    /// Stop once the temperature is at or below this value.
    pub min_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            iterations_per_temperature: 100,
            min_temperature: DEFAULT_MIN_TEMPERATURE,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
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
        )
    }
}

/// Checks a geometric annealing schedule. Shared with LNS.
pub(crate) fn validate_schedule(initial: f64, cooling_rate: f64, min: f64) -> Result<(), String> {
    if initial <= 0.0 {
        return Err("initial_temperature must be positive".into());
    }
    if min <= 0.0 {
        return Err("min_temperature must be positive".into());
    }
    if min >= initial {
        return Err("min_temperature must be less than initial_temperature".into());
    }
    if cooling_rate <= 0.0 || cooling_rate >= 1.0 {
        return Err(format!(
            "cooling_rate must be in (0, 1), got {cooling_rate}"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 100.0).abs() < 1e-10);
        assert!((config.min_temperature - 0.0001).abs() < 1e-15);
        assert_eq!(config.iterations_per_temperature, 100);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(SaConfig::default().with_cooling_rate(1.5).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(1.0).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(0.0).validate().is_err());
    }
}
