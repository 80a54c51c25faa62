//! BRKGA configuration.

use super::types::PercentRange;

/// Configuration for the BRKGA engine.
///
/// All three probabilities are integer percentage ranges that are
/// resampled during the run: the elite percentage once per generation, the
/// inheritance and mutation percentages once per offspring gene.
///
/// # Examples
///
/// ```
/// use mtsp_metaheur::brkga::{BrkgaConfig, PercentRange};
///
/// let config = BrkgaConfig::default()
///     .with_population_size(200)
///     .with_elite_percent(PercentRange::new(10, 20))
///     .with_elite_inheritance_percent(PercentRange::new(60, 80))
///     .with_mutation_percent(PercentRange::new(5, 10))
///     .with_max_generations(300)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrkgaConfig {
    /// Population size `p`, kept constant across generations.
    pub population_size: usize,

    /// Elite share of the population, `[pe_min, pe_max]`.
    pub elite_percent: PercentRange,

    /// Per-gene elite inheritance threshold, `[rhoe_min, rhoe_max]`.
    pub elite_inheritance_percent: PercentRange,

    /// Per-gene mutation threshold, `[pm_min, pm_max]`.
    pub mutation_percent: PercentRange,

    /// Number of generations to evolve.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for BrkgaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            elite_percent: PercentRange::new(10, 25),
            elite_inheritance_percent: PercentRange::new(60, 80),
            mutation_percent: PercentRange::new(5, 15),
            max_generations: 500,
            seed: None,
        }
    }
}

impl BrkgaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_elite_percent(mut self, range: PercentRange) -> Self {
        self.elite_percent = range;
        self
    }

    pub fn with_elite_inheritance_percent(mut self, range: PercentRange) -> Self {
        self.elite_inheritance_percent = range;
        self
    }

    pub fn with_mutation_percent(mut self, range: PercentRange) -> Self {
        self.mutation_percent = range;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Elite ranges of `0` or `100` percent are allowed; the engine handles
    /// an empty elite or an all-elite population.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        self.elite_percent.validate("elite_percent")?;
        self.elite_inheritance_percent
            .validate("elite_inheritance_percent")?;
        self.mutation_percent.validate("mutation_percent")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrkgaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.elite_percent, PercentRange::new(10, 25));
        assert_eq!(config.max_generations, 500);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(BrkgaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = BrkgaConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = BrkgaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_range() {
        let config = BrkgaConfig::default().with_mutation_percent(PercentRange::new(20, 10));
        let err = config.validate().unwrap_err();
        assert!(err.contains("mutation_percent"), "{err}");
    }

    #[test]
    fn test_degenerate_elite_allowed() {
        assert!(BrkgaConfig::default()
            .with_elite_percent(PercentRange::fixed(0))
            .validate()
            .is_ok());
        assert!(BrkgaConfig::default()
            .with_elite_percent(PercentRange::fixed(100))
            .validate()
            .is_ok());
    }
}
