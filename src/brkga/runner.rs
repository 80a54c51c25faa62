//! BRKGA evolutionary loop.

use super::config::BrkgaConfig;
use super::types::{crossover_genes, elite_size, KeyedIndividual};
use crate::decoder::Key;
use crate::instance::Instance;
use crate::random::rng_from_seed;
use rand::Rng;

/// Result of a BRKGA run.
#[derive(Debug, Clone)]
pub struct BrkgaResult {
    /// The best individual found.
    pub best: KeyedIndividual,

    /// Number of generations executed.
    pub generations: usize,

    /// Best objective value after initialization and after each generation.
    pub cost_history: Vec<f64>,
}

/// Executes the BRKGA engine.
pub struct BrkgaRunner;

impl BrkgaRunner {
    /// Runs BRKGA on `instance`, recording improvements through
    /// [`Instance::add_best_solution`].
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`BrkgaConfig::validate`] first to get a descriptive error).
    pub fn run<I: Instance + ?Sized>(instance: &mut I, config: &BrkgaConfig) -> BrkgaResult {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs BRKGA drawing all randomness from `rng`. `config.seed` is
    /// ignored.
    pub fn run_with_rng<I, R>(instance: &mut I, config: &BrkgaConfig, rng: &mut R) -> BrkgaResult
    where
        I: Instance + ?Sized,
        R: Rng,
    {
        config.validate().expect("invalid BrkgaConfig");

        let num_points = instance.num_points();
        let pop_size = config.population_size;

        let mut population: Vec<KeyedIndividual> = (0..pop_size)
            .map(|_| KeyedIndividual::decode(&*instance, Key::random(num_points, rng)))
            .collect();
        let mut elite_count = rank(&mut population, config, rng);

        let mut best = population[0].clone();
        instance.add_best_solution(best.fo, &best.solution);

        let mut cost_history = Vec::with_capacity(config.max_generations + 1);
        cost_history.push(best.fo);

        for generation in 1..=config.max_generations {
            let previous_fo = population[0].fo;

            let mut next_gen: Vec<KeyedIndividual> = Vec::with_capacity(pop_size);

            // Elite copy
            next_gen.extend(population[..elite_count].iter().cloned());

            // Biased crossover
            for _ in elite_count..pop_size {
                // An empty elite falls back to the whole ranked population.
                let elite_idx = if elite_count > 0 {
                    rng.random_range(0..elite_count)
                } else {
                    rng.random_range(0..pop_size)
                };
                let non_elite_idx = rng.random_range(elite_count..pop_size);

                let (genes, _) = crossover_genes(
                    &population[elite_idx].key.genes_by_point(num_points),
                    &population[non_elite_idx].key.genes_by_point(num_points),
                    &config.elite_inheritance_percent,
                    &config.mutation_percent,
                    rng,
                );
                next_gen.push(KeyedIndividual::decode(&*instance, Key::from_genes(&genes)));
            }

            population = next_gen;
            elite_count = rank(&mut population, config, rng);

            if population[0].fo < best.fo {
                best = population[0].clone();
                instance.add_best_solution(best.fo, &best.solution);
            }
            cost_history.push(best.fo);

            log::debug!(
                "brkga generation {generation}: elite={elite_count} previous_fo={previous_fo} best_fo={}",
                best.fo
            );
        }

        log::info!(
            "brkga finished after {} generations: best_fo={}",
            config.max_generations,
            best.fo
        );

        BrkgaResult {
            best,
            generations: config.max_generations,
            cost_history,
        }
    }
}

/// Sorts `population` by objective value and samples this generation's
/// elite size.
fn rank<R: Rng>(population: &mut [KeyedIndividual], config: &BrkgaConfig, rng: &mut R) -> usize {
    population.sort_by(|a, b| a.fo.total_cmp(&b.fo));
    elite_size(config.elite_percent.sample(rng), population.len())
}
