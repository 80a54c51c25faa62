//! LNS execution loop.

use super::config::LnsConfig;
use super::types::DestroyRebuild;
use crate::acceptance::metropolis_accept;
use crate::instance::Instance;
use crate::random::rng_from_seed;
use crate::solution::Solution;
use rand::Rng;

/// Result of an LNS run.
#[derive(Debug, Clone)]
pub struct LnsResult {
    /// The best solution found.
    pub best: Solution,

    /// Objective value of the best solution.
    pub best_fo: f64,

    /// Total number of destruction/rebuild calls.
    pub iterations: usize,

    /// Number of temperature stages completed.
    pub temperature_stages: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving candidates.
    pub improving_moves: usize,

    /// Best objective value at the end of each temperature stage.
    pub cost_history: Vec<f64>,
}

/// Executes Large Neighborhood Search.
pub struct LnsRunner;

impl LnsRunner {
    /// Runs LNS starting from [`Instance::current_solution`].
    ///
    /// Every accepted candidate is pushed back with [`Instance::refresh`];
    /// new best solutions are also reported through
    /// [`Instance::add_best_solution`]. After each temperature stage the
    /// procedure's construction weighting is reset to its baseline.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn run<I, D>(instance: &mut I, procedure: &mut D, config: &LnsConfig) -> LnsResult
    where
        I: Instance + ?Sized,
        D: DestroyRebuild,
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, procedure, config, &mut rng)
    }

    /// Runs LNS drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<I, D, R>(
        instance: &mut I,
        procedure: &mut D,
        config: &LnsConfig,
        rng: &mut R,
    ) -> LnsResult
    where
        I: Instance + ?Sized,
        D: DestroyRebuild,
        R: Rng,
    {
        config.validate().expect("invalid LnsConfig");

        let mut current = instance.current_solution().clone();
        let mut current_fo = instance.current_solution_fo();
        let mut best = current.clone();
        let mut best_fo = current_fo;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut stages = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = vec![best_fo];

        while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                iterations += 1;

                let (candidate, candidate_fo) = procedure.destroy_rebuild(
                    &*instance,
                    &current,
                    current_fo,
                    best_fo,
                    &config.destroy,
                    rng,
                );
                let delta = candidate_fo - current_fo;
                if delta < 0.0 {
                    improving_moves += 1;
                }

                if metropolis_accept(delta, temperature, rng) {
                    log::trace!("lns: accepted candidate delta={delta}");
                    current = candidate;
                    current_fo = candidate_fo;
                    accepted_moves += 1;
                    instance.refresh(&current, current_fo);

                    if current_fo < best_fo {
                        best = current.clone();
                        best_fo = current_fo;
                        instance.add_best_solution(best_fo, &best);
                    }
                }
            }

            cost_history.push(best_fo);
            log::debug!("lns: T={temperature} current_fo={current_fo} best_fo={best_fo}");

            temperature *= config.cooling_rate;
            stages += 1;
            procedure.construction_weight_mut().reset();
        }

        LnsResult {
            best,
            best_fo,
            iterations,
            temperature_stages: stages,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        }
    }
}
