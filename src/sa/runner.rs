//! SA execution loop.

use super::config::SaConfig;
use crate::acceptance::metropolis_accept;
use crate::instance::Instance;
use crate::neighborhood::random_neighbor;
use crate::random::rng_from_seed;
use crate::solution::Solution;
use rand::Rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best solution found.
    pub best: Solution,

    /// Objective value of the best solution.
    pub best_fo: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Number of temperature stages completed.
    pub temperature_stages: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Best objective value at the end of each temperature stage.
    pub cost_history: Vec<f64>,
}

/// Executes Simulated Annealing over the swap/shift neighborhood.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA starting from [`Instance::current_solution`].
    ///
    /// New best solutions are reported through
    /// [`Instance::add_best_solution`]. The instance's current solution is
    /// never touched.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn run<I: Instance + ?Sized>(instance: &mut I, config: &SaConfig) -> SaResult {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`. `config.seed` is ignored.
    pub fn run_with_rng<I, R>(instance: &mut I, config: &SaConfig, rng: &mut R) -> SaResult
    where
        I: Instance + ?Sized,
        R: Rng,
    {
        config.validate().expect("invalid SaConfig");

        let mut current = instance.current_solution().clone();
        let mut current_fo = instance.calculate_fo(&current);
        let mut best = current.clone();
        let mut best_fo = instance.current_solution_fo();

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut stages = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cost_history = vec![best_fo];

        'annealing: while temperature > config.min_temperature {
            for _ in 0..config.iterations_per_temperature {
                let Some((neighbor, mv)) = random_neighbor(&current, rng) else {
                    log::warn!("sa: solution admits no swap or shift move, stopping");
                    break 'annealing;
                };
                iterations += 1;

                let neighbor_fo = instance.calculate_fo(&neighbor);
                let delta = neighbor_fo - current_fo;
                if delta < 0.0 {
                    improving_moves += 1;
                }

                if metropolis_accept(delta, temperature, rng) {
                    log::trace!("sa: accepted {mv:?} delta={delta}");
                    current = neighbor;
                    current_fo = neighbor_fo;
                    accepted_moves += 1;

                    if current_fo < best_fo {
                        best = current.clone();
                        best_fo = current_fo;
                        instance.add_best_solution(best_fo, &best);
                    }
                }
            }

            cost_history.push(best_fo);
            log::debug!("sa: T={temperature} current_fo={current_fo} best_fo={best_fo}");

            temperature *= config.cooling_rate;
            stages += 1;
        }

        SaResult {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{DistanceMatrix, MtspInstance};
    use crate::solution::Route;

    /// Customers on a line on both sides of the depot.
    fn line_instance() -> MtspInstance {
        let coords = [
            (0.0, 0.0),
            (1.0, 0.0),
            (-1.0, 0.0),
            (2.0, 0.0),
            (-2.0, 0.0),
            (3.0, 0.0),
            (-3.0, 0.0),
        ];
        // Deliberately interleaved start: both vehicles zigzag across the depot.
        let start = Solution::from_routes(vec![
            Route::from_customers([1, 2, 3]),
            Route::from_customers([4, 5, 6]),
        ]);
        MtspInstance::new(DistanceMatrix::from_coordinates(&coords), 2)
            .unwrap()
            .with_current_solution(start)
            .unwrap()
    }

    fn config() -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(10.0)
            .with_cooling_rate(0.9)
            .with_iterations_per_temperature(50)
            .with_seed(42)
    }

    #[test]
    fn test_sa_finds_improvement() {
        let mut instance = line_instance();
        let start_fo = instance.current_solution_fo();
        let result = SaRunner::run(&mut instance, &config());

        // optimum: one vehicle per side, 6 + 6
        assert!(result.best_fo < start_fo);
        assert!(result.best_fo >= 12.0 - 1e-9);
        assert!(result.best.check_partition(7).is_ok());
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
    }

    #[test]
    fn test_sa_records_best_and_leaves_current() {
        let mut instance = line_instance();
        let start = instance.current_solution().clone();
        let result = SaRunner::run(&mut instance, &config());

        assert_eq!(instance.current_solution(), &start);
        let recorded = instance.best_solution().unwrap();
        assert_eq!(recorded.fo, result.best_fo);
        assert_eq!(recorded.solution, result.best);
    }

    #[test]
    fn test_sa_stage_count() {
        let mut instance = line_instance();
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_cooling_rate(0.5)
            .with_iterations_per_temperature(3)
            .with_seed(1);
        let result = SaRunner::run(&mut instance, &config);

        // 0.5^13 > 1e-4 >= 0.5^14
        assert_eq!(result.temperature_stages, 14);
        assert_eq!(result.iterations, 42);
        assert!(result.final_temperature <= config.min_temperature);
        assert_eq!(result.cost_history.len(), 15);
    }

    #[test]
    fn test_sa_cost_history_non_increasing() {
        let mut instance = line_instance();
        let result = SaRunner::run(&mut instance, &config());
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-10,
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_sa_no_moves_stops() {
        let coords = [(0.0, 0.0), (1.0, 0.0)];
        let mut instance = MtspInstance::new(DistanceMatrix::from_coordinates(&coords), 1)
            .unwrap()
            .with_current_solution(Solution::from_routes(vec![Route::from_customers([1])]))
            .unwrap();
        let result = SaRunner::run(&mut instance, &config());
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best_fo, 2.0);
    }
}
