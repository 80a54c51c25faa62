//! Metaheuristic search for the multiple traveling salesman problem (mTSP).
//!
//! Points `1..n` are partitioned among a fixed number of vehicle routes
//! that all start at the depot (point `0`), minimizing total distance.
//! Three independent search engines work over the same [`Instance`]:
//!
//! - **BRKGA** ([`brkga`]): Biased Random-Key Genetic Algorithm. Random
//!   keys are turned into routes by the [`decoder`]; elite members are
//!   copied and the rest is bred by biased crossover.
//! - **Simulated Annealing** ([`sa`]): refines the instance's current
//!   solution with swap/shift moves from [`neighborhood`].
//! - **LNS** ([`lns`]): anneals over a user-supplied destruction/rebuild
//!   procedure and keeps the instance's current solution in sync.
//!
//! SA and LNS share the Metropolis criterion in [`acceptance`].
//!
//! # Architecture
//!
//! The instance is an explicit context passed by `&mut` into every
//! runner. Engines read distances and evaluate solutions through `&self`
//! and report back only via [`Instance::add_best_solution`] and
//! [`Instance::refresh`]. Randomness is injected as any [`rand::Rng`];
//! each runner also accepts a seed in its configuration.
//!
//! [`Instance`]: instance::Instance
//! [`Instance::add_best_solution`]: instance::Instance::add_best_solution
//! [`Instance::refresh`]: instance::Instance::refresh

pub mod acceptance;
pub mod brkga;
pub mod decoder;
pub mod instance;
pub mod lns;
pub mod neighborhood;
pub mod random;
pub mod sa;
pub mod solution;
