//! Simulated Annealing (SA) over route structures.
//!
//! Starting from the instance's current solution, each iteration applies
//! one random swap or shift move from [`neighborhood`](crate::neighborhood)
//! and accepts it with the Metropolis criterion. Cooling is geometric with
//! a fixed number of iterations per temperature.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{SaConfig, DEFAULT_MIN_TEMPERATURE};
pub use runner::{SaResult, SaRunner};

pub(crate) use config::validate_schedule;
