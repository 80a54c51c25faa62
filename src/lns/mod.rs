//! Large Neighborhood Search (LNS) controller.
//!
//! LNS anneals over candidates produced by a [`DestroyRebuild`] procedure:
//! part of the current solution is removed and rebuilt, and the result is
//! accepted with the Metropolis criterion. Unlike [`sa`](crate::sa), every
//! accepted candidate is pushed back into the instance, and the
//! procedure's [`ConstructionWeight`] is reset after each temperature
//! stage.
//!
//! # References
//!
//! Shaw (1998), "Using Constraint Programming and Local Search Methods to
//! Solve Vehicle Routing Problems"

mod config;
mod runner;
mod types;

pub use config::LnsConfig;
pub use runner::{LnsResult, LnsRunner};
pub use types::{ConstructionWeight, DestroyParams, DestroyRebuild, BASELINE_CONSTRUCTION_WEIGHT};
