//! Biased Random-Key Genetic Algorithm (BRKGA) for the mTSP.
//!
//! Each individual is a [`Key`](crate::decoder::Key) of genes in `[0, 1)`,
//! turned into routes by the [`decoder`](crate::decoder). Every generation
//! the population is ranked, a resampled elite share is copied unchanged,
//! and the rest is bred by biased crossover between one elite and one
//! non-elite parent.
//!
//! # References
//!
//! - Bean (1994), "Genetic algorithms and random keys for sequencing and optimization"
//! - Goncalves & Resende (2011), "Biased random-key genetic algorithms for
//!   combinatorial optimization", *J. Heuristics* 17(5), 487–525

mod config;
mod runner;
mod types;

pub use config::BrkgaConfig;
pub use runner::{BrkgaResult, BrkgaRunner};
pub use types::{crossover_genes, elite_size, GeneSource, KeyedIndividual, PercentRange};
