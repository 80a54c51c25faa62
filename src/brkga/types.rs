//! Population members and sampling helpers for BRKGA.

use crate::decoder::{decode, Key};
use crate::instance::Instance;
use crate::solution::Solution;
use rand::Rng;

/// An integer percentage range `[min, max]`, resampled on every use.
///
/// # Examples
///
/// ```
/// use mtsp_metaheur::brkga::PercentRange;
/// use mtsp_metaheur::random::create_rng;
///
/// let range = PercentRange::new(10, 20);
/// let mut rng = create_rng(1);
/// let f = range.sample(&mut rng);
/// assert!((0.10..=0.20).contains(&f));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentRange {
    pub min: u32,
    pub max: u32,
}

impl PercentRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A range that always yields `percent`.
    pub fn fixed(percent: u32) -> Self {
        Self::new(percent, percent)
    }

    /// Draws an integer percentage uniformly from `[min, max]` and returns
    /// it as a fraction.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.min..=self.max) as f64 / 100.0
    }

    pub(crate) fn validate(&self, name: &str) -> Result<(), String> {
        if self.min > self.max {
            return Err(format!(
                "{name}: min ({}) must not exceed max ({})",
                self.min, self.max
            ));
        }
        if self.max > 100 {
            return Err(format!("{name}: max ({}) must be at most 100", self.max));
        }
        Ok(())
    }
}

/// A decoded population member.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedIndividual {
    pub key: Key,
    pub fo: f64,
    pub solution: Solution,
}

impl KeyedIndividual {
    /// Decodes `key` against `instance`.
    pub fn decode<I: Instance + ?Sized>(instance: &I, key: Key) -> Self {
        let decoded = decode(instance, &key);
        Self {
            key,
            fo: decoded.fo,
            solution: decoded.solution,
        }
    }
}

/// Where an offspring gene came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneSource {
    Mutation,
    Elite,
    NonElite,
}

/// Number of elite members for a population of `len` at `fraction`.
///
/// Rounds to the nearest integer and never exceeds `len`.
pub fn elite_size(fraction: f64, len: usize) -> usize {
    ((fraction * len as f64).round() as usize).min(len)
}

/// Builds offspring genes position by position.
///
/// For each position, fresh `rhoe` and `pm` fractions are drawn from their
/// ranges together with `x ~ U(0, 1)`: `x <= pm` gives a new random gene,
/// otherwise `x <= rhoe` copies the elite parent and anything else copies
/// the non-elite parent.
pub fn crossover_genes<R: Rng>(
    elite: &[f64],
    non_elite: &[f64],
    elite_inheritance: &PercentRange,
    mutation: &PercentRange,
    rng: &mut R,
) -> (Vec<f64>, Vec<GeneSource>) {
    elite
        .iter()
        .zip(non_elite)
        .map(|(&e, &ne)| {
            let rhoe = elite_inheritance.sample(rng);
            let pm = mutation.sample(rng);
            let x: f64 = rng.random_range(0.0..1.0);
            if x <= pm {
                (rng.random_range(0.0..1.0), GeneSource::Mutation)
            } else if x <= rhoe {
                (e, GeneSource::Elite)
            } else {
                (ne, GeneSource::NonElite)
            }
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_percent_range_bounds() {
        let mut rng = create_rng(4);
        let range = PercentRange::new(30, 35);
        for _ in 0..200 {
            let f = range.sample(&mut rng);
            assert!((0.30..=0.35).contains(&f), "{f}");
        }
        assert_eq!(PercentRange::fixed(40).sample(&mut rng), 0.40);
    }

    #[test]
    fn test_percent_range_validate() {
        assert!(PercentRange::new(5, 10).validate("x").is_ok());
        assert!(PercentRange::new(10, 5).validate("x").is_err());
        assert!(PercentRange::new(10, 101).validate("x").is_err());
    }

    #[test]
    fn test_elite_size_edges() {
        assert_eq!(elite_size(0.0, 10), 0);
        assert_eq!(elite_size(1.0, 10), 10);
        assert_eq!(elite_size(0.25, 10), 3);
        assert_eq!(elite_size(0.2, 10), 2);
        assert_eq!(elite_size(0.5, 0), 0);
    }

    #[test]
    fn test_crossover_all_elite() {
        let mut rng = create_rng(8);
        let elite = [0.1, 0.2, 0.3];
        let non_elite = [0.7, 0.8, 0.9];
        let (genes, sources) = crossover_genes(
            &elite,
            &non_elite,
            &PercentRange::fixed(100),
            &PercentRange::fixed(0),
            &mut rng,
        );
        // x == 0.0 would count as a mutation; vanishingly unlikely for 3 draws
        assert_eq!(genes, elite.to_vec());
        assert!(sources.iter().all(|&s| s == GeneSource::Elite));
    }

    #[test]
    fn test_crossover_all_mutation() {
        let mut rng = create_rng(8);
        let (genes, sources) = crossover_genes(
            &[0.5; 20],
            &[0.5; 20],
            &PercentRange::fixed(70),
            &PercentRange::fixed(100),
            &mut rng,
        );
        assert!(sources.iter().all(|&s| s == GeneSource::Mutation));
        assert!(genes.iter().all(|g| (0.0..1.0).contains(g)));
    }

    #[test]
    fn test_crossover_sources_match_parents() {
        let mut rng = create_rng(17);
        let elite: Vec<f64> = (0..50).map(|i| i as f64 / 100.0).collect();
        let non_elite: Vec<f64> = (0..50).map(|i| 0.5 + i as f64 / 100.0).collect();
        let (genes, sources) = crossover_genes(
            &elite,
            &non_elite,
            &PercentRange::new(60, 80),
            &PercentRange::new(5, 15),
            &mut rng,
        );
        assert_eq!(genes.len(), 50);
        for (j, (&g, &s)) in genes.iter().zip(&sources).enumerate() {
            match s {
                GeneSource::Elite => assert_eq!(g, elite[j]),
                GeneSource::NonElite => assert_eq!(g, non_elite[j]),
                GeneSource::Mutation => assert!((0.0..1.0).contains(&g)),
            }
        }
        assert!(sources.contains(&GeneSource::Elite));
        assert!(sources.contains(&GeneSource::NonElite));
    }
}
