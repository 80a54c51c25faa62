//! Random-key decoding for the mTSP.
//!
//! A [`Key`] assigns every non-depot point a gene in `[0, 1)`. Decoding
//! visits points in ascending gene order and appends each one to the route
//! where it adds the least marginal cost.

use crate::instance::{round_fo, Instance};
use crate::solution::{Route, Solution, DEPOT};
use rand::Rng;

/// Objective value reported for keys with a duplicate or stale index.
pub const INVALID_KEY_PENALTY: f64 = 100_000_000.0;

/// One `(gene, index)` pair of a key.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEntry {
    pub gene: f64,
    pub index: usize,
}

/// A decode priority over non-depot points, always sorted ascending by gene.
///
/// # Examples
///
/// ```
/// use mtsp_metaheur::decoder::Key;
///
/// // genes for points 1, 2, 3
/// let key = Key::from_genes(&[0.7, 0.1, 0.4]);
/// let order: Vec<usize> = key.entries().iter().map(|e| e.index).collect();
/// assert_eq!(order, vec![2, 3, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    entries: Vec<KeyEntry>,
}

impl Key {
    /// Builds a key from arbitrary entries, sorting them by gene.
    ///
    /// Entries are not checked for duplicates; the decoder penalizes them.
    pub fn from_entries(mut entries: Vec<KeyEntry>) -> Self {
        entries.sort_by(|a, b| a.gene.total_cmp(&b.gene));
        Self { entries }
    }

    /// Builds a key where `genes[j]` is the gene of point `j + 1`.
    pub fn from_genes(genes: &[f64]) -> Self {
        let entries = genes
            .iter()
            .enumerate()
            .map(|(j, &gene)| KeyEntry { gene, index: j + 1 })
            .collect();
        Self::from_entries(entries)
    }

    /// Draws an independent uniform gene for each of points `1..num_points`.
    pub fn random<R: Rng>(num_points: usize, rng: &mut R) -> Self {
        let genes: Vec<f64> = (1..num_points)
            .map(|_| rng.random_range(0.0..1.0))
            .collect();
        Self::from_genes(&genes)
    }

    pub fn entries(&self) -> &[KeyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Genes in point order: element `j` is the gene of point `j + 1`.
    ///
    /// Points absent from the key get `0.0`; entries with an index outside
    /// `1..num_points` are ignored.
    pub fn genes_by_point(&self, num_points: usize) -> Vec<f64> {
        let mut genes = vec![0.0; num_points.saturating_sub(1)];
        for e in &self.entries {
            if e.index != DEPOT && e.index < num_points {
                genes[e.index - 1] = e.gene;
            }
        }
        genes
    }
}

/// Output of [`decode`].
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub solution: Solution,
    /// Sum of `route_costs`, rounded to two decimals.
    pub fo: f64,
    /// Accumulated marginal cost of each route.
    pub route_costs: Vec<f64>,
    /// True if decoding stopped on a duplicate or stale index.
    pub truncated: bool,
}

/// Decodes `key` into a solution by cheapest-tail insertion.
///
/// For each point `i` in key order, every route `r` is scored as
/// `cost[r] + d(last_r, i) + d(depot, i) - d(last_r, depot)` and the point
/// goes to the cheapest route (first route on ties). The route is never
/// closed explicitly: `d(depot, i)` stands in for the return leg, so the
/// objective equals the closed tour length only for symmetric distances.
///
/// If an index was already placed, is the depot, or lies outside the
/// instance, decoding stops: the first route's cost becomes
/// [`INVALID_KEY_PENALTY`] and the partial solution is returned. This
/// mirrors long-standing behavior of the heuristic and is kept so that
/// ranking discards such keys; it is arguably a smell rather than a real
/// feasibility guard.
///
/// The instance must have at least one vehicle.
pub fn decode<I: Instance + ?Sized>(instance: &I, key: &Key) -> Decoded {
    let vehicles = instance.vehicles();
    let num_points = instance.num_points();

    let mut routes = vec![Route::new(); vehicles];
    let mut route_costs = vec![0.0; vehicles];
    let mut pending = vec![true; num_points];
    if let Some(depot) = pending.get_mut(DEPOT) {
        *depot = false;
    }
    let mut truncated = false;

    for entry in key.entries() {
        let i = entry.index;
        if !pending.get(i).copied().unwrap_or(false) {
            if let Some(first) = route_costs.first_mut() {
                *first = INVALID_KEY_PENALTY;
            }
            truncated = true;
            break;
        }

        let mut best: Option<(usize, f64)> = None;
        for (r, route) in routes.iter().enumerate() {
            let last = route.last();
            let cost = round_fo(
                route_costs[r] + instance.distance(last, i) + instance.distance(DEPOT, i)
                    - instance.distance(last, DEPOT),
            );
            if best.map_or(true, |(_, b)| cost < b) {
                best = Some((r, cost));
            }
        }

        if let Some((r, cost)) = best {
            route_costs[r] = cost;
            routes[r].push(i);
            pending[i] = false;
        }
    }

    let fo = round_fo(route_costs.iter().sum());
    Decoded {
        solution: Solution::from_routes(routes),
        fo,
        route_costs,
        truncated,
    }
}
