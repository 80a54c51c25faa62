//! Problem instance interface and a reference in-memory implementation.
//!
//! The search engines never own the instance. They receive it as an
//! explicit context: distance lookups and the objective evaluator are read
//! through `&self`, while [`Instance::add_best_solution`] and
//! [`Instance::refresh`] are the only mutation points.

use crate::solution::Solution;

/// Rounds an objective value to two decimal places.
pub fn round_fo(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The problem instance consumed by the decoder and the controllers.
///
/// Points are identified by `0..num_points()`, with `0` the depot.
///
/// # Examples
///
/// ```
/// use mtsp_metaheur::instance::{DistanceMatrix, Instance, MtspInstance};
///
/// let matrix = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (3.0, 4.0)]);
/// let instance = MtspInstance::new(matrix, 1).unwrap();
/// assert_eq!(instance.num_points(), 2);
/// assert!((instance.distance(0, 1) - 5.0).abs() < 1e-10);
/// ```
pub trait Instance {
    /// Travel distance from `from` to `to`.
    fn distance(&self, from: usize, to: usize) -> f64;

    /// Number of points including the depot.
    fn num_points(&self) -> usize;

    /// Number of vehicles, i.e. routes per solution.
    fn vehicles(&self) -> usize;

    /// Full objective value of a complete solution. Lower is better.
    fn calculate_fo(&self, solution: &Solution) -> f64;

    /// The solution local search starts from.
    fn current_solution(&self) -> &Solution;

    /// Objective value of [`Instance::current_solution`].
    fn current_solution_fo(&self) -> f64;

    /// Records a newly found best solution.
    fn add_best_solution(&mut self, fo: f64, solution: &Solution);

    /// Replaces the current solution and its objective value.
    fn refresh(&mut self, solution: &Solution, fo: f64);
}

/// A dense, square distance matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// Fails if the rows are empty or not square.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, String> {
        let n = rows.len();
        if n == 0 {
            return Err("distance matrix must have at least one row".into());
        }
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(format!(
                    "distance matrix row {i} has {} entries, expected {n}",
                    row.len()
                ));
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// Builds a symmetric Euclidean matrix from planar coordinates.
    pub fn from_coordinates(coords: &[(f64, f64)]) -> Self {
        let n = coords.len();
        let mut data = vec![0.0; n * n];
        for (i, &(xi, yi)) in coords.iter().enumerate() {
            for (j, &(xj, yj)) in coords.iter().enumerate().skip(i + 1) {
                let d = ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt();
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { n, data }
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    /// Number of points covered by the matrix.
    pub fn size(&self) -> usize {
        self.n
    }
}

/// A recorded best solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestRecord {
    pub fo: f64,
    pub solution: Solution,
}

/// In-memory mTSP instance.
///
/// The objective is the sum of closed tour lengths, rounded to two
/// decimals. Best solutions are kept as a history of strictly improving
/// records.
#[derive(Debug, Clone)]
pub struct MtspInstance {
    matrix: DistanceMatrix,
    vehicles: usize,
    current: Solution,
    current_fo: f64,
    best_history: Vec<BestRecord>,
}

impl MtspInstance {
    /// Creates an instance whose current solution has only empty routes.
    pub fn new(matrix: DistanceMatrix, vehicles: usize) -> Result<Self, String> {
        if vehicles == 0 {
            return Err("vehicles must be at least 1".into());
        }
        let current = Solution::new(vehicles);
        Ok(Self {
            matrix,
            vehicles,
            current,
            current_fo: 0.0,
            best_history: Vec::new(),
        })
    }

    /// Sets the starting solution for local search.
    ///
    /// The solution must have one route per vehicle and partition the
    /// instance's points.
    pub fn with_current_solution(mut self, solution: Solution) -> Result<Self, String> {
        if solution.num_routes() != self.vehicles {
            return Err(format!(
                "solution has {} routes, instance has {} vehicles",
                solution.num_routes(),
                self.vehicles
            ));
        }
        solution.check_partition(self.num_points())?;
        self.current_fo = self.calculate_fo(&solution);
        self.current = solution;
        Ok(self)
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// The latest (lowest) recorded best solution.
    pub fn best_solution(&self) -> Option<&BestRecord> {
        self.best_history.last()
    }

    /// All recorded best solutions, oldest first.
    pub fn best_history(&self) -> &[BestRecord] {
        &self.best_history
    }
}

impl Instance for MtspInstance {
    fn distance(&self, from: usize, to: usize) -> f64 {
        self.matrix.get(from, to)
    }

    fn num_points(&self) -> usize {
        self.matrix.size()
    }

    fn vehicles(&self) -> usize {
        self.vehicles
    }

    fn calculate_fo(&self, solution: &Solution) -> f64 {
        let total: f64 = solution
            .routes()
            .iter()
            .map(|r| r.tour_length(|a, b| self.matrix.get(a, b)))
            .sum();
        round_fo(total)
    }

    fn current_solution(&self) -> &Solution {
        &self.current
    }

    fn current_solution_fo(&self) -> f64 {
        self.current_fo
    }

    fn add_best_solution(&mut self, fo: f64, solution: &Solution) {
        if self.best_history.last().is_some_and(|b| fo >= b.fo) {
            return;
        }
        log::debug!("new best solution: fo={fo}");
        self.best_history.push(BestRecord {
            fo,
            solution: solution.clone(),
        });
    }

    fn refresh(&mut self, solution: &Solution, fo: f64) {
        self.current = solution.clone();
        self.current_fo = fo;
    }
}
