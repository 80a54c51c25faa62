//! Route and solution types.
//!
//! A [`Solution`] holds one [`Route`] per vehicle. Every route starts at
//! the depot (point `0`), and every non-depot point is visited by exactly
//! one route exactly once.

/// Index of the depot in every instance.
pub const DEPOT: usize = 0;

/// An ordered sequence of points served by one vehicle.
///
/// The first element is always the depot. The return leg to the depot is
/// implicit and not stored.
///
/// # Examples
///
/// ```
/// use mtsp_metaheur::solution::Route;
///
/// let route = Route::from_customers([3, 1]);
/// assert_eq!(route.points(), &[0, 3, 1]);
/// assert_eq!(route.customers(), &[3, 1]);
/// assert_eq!(route.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    points: Vec<usize>,
}

impl Route {
    /// Creates a route containing only the depot.
    pub fn new() -> Self {
        Self {
            points: vec![DEPOT],
        }
    }

    /// Creates a route visiting `customers` in order after the depot.
    pub fn from_customers(customers: impl IntoIterator<Item = usize>) -> Self {
        let mut points = vec![DEPOT];
        points.extend(customers);
        Self { points }
    }

    /// All points including the leading depot.
    pub fn points(&self) -> &[usize] {
        &self.points
    }

    /// Visited points after the depot.
    pub fn customers(&self) -> &[usize] {
        &self.points[1..]
    }

    /// Number of non-depot points.
    pub fn len(&self) -> usize {
        self.points.len() - 1
    }

    /// Returns true if the route contains only the depot.
    pub fn is_empty(&self) -> bool {
        self.points.len() <= 1
    }

    /// The last point of the route (the depot for an empty route).
    pub fn last(&self) -> usize {
        self.points.last().copied().unwrap_or(DEPOT)
    }

    /// Appends a point at the tail.
    pub fn push(&mut self, point: usize) {
        self.points.push(point);
    }

    /// Raw access for move operators. Position `0` must stay the depot.
    pub(crate) fn points_mut(&mut self) -> &mut Vec<usize> {
        &mut self.points
    }

    /// Length of the closed tour `depot -> points -> depot`.
    pub fn tour_length<F>(&self, distance: F) -> f64
    where
        F: Fn(usize, usize) -> f64,
    {
        let open: f64 = self.points.windows(2).map(|w| distance(w[0], w[1])).sum();
        open + distance(self.last(), DEPOT)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete assignment of points to vehicle routes.
///
/// # Examples
///
/// ```
/// use mtsp_metaheur::solution::{Route, Solution};
///
/// let solution = Solution::from_routes(vec![
///     Route::from_customers([1, 2]),
///     Route::from_customers([3]),
/// ]);
/// assert_eq!(solution.num_routes(), 2);
/// assert_eq!(solution.num_customers(), 3);
/// assert!(solution.check_partition(4).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution of `vehicles` depot-only routes.
    pub fn new(vehicles: usize) -> Self {
        Self {
            routes: vec![Route::new(); vehicles],
        }
    }

    /// Wraps existing routes.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(crate) fn routes_mut(&mut self) -> &mut [Route] {
        &mut self.routes
    }

    pub fn route(&self, index: usize) -> &Route {
        &self.routes[index]
    }

    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of non-depot points across all routes.
    pub fn num_customers(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Checks the depot-first and partition invariants against an
    /// instance with points `0..num_points`.
    ///
    /// Returns a description of the first violation found.
    pub fn check_partition(&self, num_points: usize) -> Result<(), String> {
        let mut seen = vec![false; num_points];
        for (r, route) in self.routes.iter().enumerate() {
            if route.points.first() != Some(&DEPOT) {
                return Err(format!("route {r} does not start at the depot"));
            }
            for &p in route.customers() {
                if p == DEPOT || p >= num_points {
                    return Err(format!("route {r} visits invalid point {p}"));
                }
                if seen[p] {
                    return Err(format!("point {p} is visited more than once"));
                }
                seen[p] = true;
            }
        }
        if let Some(missing) = (1..num_points).find(|&p| !seen[p]) {
            return Err(format!("point {missing} is not visited"));
        }
        Ok(())
    }
}
