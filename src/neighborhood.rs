//! Swap and shift moves over multi-route solutions.
//!
//! Four move kinds are available: swap or shift a point within one route,
//! and swap or shift a point between two routes. A [`Move`] names concrete
//! route indices and positions; [`Move::apply`] is a pure transform that
//! returns a new [`Solution`] and leaves its input untouched.
//!
//! Positions index into [`Route::points`](crate::solution::Route::points),
//! so position `0` is the depot and is never moved.

use crate::solution::Solution;
use rand::Rng;

/// The four neighborhood operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    IntraSwap,
    IntraShift,
    InterSwap,
    InterShift,
}

impl MoveKind {
    pub const ALL: [MoveKind; 4] = [
        MoveKind::IntraSwap,
        MoveKind::IntraShift,
        MoveKind::InterSwap,
        MoveKind::InterShift,
    ];
}

/// A concrete neighborhood move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Exchange the points at `first` and `second` of one route.
    IntraSwap {
        route: usize,
        first: usize,
        second: usize,
    },
    /// Remove the point at `from` and reinsert it at `to` (indexed after
    /// removal) in the same route.
    IntraShift { route: usize, from: usize, to: usize },
    /// Exchange one point between two routes.
    InterSwap {
        from_route: usize,
        from_pos: usize,
        to_route: usize,
        to_pos: usize,
    },
    /// Move one point from `from_route` into `to_route` at `to_pos`.
    InterShift {
        from_route: usize,
        from_pos: usize,
        to_route: usize,
        to_pos: usize,
    },
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::IntraSwap { .. } => MoveKind::IntraSwap,
            Move::IntraShift { .. } => MoveKind::IntraShift,
            Move::InterSwap { .. } => MoveKind::InterSwap,
            Move::InterShift { .. } => MoveKind::InterShift,
        }
    }

    /// Applies the move to a copy of `solution`.
    ///
    /// # Panics
    ///
    /// Panics if a route index or position is out of range for `solution`.
    /// Moves returned by [`random_move`] for the same solution are always
    /// in range.
    pub fn apply(&self, solution: &Solution) -> Solution {
        let mut next = solution.clone();
        let routes = next.routes_mut();
        match *self {
            Move::IntraSwap {
                route,
                first,
                second,
            } => {
                routes[route].points_mut().swap(first, second);
            }
            Move::IntraShift { route, from, to } => {
                let points = routes[route].points_mut();
                let p = points.remove(from);
                points.insert(to, p);
            }
            Move::InterSwap {
                from_route,
                from_pos,
                to_route,
                to_pos,
            } => {
                let a = routes[from_route].points()[from_pos];
                let b = routes[to_route].points()[to_pos];
                routes[from_route].points_mut()[from_pos] = b;
                routes[to_route].points_mut()[to_pos] = a;
            }
            Move::InterShift {
                from_route,
                from_pos,
                to_route,
                to_pos,
            } => {
                let p = routes[from_route].points_mut().remove(from_pos);
                routes[to_route].points_mut().insert(to_pos, p);
            }
        }
        next
    }
}

/// Samples a move kind uniformly and then a concrete move of that kind.
///
/// Kinds that cannot be realized degrade: intra-route kinds need a route
/// with at least two points and otherwise become an inter-route shift;
/// inter-route kinds need two routes and otherwise become the matching
/// intra-route kind. If the second route of an inter-route move holds only
/// the depot, the move becomes a shift to position `1`.
///
/// Returns `None` when the solution admits no move at all.
pub fn random_move<R: Rng>(solution: &Solution, rng: &mut R) -> Option<Move> {
    let kind = MoveKind::ALL[rng.random_range(0..MoveKind::ALL.len())];
    random_move_of_kind(solution, kind, rng)
}

/// Like [`random_move`] with a fixed starting kind.
pub fn random_move_of_kind<R: Rng>(
    solution: &Solution,
    kind: MoveKind,
    rng: &mut R,
) -> Option<Move> {
    match kind {
        MoveKind::IntraSwap => {
            sample_intra(solution, true, rng).or_else(|| sample_inter(solution, false, rng))
        }
        MoveKind::IntraShift => {
            sample_intra(solution, false, rng).or_else(|| sample_inter(solution, false, rng))
        }
        MoveKind::InterSwap => {
            sample_inter(solution, true, rng).or_else(|| sample_intra(solution, true, rng))
        }
        MoveKind::InterShift => {
            sample_inter(solution, false, rng).or_else(|| sample_intra(solution, false, rng))
        }
    }
}

/// Samples a move and applies it, returning the neighbor and the move.
pub fn random_neighbor<R: Rng>(solution: &Solution, rng: &mut R) -> Option<(Solution, Move)> {
    let mv = random_move(solution, rng)?;
    Some((mv.apply(solution), mv))
}

fn sample_intra<R: Rng>(solution: &Solution, swap: bool, rng: &mut R) -> Option<Move> {
    let eligible: Vec<usize> = (0..solution.num_routes())
        .filter(|&r| solution.route(r).len() >= 2)
        .collect();
    if eligible.is_empty() {
        return None;
    }
    let route = eligible[rng.random_range(0..eligible.len())];
    let len = solution.route(route).len();
    let first = rng.random_range(1..=len);
    let second = other_position(first, len, rng);

    Some(if swap {
        Move::IntraSwap {
            route,
            first,
            second,
        }
    } else {
        Move::IntraShift {
            route,
            from: first,
            to: second,
        }
    })
}

fn sample_inter<R: Rng>(solution: &Solution, swap: bool, rng: &mut R) -> Option<Move> {
    let n = solution.num_routes();
    if n < 2 {
        return None;
    }
    let eligible: Vec<usize> = (0..n).filter(|&r| !solution.route(r).is_empty()).collect();
    if eligible.is_empty() {
        return None;
    }
    let from_route = eligible[rng.random_range(0..eligible.len())];
    let from_pos = rng.random_range(1..=solution.route(from_route).len());

    let mut to_route = rng.random_range(0..n - 1);
    if to_route >= from_route {
        to_route += 1;
    }
    let to_len = solution.route(to_route).len();

    if to_len == 0 {
        return Some(Move::InterShift {
            from_route,
            from_pos,
            to_route,
            to_pos: 1,
        });
    }
    Some(if swap {
        Move::InterSwap {
            from_route,
            from_pos,
            to_route,
            to_pos: rng.random_range(1..=to_len),
        }
    } else {
        Move::InterShift {
            from_route,
            from_pos,
            to_route,
            to_pos: rng.random_range(1..=to_len + 1),
        }
    })
}

/// Uniform position in `1..=len` other than `pos`. Requires `len >= 2`.
fn other_position<R: Rng>(pos: usize, len: usize, rng: &mut R) -> usize {
    let p = rng.random_range(1..len);
    if p >= pos {
        p + 1
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::solution::{Route, DEPOT};

    fn sample() -> Solution {
        Solution::from_routes(vec![
            Route::from_customers([1, 2, 3]),
            Route::from_customers([4, 5]),
            Route::new(),
        ])
    }

    #[test]
    fn test_intra_swap_apply() {
        let s = sample();
        let next = Move::IntraSwap {
            route: 0,
            first: 1,
            second: 3,
        }
        .apply(&s);
        assert_eq!(next.route(0).customers(), &[3, 2, 1]);
        assert_eq!(s.route(0).customers(), &[1, 2, 3]);
    }

    #[test]
    fn test_intra_shift_apply() {
        let s = sample();
        let next = Move::IntraShift {
            route: 0,
            from: 1,
            to: 3,
        }
        .apply(&s);
        assert_eq!(next.route(0).customers(), &[2, 3, 1]);
    }

    #[test]
    fn test_inter_swap_apply() {
        let s = sample();
        let next = Move::InterSwap {
            from_route: 0,
            from_pos: 2,
            to_route: 1,
            to_pos: 1,
        }
        .apply(&s);
        assert_eq!(next.route(0).customers(), &[1, 4, 3]);
        assert_eq!(next.route(1).customers(), &[2, 5]);
    }

    #[test]
    fn test_inter_shift_into_empty_route() {
        let s = sample();
        let next = Move::InterShift {
            from_route: 1,
            from_pos: 2,
            to_route: 2,
            to_pos: 1,
        }
        .apply(&s);
        assert_eq!(next.route(1).customers(), &[4]);
        assert_eq!(next.route(2).points(), &[DEPOT, 5]);
    }

    #[test]
    fn test_inter_shift_append() {
        let s = sample();
        let next = Move::InterShift {
            from_route: 0,
            from_pos: 1,
            to_route: 1,
            to_pos: 3,
        }
        .apply(&s);
        assert_eq!(next.route(0).customers(), &[2, 3]);
        assert_eq!(next.route(1).customers(), &[4, 5, 1]);
    }

    #[test]
    fn test_every_kind_preserves_partition() {
        let s = sample();
        let mut rng = create_rng(5);
        for kind in MoveKind::ALL {
            for _ in 0..200 {
                let mv = random_move_of_kind(&s, kind, &mut rng).unwrap();
                let next = mv.apply(&s);
                assert!(next.check_partition(6).is_ok(), "{mv:?} broke {next:?}");
                assert_eq!(next.num_routes(), 3);
            }
        }
        assert_eq!(s, sample());
    }

    #[test]
    fn test_inter_to_empty_route_forces_shift() {
        // only route 0 is non-empty, so the second route is always empty
        let s = Solution::from_routes(vec![Route::from_customers([1, 2]), Route::new()]);
        let mut rng = create_rng(9);
        for _ in 0..100 {
            let mv = random_move_of_kind(&s, MoveKind::InterSwap, &mut rng).unwrap();
            match mv {
                Move::InterShift {
                    from_route,
                    to_route,
                    to_pos,
                    ..
                } => {
                    assert_eq!((from_route, to_route, to_pos), (0, 1, 1));
                }
                other => panic!("expected forced shift, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_intra_falls_back_to_inter() {
        let s = Solution::from_routes(vec![Route::from_customers([1]), Route::from_customers([2])]);
        let mut rng = create_rng(2);
        let mv = random_move_of_kind(&s, MoveKind::IntraSwap, &mut rng).unwrap();
        assert_eq!(mv.kind(), MoveKind::InterShift);
    }

    #[test]
    fn test_inter_falls_back_to_intra_single_vehicle() {
        let s = Solution::from_routes(vec![Route::from_customers([1, 2, 3])]);
        let mut rng = create_rng(2);
        let mv = random_move_of_kind(&s, MoveKind::InterSwap, &mut rng).unwrap();
        assert_eq!(mv.kind(), MoveKind::IntraSwap);
        let mv = random_move_of_kind(&s, MoveKind::InterShift, &mut rng).unwrap();
        assert_eq!(mv.kind(), MoveKind::IntraShift);
    }

    #[test]
    fn test_no_move_available() {
        let mut rng = create_rng(0);
        assert!(random_move(&Solution::new(3), &mut rng).is_none());
        let single = Solution::from_routes(vec![Route::from_customers([1])]);
        assert!(random_move(&single, &mut rng).is_none());
    }

    #[test]
    fn test_intra_moves_change_positions() {
        let s = sample();
        let mut rng = create_rng(13);
        for _ in 0..100 {
            if let Some(Move::IntraSwap { first, second, .. }) =
                random_move_of_kind(&s, MoveKind::IntraSwap, &mut rng)
            {
                assert_ne!(first, second);
                assert!(first >= 1 && second >= 1);
            }
        }
    }

    #[test]
    fn test_random_move_hits_all_kinds() {
        let s = sample();
        let mut rng = create_rng(21);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            if let Some((_, mv)) = random_neighbor(&s, &mut rng) {
                seen.insert(mv.kind());
            }
        }
        assert_eq!(seen.len(), 4);
    }
}
