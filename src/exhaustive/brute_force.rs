//! Exact search over every visiting order.
//!
//! # Algorithm
//!
//! Enumerate the orderings of the destinations in lexicographic order. For
//! each, sum the legs of `[base, p1, .., pn, base]` and keep the ordering
//! with the smallest total. The incumbent is replaced only on a strictly
//! smaller total, so the first optimal ordering in enumeration order wins.
//!
//! # Complexity
//!
//! O(n! · n). There is no pruning; callers should cap n (see
//! [`RouteSearcher::with_brute_force_limit`](crate::navigator::RouteSearcher::with_brute_force_limit)).

use log::{debug, trace};

use super::Permutations;
use crate::distance::DistanceMatrix;
use crate::evaluation::RouteEvaluator;
use crate::models::{Point, Route};

/// Finds a minimum-distance closed route by exhaustive enumeration.
///
/// # Arguments
///
/// * `locations` — All locations (index 0 = base)
/// * `distances` — Distance matrix over `locations`
///
/// # Examples
///
/// ```
/// use u_delivery::models::Point;
/// use u_delivery::distance::DistanceMatrix;
/// use u_delivery::exhaustive::brute_force;
///
/// let locations = vec![
///     Point::new(0, 0, "base"),
///     Point::new(1, 0, "a"),
///     Point::new(-2, 0, "b"),
///     Point::new(4, 0, "c"),
/// ];
/// let dm = DistanceMatrix::from_points(&locations);
///
/// let route = brute_force(&locations, &dm);
/// assert!((route.total_distance() - 12.0).abs() < 1e-10);
/// ```
pub fn brute_force(locations: &[Point], distances: &DistanceMatrix) -> Route {
    let evaluator = RouteEvaluator::new(locations, distances);
    let n = locations.len().saturating_sub(1);

    let mut order = Vec::with_capacity(n);
    let mut best_order: Vec<usize> = Vec::new();
    let mut best_total = f64::INFINITY;
    let mut evaluated = 0usize;

    for perm in Permutations::new(n) {
        order.clear();
        order.extend(perm.iter().map(|&i| i + 1));
        let total = evaluator.tour_length(&order);
        evaluated += 1;
        if total < best_total {
            trace!("brute force: improved to {:.3} with {:?}", total, order);
            best_total = total;
            best_order.clone_from(&order);
        }
    }

    debug!(
        "brute-force route over {} destinations: {:.3} ({} orderings)",
        n, best_total, evaluated
    );
    evaluator.build_route(&best_order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor;

    fn solve(points: &[Point]) -> Route {
        let dm = DistanceMatrix::from_points(points);
        brute_force(points, &dm)
    }

    #[test]
    fn test_bf_empty() {
        let route = solve(&[Point::new(1, 1, "base")]);
        assert_eq!(route.coords(), vec![(1, 1), (1, 1)]);
        assert_eq!(route.legs(), &[0.0]);
    }

    #[test]
    fn test_bf_single() {
        let route = solve(&[Point::new(0, 0, "base"), Point::new(3, 4, "a")]);
        assert_eq!(route.coords(), vec![(0, 0), (3, 4), (0, 0)]);
        assert!((route.total_distance() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_bf_beats_greedy() {
        let points = vec![
            Point::new(0, 0, "base"),
            Point::new(1, 0, "a"),
            Point::new(-2, 0, "b"),
            Point::new(4, 0, "c"),
        ];
        let dm = DistanceMatrix::from_points(&points);
        let greedy = nearest_neighbor(&points, &dm);
        let exact = brute_force(&points, &dm);
        assert!((greedy.total_distance() - 14.0).abs() < 1e-10);
        assert!((exact.total_distance() - 12.0).abs() < 1e-10);
        // a, c, b is the first of the four optimal orderings
        assert_eq!(exact.coords(), vec![(0, 0), (1, 0), (4, 0), (-2, 0), (0, 0)]);
    }

    #[test]
    fn test_bf_tie_keeps_first_ordering() {
        // A square: both directions around it have the same length.
        let points = vec![
            Point::new(0, 0, "base"),
            Point::new(0, 1, "a"),
            Point::new(1, 1, "b"),
            Point::new(1, 0, "c"),
        ];
        let route = solve(&points);
        assert_eq!(route.coords(), vec![(0, 0), (0, 1), (1, 1), (1, 0), (0, 0)]);
        assert!((route.total_distance() - 4.0).abs() < 1e-10);
    }
}
