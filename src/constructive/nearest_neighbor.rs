//! Nearest-neighbor constructive heuristic.
//!
//! Builds the route greedily: starting from the base, always visit the
//! nearest unvisited destination, then return to the base.
//!
//! # Complexity
//!
//! O(n²) where n = number of destinations.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. It gives no optimality
//! guarantee and can be arbitrarily worse than the exact route.

use log::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::evaluation::{RouteEvaluator, BASE};
use crate::models::{Point, Route};

/// Constructs a closed route using the nearest-neighbor heuristic.
///
/// Each step moves to the destination with strictly minimum distance from
/// the current stop; on a tie the destination added earliest wins.
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
/// use u_delivery::constructive::nearest_neighbor;
///
/// let locations = vec![
///     Point::new(0, 0, "base"),
///     Point::new(3, 0, "c"),
///     Point::new(1, 0, "a"),
///     Point::new(2, 0, "b"),
/// ];
/// let dm = DistanceMatrix::from_points(&locations);
///
/// let route = nearest_neighbor(&locations, &dm);
/// assert_eq!(route.coords(), vec![(0, 0), (1, 0), (2, 0), (3, 0), (0, 0)]);
/// assert!((route.total_distance() - 6.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor(locations: &[Point], distances: &DistanceMatrix) -> Route {
    let mut pool: Vec<usize> = (1..locations.len()).collect();
    let mut order = Vec::with_capacity(pool.len());
    let mut current = BASE;

    while let Some((pos, d)) = distances.nearest_neighbor(current, &pool) {
        let next = pool.remove(pos);
        trace!("nearest neighbor: {} at {:.3}", locations[next], d);
        order.push(next);
        current = next;
    }

    let route = RouteEvaluator::new(locations, distances).build_route(&order);
    debug!(
        "nearest-neighbor route over {} destinations: {:.3}",
        order.len(),
        route.total_distance()
    );
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(points: &[Point]) -> Route {
        let dm = DistanceMatrix::from_points(points);
        nearest_neighbor(points, &dm)
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let points = vec![
            Point::new(0, 0, "base"),
            Point::new(10, 0, "far"),
            Point::new(1, 0, "near"),
        ];
        let route = build(&points);
        // near (distance 1) first, then far (distance 9)
        assert_eq!(route.coords(), vec![(0, 0), (1, 0), (10, 0), (0, 0)]);
        assert_eq!(route.legs(), &[1.0, 9.0, 10.0]);
    }

    #[test]
    fn test_nn_empty() {
        let points = vec![Point::new(4, 4, "base")];
        let route = build(&points);
        assert_eq!(route.coords(), vec![(4, 4), (4, 4)]);
        assert_eq!(route.legs(), &[0.0]);
    }

    #[test]
    fn test_nn_tie_keeps_insertion_order() {
        let points = vec![
            Point::new(0, 0, "base"),
            Point::new(0, 2, "north"),
            Point::new(0, -2, "south"),
        ];
        let route = build(&points);
        assert_eq!(route.stops()[1].label(), "north");
        assert_eq!(route.stops()[2].label(), "south");
    }

    #[test]
    fn test_nn_not_optimal() {
        // Greedy walks right along the line first and pays for the long way back.
        let points = vec![
            Point::new(0, 0, "base"),
            Point::new(1, 0, "a"),
            Point::new(-2, 0, "b"),
            Point::new(4, 0, "c"),
        ];
        let route = build(&points);
        assert_eq!(route.coords(), vec![(0, 0), (1, 0), (-2, 0), (4, 0), (0, 0)]);
        assert!((route.total_distance() - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_visits_every_destination_once() {
        let points = vec![
            Point::new(0, 2, "base"),
            Point::new(2, 5, "a"),
            Point::new(5, 2, "b"),
            Point::new(6, 6, "c"),
            Point::new(8, 3, "d"),
        ];
        let route = build(&points);
        assert_eq!(route.len(), 6);
        for p in &points[1..] {
            assert_eq!(route.stops().iter().filter(|s| *s == p).count(), 1);
        }
    }
}
