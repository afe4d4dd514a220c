//! Route evaluator that turns a visiting order into a full route.

use crate::distance::DistanceMatrix;
use crate::models::{Point, Route};

/// Index of the base in the location list.
pub const BASE: usize = 0;

/// Evaluates visiting orders over a location list whose index 0 is the base.
///
/// A visiting order lists location indices of destinations only; the base
/// is implied at both ends.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Point;
/// use u_delivery::distance::DistanceMatrix;
/// use u_delivery::evaluation::RouteEvaluator;
///
/// let locations = vec![
///     Point::new(0, 0, "base"),
///     Point::new(3, 4, "a"),
///     Point::new(6, 8, "b"),
/// ];
/// let dm = DistanceMatrix::from_points(&locations);
///
/// let evaluator = RouteEvaluator::new(&locations, &dm);
/// let route = evaluator.build_route(&[1, 2]);
/// assert_eq!(route.len(), 4);
/// assert!((route.total_distance() - 20.0).abs() < 1e-10);
/// ```
pub struct RouteEvaluator<'a> {
    locations: &'a [Point],
    distances: &'a DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given locations and their distance matrix.
    pub fn new(locations: &'a [Point], distances: &'a DistanceMatrix) -> Self {
        Self {
            locations,
            distances,
        }
    }

    /// Distance of every leg of `[base, order.., base]`.
    pub fn legs(&self, order: &[usize]) -> Vec<f64> {
        let mut legs = Vec::with_capacity(order.len() + 1);
        let mut prev = BASE;
        for &loc in order {
            legs.push(self.distances.get(prev, loc));
            prev = loc;
        }
        legs.push(self.distances.get(prev, BASE));
        legs
    }

    /// Total distance of `[base, order.., base]`, summed leg by leg from the base.
    ///
    /// Equal to the sum of [`legs`](Self::legs) without allocating.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        let mut total = 0.0;
        let mut prev = BASE;
        for &loc in order {
            total += self.distances.get(prev, loc);
            prev = loc;
        }
        total + self.distances.get(prev, BASE)
    }

    /// Builds the closed route for a visiting order.
    pub fn build_route(&self, order: &[usize]) -> Route {
        let base = &self.locations[BASE];
        let mut stops = Vec::with_capacity(order.len() + 2);
        stops.push(base.clone());
        stops.extend(order.iter().map(|&loc| self.locations[loc].clone()));
        stops.push(base.clone());
        Route::from_parts(stops, self.legs(order))
    }
}
