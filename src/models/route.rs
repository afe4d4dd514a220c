//! Closed route type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;
use crate::error::RouteError;

/// An ordered sequence of stops paired with the distance of every leg.
///
/// Routes produced by the searches start and end at the base point, so a
/// route over `n` destinations has `n + 2` stops and `n + 1` legs.
/// `legs()[i]` is the distance between `stops()[i]` and `stops()[i + 1]`.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Point, Route};
///
/// let base = Point::new(0, 0, "base");
/// let stop = Point::new(3, 4, "stop");
/// let route = Route::new(vec![base.clone(), stop, base], vec![5.0, 5.0]).unwrap();
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.total_distance(), 10.0);
/// assert_eq!(route.cumulative_distances(), vec![5.0, 10.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteParts")]
pub struct Route {
    stops: Vec<Point>,
    legs: Vec<f64>,
}

impl Route {
    /// Creates a route from its stops and leg distances.
    ///
    /// Returns `None` unless there is at least one leg and exactly one
    /// leg fewer than stops.
    pub fn new(stops: Vec<Point>, legs: Vec<f64>) -> Option<Self> {
        if stops.len() < 2 || legs.len() + 1 != stops.len() {
            return None;
        }
        Some(Self { stops, legs })
    }

    /// Builds a route whose shape the caller has already guaranteed.
    pub(crate) fn from_parts(stops: Vec<Point>, legs: Vec<f64>) -> Self {
        debug_assert_eq!(legs.len() + 1, stops.len());
        Self { stops, legs }
    }

    /// Stops in visiting order, base included at both ends.
    pub fn stops(&self) -> &[Point] {
        &self.stops
    }

    /// Distance of each leg in visiting order.
    pub fn legs(&self) -> &[f64] {
        &self.legs
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: a route has at least two stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sum of all legs, added left to right.
    pub fn total_distance(&self) -> f64 {
        self.legs.iter().sum()
    }

    /// Distance travelled after each leg.
    pub fn cumulative_distances(&self) -> Vec<f64> {
        self.legs
            .iter()
            .scan(0.0, |acc, &leg| {
                *acc += leg;
                Some(*acc)
            })
            .collect()
    }

    /// Stop coordinates in visiting order.
    pub fn coords(&self) -> Vec<(i32, i32)> {
        self.stops.iter().map(Point::coords).collect()
    }
}

/// Unchecked wire form of a [`Route`].
#[derive(Deserialize)]
struct RouteParts {
    stops: Vec<Point>,
    legs: Vec<f64>,
}

impl TryFrom<RouteParts> for Route {
    type Error = RouteError;

    fn try_from(parts: RouteParts) -> Result<Self, Self::Error> {
        let (stops, legs) = (parts.stops.len(), parts.legs.len());
        Route::new(parts.stops, parts.legs).ok_or(RouteError::MalformedRoute { stops, legs })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::trace::format_trace(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Route {
        let base = Point::new(0, 0, "base");
        Route::new(
            vec![
                base.clone(),
                Point::new(3, 0, "a"),
                Point::new(3, 4, "b"),
                base,
            ],
            vec![3.0, 4.0, 5.0],
        )
        .expect("valid")
    }

    #[test]
    fn test_route_invalid_lengths() {
        let p = Point::new(0, 0, "p");
        assert!(Route::new(vec![p.clone()], vec![]).is_none());
        assert!(Route::new(vec![p.clone(), p.clone()], vec![]).is_none());
        assert!(Route::new(vec![p.clone(), p], vec![0.0, 1.0]).is_none());
    }

    #[test]
    fn test_route_totals() {
        let r = triangle();
        assert_eq!(r.len(), 4);
        assert!(!r.is_empty());
        assert!((r.total_distance() - 12.0).abs() < 1e-10);
        assert_eq!(r.cumulative_distances(), vec![3.0, 7.0, 12.0]);
        assert_eq!(r.coords(), vec![(0, 0), (3, 0), (3, 4), (0, 0)]);
    }

    #[test]
    fn test_route_parts_checked() {
        let base = Point::new(0, 0, "base");
        let parts = RouteParts {
            stops: vec![base.clone(), Point::new(3, 4, "a"), base],
            legs: vec![5.0],
        };
        assert_eq!(
            Route::try_from(parts),
            Err(RouteError::MalformedRoute { stops: 3, legs: 1 })
        );
    }

    #[test]
    fn test_route_display() {
        assert_eq!(
            triangle().to_string(),
            "(0, 0) -> (3, 0) [3.000] -> (3, 4) [7.000] -> (0, 0) [12.000] = 12.000"
        );
    }
}
