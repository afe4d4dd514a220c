//! Distance metric and precomputed distance matrix.
//!
//! Distances are plain Euclidean distances in the plane.

mod matrix;

pub use matrix::DistanceMatrix;

use crate::models::Point;

/// Euclidean distance between two points.
///
/// Symmetric, non-negative, and zero exactly when the coordinates coincide.
///
/// ```
/// use u_delivery::distance::euclidean;
/// use u_delivery::models::Point;
///
/// let a = Point::new(0, 2, "base");
/// let b = Point::new(5, 2, "b");
/// assert_eq!(euclidean(&a, &b), 5.0);
/// ```
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    a.distance_to(b)
}
