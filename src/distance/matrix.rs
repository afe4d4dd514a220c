//! Dense distance matrix.

use super::euclidean;
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built from a list of locations where index 0 is conventionally the base.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Point;
/// use u_delivery::distance::DistanceMatrix;
///
/// let locations = vec![
///     Point::new(0, 0, "base"),
///     Point::new(3, 4, "a"),
///     Point::new(6, 8, "b"),
/// ];
/// let dm = DistanceMatrix::from_points(&locations);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix of the given locations.
    pub fn from_points(points: &[Point]) -> Self {
        let size = points.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = euclidean(&points[i], &points[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest of `candidates` to `from` as a
    /// `(position in candidates, distance)` pair.
    ///
    /// Ties go to the candidate listed first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (pos, &c) in candidates.iter().enumerate() {
            let d = self.get(from, c);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((pos, d)),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0, 0, "base"),
            Point::new(3, 4, "a"),
            Point::new(0, 8, "b"),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert_eq!(dm.get(1, 1), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points());
        for i in 0..dm.size() {
            for j in 0..dm.size() {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
    }

    #[test]
    fn test_matches_euclidean() {
        let points = sample_points();
        let dm = DistanceMatrix::from_points(&points);
        assert_eq!(dm.get(1, 2), euclidean(&points[1], &points[2]));
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_points(&sample_points());
        // From base (0,0): a at (3,4) is dist 5, b at (0,8) is dist 8
        assert_eq!(dm.nearest_neighbor(0, &[2, 1]), Some((1, 5.0)));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some((0, 8.0)));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_keeps_first() {
        let points = vec![
            Point::new(0, 0, "base"),
            Point::new(0, 5, "north"),
            Point::new(5, 0, "east"),
            Point::new(-3, 4, "north-west"),
        ];
        let dm = DistanceMatrix::from_points(&points);
        assert_eq!(dm.nearest_neighbor(0, &[2, 1, 3]), Some((0, 5.0)));
        assert_eq!(dm.nearest_neighbor(0, &[3, 2, 1]), Some((0, 5.0)));
    }
}
