//! Labeled point type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// A labeled location on the integer grid.
///
/// The label is a human-readable address. It is only used for display; the
/// search algorithms look at coordinates alone. Fields are private so a point
/// cannot change after construction.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Point;
///
/// let office = Point::new(0, 2, "Post office");
/// assert_eq!(office.coords(), (0, 2));
/// assert_eq!(office.to_string(), "Post office");
///
/// let house = Point::new(3, 6, "Baker Street 221b");
/// assert!((office.distance_to(&house) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
    label: String,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
        }
    }

    /// Creates a point from floating-point coordinates.
    ///
    /// Returns [`RouteError::InvalidCoordinate`] if either value is
    /// non-finite, has a fractional part, or does not fit in an `i32`.
    ///
    /// ```
    /// use u_delivery::models::Point;
    ///
    /// assert!(Point::from_f64(4.0, -1.0, "depot").is_ok());
    /// assert!(Point::from_f64(f64::NAN, 0.0, "nowhere").is_err());
    /// assert!(Point::from_f64(0.5, 0.0, "halfway").is_err());
    /// ```
    pub fn from_f64(x: f64, y: f64, label: impl Into<String>) -> Result<Self, RouteError> {
        match (grid_value(x), grid_value(y)) {
            (Some(gx), Some(gy)) => Ok(Self::new(gx, gy, label)),
            _ => Err(RouteError::InvalidCoordinate { x, y }),
        }
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Human-readable address.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Coordinates as an `(x, y)` pair.
    pub fn coords(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn grid_value(v: f64) -> Option<i32> {
    if !v.is_finite() || v.fract() != 0.0 {
        return None;
    }
    if v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
        return None;
    }
    Some(v as i32)
}
