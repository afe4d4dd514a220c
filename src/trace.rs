//! Human-readable route traces.
//!
//! A trace lists the stop coordinates with the distance travelled so far:
//!
//! ```text
//! (0, 2) -> (2, 5) [3.606] -> (6, 6) [7.729] -> ... -> (0, 2) [19.496] = 19.496
//! ```
//!
//! Every bracketed value and the final total are rounded on their own, half
//! away from zero, to [`DECIMALS`] places. The total is the rounded exact sum,
//! not a sum of rounded values, so the two can disagree in the last digit.

use crate::models::Route;

/// Decimal places shown for distances.
pub const DECIMALS: i32 = 3;

/// Rounds half away from zero to [`DECIMALS`] places.
///
/// ```
/// use u_delivery::trace::round_distance;
///
/// assert_eq!(round_distance(3.605551), 3.606);
/// assert_eq!(round_distance(0.0005), 0.001);
/// ```
pub fn round_distance(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    (value * scale).round() / scale
}

/// Renders a route as a single-line trace.
///
/// Labels are not shown, only coordinates.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Point, Route};
/// use u_delivery::trace::format_trace;
///
/// let base = Point::new(0, 0, "base");
/// let route = Route::new(
///     vec![base.clone(), Point::new(3, 4, "a"), base],
///     vec![5.0, 5.0],
/// )
/// .unwrap();
/// assert_eq!(format_trace(&route), "(0, 0) -> (3, 4) [5.000] -> (0, 0) [10.000] = 10.000");
/// ```
pub fn format_trace(route: &Route) -> String {
    let stops = route.stops();
    let mut parts = vec![coords(stops[0].coords())];
    for (stop, travelled) in stops[1..].iter().zip(route.cumulative_distances()) {
        parts.push(format!(
            "{} [{}]",
            coords(stop.coords()),
            fixed(round_distance(travelled))
        ));
    }
    format!(
        "{} = {}",
        parts.join(" -> "),
        fixed(round_distance(route.total_distance()))
    )
}

fn coords((x, y): (i32, i32)) -> String {
    format!("({x}, {y})")
}

fn fixed(value: f64) -> String {
    format!("{:.*}", DECIMALS as usize, value)
}
