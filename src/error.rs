//! Error type shared by point construction and route search.

use thiserror::Error;

/// Errors returned by [`Point::from_f64`](crate::models::Point::from_f64),
/// [`RouteSearcher`](crate::navigator::RouteSearcher), and route deserialization.
///
/// Zero destinations is not an error: the route is simply `[base, base]`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// A coordinate was non-finite, fractional, or outside the `i32` range.
    #[error("invalid coordinate ({x}, {y})")]
    InvalidCoordinate {
        /// Rejected x value.
        x: f64,
        /// Rejected y value.
        y: f64,
    },
    /// The base point was offered as a destination.
    #[error("the base point cannot be added as a destination")]
    BaseAsDestination,
    /// Stop and leg counts do not describe a closed route.
    #[error("malformed route: {stops} stops with {legs} legs")]
    MalformedRoute {
        /// Number of stops.
        stops: usize,
        /// Number of legs.
        legs: usize,
    },
    /// Brute-force search was requested for more destinations than the ceiling allows.
    #[error("brute-force search over {destinations} destinations exceeds the limit of {limit}")]
    IntractableInputSize {
        /// Number of destinations in the searcher.
        destinations: usize,
        /// Configured brute-force ceiling.
        limit: usize,
    },
}
