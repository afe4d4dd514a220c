//! Delivery route searcher.
//!
//! [`RouteSearcher`] owns a base point and the destinations to visit, and
//! runs one of the two [`SearchStrategy`] variants over them.

use log::{debug, warn};

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceMatrix;
use crate::error::RouteError;
use crate::exhaustive::{brute_force, Permutations};
use crate::models::{Point, Route};
use crate::trace::format_trace;

/// Default ceiling on destinations for [`SearchStrategy::BruteForce`].
///
/// 10! = 3,628,800 orderings, which finishes in well under a second.
pub const DEFAULT_BRUTE_FORCE_LIMIT: usize = 10;

/// Route search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Greedy nearest-neighbor heuristic, O(n²).
    #[default]
    NearestNeighbor,
    /// Exact search over every visiting order, O(n!·n).
    BruteForce,
}

impl SearchStrategy {
    /// Maps a "use brute force" flag to a strategy.
    pub fn from_bruteforce(bruteforce: bool) -> Self {
        if bruteforce {
            Self::BruteForce
        } else {
            Self::NearestNeighbor
        }
    }
}

/// Closed-route searcher over a base point and its destinations.
///
/// Destinations keep their insertion order, which decides ties in both
/// strategies.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Point;
/// use u_delivery::navigator::{RouteSearcher, SearchStrategy};
///
/// let mut searcher = RouteSearcher::new(Point::new(0, 0, "base"));
/// searcher.add_destination(Point::new(3, 4, "a")).unwrap();
/// assert_eq!(searcher.destination_count(), 1);
///
/// let trace = searcher.format_route(SearchStrategy::default()).unwrap();
/// assert_eq!(trace, "(0, 0) -> (3, 4) [5.000] -> (0, 0) [10.000] = 10.000");
/// ```
#[derive(Debug, Clone)]
pub struct RouteSearcher {
    base: Point,
    destinations: Vec<Point>,
    brute_force_limit: usize,
}

impl RouteSearcher {
    /// Creates a searcher with no destinations.
    pub fn new(base: Point) -> Self {
        Self {
            base,
            destinations: Vec::new(),
            brute_force_limit: DEFAULT_BRUTE_FORCE_LIMIT,
        }
    }

    /// Sets the largest destination count accepted by brute-force search.
    pub fn with_brute_force_limit(mut self, limit: usize) -> Self {
        self.brute_force_limit = limit;
        self
    }

    /// Appends a destination.
    ///
    /// Returns [`RouteError::BaseAsDestination`] if `point` equals the base.
    /// A point at the base coordinates under another label is accepted.
    pub fn add_destination(&mut self, point: Point) -> Result<(), RouteError> {
        if point == self.base {
            return Err(RouteError::BaseAsDestination);
        }
        self.destinations.push(point);
        Ok(())
    }

    /// Number of destinations added so far.
    pub fn destination_count(&self) -> usize {
        self.destinations.len()
    }

    /// The base point.
    pub fn base(&self) -> &Point {
        &self.base
    }

    /// Destinations in insertion order.
    pub fn destinations(&self) -> &[Point] {
        &self.destinations
    }

    /// Largest destination count accepted by brute-force search.
    pub fn brute_force_limit(&self) -> usize {
        self.brute_force_limit
    }

    /// Runs the selected search and returns the route.
    ///
    /// Returns [`RouteError::IntractableInputSize`] for brute force over more
    /// destinations than [`brute_force_limit`](Self::brute_force_limit).
    pub fn search(&self, strategy: SearchStrategy) -> Result<Route, RouteError> {
        let n = self.destinations.len();
        if strategy == SearchStrategy::BruteForce && n > self.brute_force_limit {
            match Permutations::total(n) {
                Some(orderings) => warn!(
                    "refusing brute-force search over {} destinations ({} orderings, limit {})",
                    n, orderings, self.brute_force_limit
                ),
                None => warn!(
                    "refusing brute-force search over {} destinations (orderings overflow usize, limit {})",
                    n, self.brute_force_limit
                ),
            }
            return Err(RouteError::IntractableInputSize {
                destinations: n,
                limit: self.brute_force_limit,
            });
        }

        debug!("searching {:?} route over {} destinations", strategy, n);
        let locations = self.locations();
        let distances = DistanceMatrix::from_points(&locations);
        let route = match strategy {
            SearchStrategy::NearestNeighbor => nearest_neighbor(&locations, &distances),
            SearchStrategy::BruteForce => brute_force(&locations, &distances),
        };
        Ok(route)
    }

    /// Runs the selected search and renders the route as a trace.
    ///
    /// See [`format_trace`](crate::trace::format_trace) for the format.
    pub fn format_route(&self, strategy: SearchStrategy) -> Result<String, RouteError> {
        self.search(strategy).map(|route| format_trace(&route))
    }

    /// Base followed by the destinations.
    fn locations(&self) -> Vec<Point> {
        let mut locations = Vec::with_capacity(self.destinations.len() + 1);
        locations.push(self.base.clone());
        locations.extend(self.destinations.iter().cloned());
        locations
    }
}
