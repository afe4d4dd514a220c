//! # u-delivery
//!
//! Closed delivery routes over labeled 2D points: start at a base, visit
//! every destination once, return to the base.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Route)
//! - [`distance`] — Euclidean metric and distance matrix
//! - [`evaluation`] — Leg distances and totals for a visiting order
//! - [`constructive`] — Nearest-neighbor heuristic
//! - [`exhaustive`] — Brute-force search over all visiting orders
//! - [`trace`] — Human-readable route traces
//! - [`navigator`] — [`RouteSearcher`](navigator::RouteSearcher), the entry point
//! - [`error`] — Error type

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exhaustive;
pub mod models;
pub mod navigator;
pub mod trace;

pub use error::RouteError;
pub use models::{Point, Route};
pub use navigator::{RouteSearcher, SearchStrategy, DEFAULT_BRUTE_FORCE_LIMIT};
