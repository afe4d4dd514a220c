//! Domain model types for delivery routing.
//!
//! A [`Point`] is a labeled grid location; a [`Route`] is the ordered list
//! of stops from the base back to the base together with its leg distances.

mod point;
mod route;

pub use point::Point;
pub use route::Route;
