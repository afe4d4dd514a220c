//! Route evaluation: leg distances and totals for a visiting order.

mod evaluator;

pub use evaluator::{RouteEvaluator, BASE};
