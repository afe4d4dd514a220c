//! Exact search by full enumeration.
//!
//! - [`Permutations`] — Lazy lexicographic ordering generator
//! - [`brute_force`] — Minimum-distance tour over all orderings, O(n!·n)

mod brute_force;
mod permutations;

pub use brute_force::brute_force;
pub use permutations::Permutations;
