//! Exact TSP solvers.
//!
//! - [`brute_force`] — exhaustive permutation enumeration, Θ((n-1)!·n)
//! - [`held_karp`] — dynamic programming over node subsets, Θ(n²·2^n)
//!
//! Both solvers take a [`DistanceMatrix`](crate::distance::DistanceMatrix)
//! and return the same [`TourSolution`](crate::models::TourSolution): an
//! optimal closed tour rooted at node 0 and its total cyclic length. They
//! are independent; the brute-force solver exists as a reference
//! implementation for cross-validating the dynamic program on small
//! instances.

mod brute_force;
mod held_karp;

pub use brute_force::brute_force;
pub use held_karp::{held_karp, MAX_NODES};
