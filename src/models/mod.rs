//! Domain model types for the exact TSP solvers.
//!
//! Provides the tour solution returned by both solvers and a validity
//! helper for closed tours.

mod tour;

pub use tour::{is_valid_tour, TourSolution};
