//! Distance matrices.
//!
//! Provides the dense distance matrix consumed by the exact solvers.

mod matrix;

pub use matrix::DistanceMatrix;
