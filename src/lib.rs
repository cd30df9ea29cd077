//! # tsp-exact
//!
//! Exact Traveling Salesman Problem solvers over a dense distance matrix:
//! exhaustive permutation search and the Held-Karp dynamic program, both
//! returning an optimal closed tour rooted at node 0 and its total length.
//!
//! ## Modules
//!
//! - [`distance`] — Dense distance matrix
//! - [`models`] — Tour solution type and validity helper
//! - [`evaluation`] — Cyclic tour cost evaluation
//! - [`exact`] — The two exact solvers (brute force, Held-Karp)
//! - [`error`] — Solver error type
//!
//! ## Example
//!
//! ```
//! use tsp_exact::distance::DistanceMatrix;
//! use tsp_exact::exact::held_karp;
//!
//! let dm = DistanceMatrix::from_rows(&[
//!     vec![0.0, 10.0, 15.0, 20.0],
//!     vec![10.0, 0.0, 35.0, 25.0],
//!     vec![15.0, 35.0, 0.0, 30.0],
//!     vec![20.0, 25.0, 30.0, 0.0],
//! ]).expect("square");
//!
//! let sol = held_karp(&dm).expect("solvable");
//! assert_eq!(sol.cost, 80.0);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod models;
