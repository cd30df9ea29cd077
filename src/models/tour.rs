//! Tour solution types.

use serde::{Deserialize, Serialize};

/// An exact solution to a TSP instance: a closed tour and its total length.
///
/// The tour is a permutation of `[0, n)` beginning with node 0 and is
/// interpreted cyclically — the edge from the last node back to node 0
/// closes the loop and is included in `cost`.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::TourSolution;
///
/// let sol = TourSolution {
///     tour: vec![0, 1, 3, 2],
///     cost: 80.0,
/// };
/// assert_eq!(sol.tour[0], 0);
/// assert_eq!(sol.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourSolution {
    /// Node IDs in visit order, starting at node 0.
    pub tour: Vec<usize>,
    /// Total cyclic tour length, including the closing edge.
    pub cost: f64,
}

impl TourSolution {
    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns `true` if the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }
}

/// Returns `true` if `tour` is a permutation of `[0, n)` starting at node 0.
///
/// # Examples
///
/// ```
/// use tsp_exact::models::is_valid_tour;
///
/// assert!(is_valid_tour(&[0, 2, 1], 3));
/// assert!(!is_valid_tour(&[1, 0, 2], 3)); // doesn't start at 0
/// assert!(!is_valid_tour(&[0, 1, 1], 3)); // repeats a node
/// ```
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    if n > 0 && tour[0] != 0 {
        return false;
    }
    let mut seen = vec![false; n];
    for &node in tour {
        if node >= n || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}
