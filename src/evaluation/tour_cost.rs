//! Cyclic tour cost evaluation.
//!
//! # Algorithm
//!
//! The cost of a closed tour is the sum of the matrix entries along its
//! cyclic edges:
//!
//! ```text
//! cost = sum over i in 0..n of d(tour[i], tour[(i + 1) % n])
//! ```
//!
//! The closing edge from the last node back to the first is always included.
//!
//! # Complexity
//!
//! O(n) per evaluation.

use crate::distance::DistanceMatrix;

/// Computes the total length of a closed tour over the given matrix.
///
/// The tour is assumed to be a permutation of `[0, distances.size())`; no
/// validation is performed. A single-node tour costs `d(tour[0], tour[0])`,
/// i.e. the diagonal entry, conventionally zero.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
/// use tsp_exact::evaluation::tour_cost;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0],
///     vec![10.0, 0.0, 35.0],
///     vec![15.0, 35.0, 0.0],
/// ]).expect("square");
///
/// // 0→1 = 10, 1→2 = 35, 2→0 = 15
/// assert_eq!(tour_cost(&dm, &[0, 1, 2]), 60.0);
/// ```
pub fn tour_cost(distances: &DistanceMatrix, tour: &[usize]) -> f64 {
    let n = tour.len();
    let mut cost = 0.0;
    for i in 0..n {
        cost += distances.get(tour[i], tour[(i + 1) % n]);
    }
    cost
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_manual_sum() {
        let dm = sample_matrix();
        // 0→1 = 10, 1→3 = 25, 3→2 = 30, 2→0 = 15
        assert_eq!(tour_cost(&dm, &[0, 1, 3, 2]), 80.0);
    }

    #[test]
    fn test_closing_edge_included() {
        let dm = sample_matrix();
        // 0→2 = 15, 2→0 = 15; dropping the closing edge would give 15
        assert_eq!(tour_cost(&dm, &[0, 2]), 30.0);
    }

    #[test]
    fn test_single_node() {
        let dm = DistanceMatrix::from_rows(&[vec![0.0]]).expect("square");
        assert_eq!(tour_cost(&dm, &[0]), 0.0);
    }

    #[test]
    fn test_asymmetric_direction_matters() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 3.0);
        assert_eq!(tour_cost(&dm, &[0, 1]), 13.0);
    }

    #[test]
    fn test_rotation_changes_nothing_when_symmetric() {
        let dm = sample_matrix();
        let forward = tour_cost(&dm, &[0, 1, 3, 2]);
        let reversed = tour_cost(&dm, &[0, 2, 3, 1]);
        assert_eq!(forward, reversed);
    }
}
