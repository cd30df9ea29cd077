//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! Node 0 is fixed as the tour origin. Every ordering of the remaining
//! n-1 nodes is generated in lexicographic order and evaluated as a closed
//! tour; the minimum-cost candidate is kept, with strict less-than so the
//! first candidate achieving the minimal cost wins ties.
//!
//! Permutations are produced by an explicit next-permutation step (swap the
//! rightmost ascent with its ceiling, then reverse the suffix) rather than a
//! combinatorics library, so the enumeration order is part of the contract.
//!
//! # Complexity
//!
//! Θ((n-1)! · n) — usable only as a reference for small instances.

use crate::distance::DistanceMatrix;
use crate::error::SolveError;
use crate::evaluation::tour_cost;
use crate::models::TourSolution;

/// Solves a TSP instance by enumerating all (n-1)! candidate tours.
///
/// Returns the optimal closed tour starting at node 0 and its cost.
///
/// # Errors
///
/// Returns [`SolveError::EmptyMatrix`] if the matrix has zero nodes.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
/// use tsp_exact::exact::brute_force;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).expect("square");
///
/// let sol = brute_force(&dm).expect("non-empty");
/// assert_eq!(sol.cost, 80.0);
/// ```
pub fn brute_force(distances: &DistanceMatrix) -> Result<TourSolution, SolveError> {
    let n = distances.size();
    if n == 0 {
        return Err(SolveError::EmptyMatrix);
    }
    if n == 1 {
        return Ok(TourSolution {
            tour: vec![0],
            cost: distances.get(0, 0),
        });
    }

    let mut perm: Vec<usize> = (1..n).collect();
    let mut candidate = vec![0; n];
    let mut best_cost = f64::INFINITY;
    let mut best_tour = Vec::new();

    loop {
        candidate[1..].copy_from_slice(&perm);
        let cost = tour_cost(distances, &candidate);
        if cost < best_cost {
            best_cost = cost;
            best_tour.clear();
            best_tour.extend_from_slice(&candidate);
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }

    Ok(TourSolution {
        tour: best_tour,
        cost: best_cost,
    })
}

/// Advances `seq` to its lexicographic successor in place.
///
/// Returns `false` once `seq` is the last (descending) permutation, leaving
/// it unchanged in that case.
fn next_permutation(seq: &mut [usize]) -> bool {
    let len = seq.len();
    if len < 2 {
        return false;
    }

    // Rightmost ascent seq[i-1] < seq[i].
    let mut i = len - 1;
    while i > 0 && seq[i - 1] >= seq[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    // Smallest element right of the ascent that still exceeds seq[i-1].
    let mut j = len - 1;
    while seq[j] <= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}
