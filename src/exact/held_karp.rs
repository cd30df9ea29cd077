//! Held-Karp dynamic programming solver.
//!
//! # Algorithm
//!
//! Let `dist(node, R)` be the minimum cost of starting at `node`, visiting
//! every node in the set `R` exactly once, and returning to node 0:
//!
//! ```text
//! dist(node, ∅) = d(node, 0)
//! dist(node, R) = min over nj in R of d(node, nj) + dist(nj, R \ {nj})
//! ```
//!
//! The optimal tour cost is `dist(0, {1, …, n-1})`. Subproblems overlap
//! heavily — each (node, R) state is shared by every partial path that
//! reaches `node` with `R` still unvisited — so memoizing them brings the
//! runtime from n! down to 2^n.
//!
//! `R` is a bitmask over nodes 1..n (bit j-1 ⇔ node j unvisited), and the
//! memo is a dense table indexed by `node * 2^(n-1) + mask`, populated
//! lazily by top-down recursion and written exactly once per state. The
//! minimizing `nj` of each state is recorded in a parallel next-hop table
//! at the same moment its cost is finalized; replaying that table from
//! `(0, full mask)` recovers the optimal tour in n-1 steps. Candidates are
//! scanned in increasing node order with strict less-than, so the stored
//! next hop is always the node whose cost was returned as the minimum.
//!
//! # Complexity
//!
//! Θ(n² · 2^n) time, Θ(n · 2^n) space — exponential, but a far smaller
//! base than the (n-1)! of exhaustive search. Intended for exact answers
//! on small-to-moderate instances (practically n ≤ ~20).
//!
//! # Reference
//!
//! Held, M. and Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of SIAM* 10(1), 196-210.

use crate::distance::DistanceMatrix;
use crate::error::SolveError;
use crate::models::TourSolution;

/// Largest node count the subset bitmask can represent (origin plus 63
/// maskable nodes).
pub const MAX_NODES: usize = 64;

/// Solves a TSP instance exactly with the Held-Karp dynamic program.
///
/// Returns the optimal closed tour starting at node 0 and its cost. A
/// fresh memo table is allocated per call; no state is shared across
/// invocations.
///
/// # Errors
///
/// Returns [`SolveError::EmptyMatrix`] if the matrix has zero nodes, and
/// [`SolveError::TooManyNodes`] if it has more than [`MAX_NODES`]. Note
/// that memory (Θ(n · 2^n)) becomes the practical limit long before the
/// mask does.
///
/// # Examples
///
/// ```
/// use tsp_exact::distance::DistanceMatrix;
/// use tsp_exact::exact::held_karp;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).expect("square");
///
/// let sol = held_karp(&dm).expect("solvable");
/// assert_eq!(sol.cost, 80.0);
/// assert_eq!(sol.tour[0], 0);
/// ```
pub fn held_karp(distances: &DistanceMatrix) -> Result<TourSolution, SolveError> {
    let n = distances.size();
    if n == 0 {
        return Err(SolveError::EmptyMatrix);
    }
    if n > MAX_NODES {
        return Err(SolveError::TooManyNodes {
            nodes: n,
            max: MAX_NODES,
        });
    }
    if n == 1 {
        return Ok(TourSolution {
            tour: vec![0],
            cost: distances.get(0, 0),
        });
    }

    let mut memo = Memo::new(distances, n);
    let full = (1u64 << (n - 1)) - 1;

    // The cost pass populates every state the reconstruction will read.
    let cost = memo.min_cost(0, full);
    let tour = memo.reconstruct(full);

    Ok(TourSolution { tour, cost })
}

/// Per-solve memo: dense cost and next-hop tables over (node, mask) states.
struct Memo<'a> {
    distances: &'a DistanceMatrix,
    n: usize,
    /// Number of masks per node, 2^(n-1).
    width: usize,
    /// Minimal remaining cost per state; NaN marks an unvisited state.
    cost: Vec<f64>,
    /// Argmin node per state, written together with its cost.
    next_hop: Vec<u32>,
}

impl<'a> Memo<'a> {
    fn new(distances: &'a DistanceMatrix, n: usize) -> Self {
        let width = 1usize << (n - 1);
        // Allocation itself is the practical limit; the checked multiply
        // only turns an address-space overflow into a deterministic panic.
        let states = n.checked_mul(width).expect("memo size overflows usize");
        Self {
            distances,
            n,
            width,
            cost: vec![f64::NAN; states],
            next_hop: vec![0; states],
        }
    }

    fn index(&self, node: usize, remaining: u64) -> usize {
        node * self.width + remaining as usize
    }

    /// Minimum cost to start at `node`, visit every node in `remaining`,
    /// and return to node 0.
    fn min_cost(&mut self, node: usize, remaining: u64) -> f64 {
        if remaining == 0 {
            return self.distances.get(node, 0);
        }

        let idx = self.index(node, remaining);
        let cached = self.cost[idx];
        if !cached.is_nan() {
            return cached;
        }

        let mut best = f64::INFINITY;
        let mut best_next = 0u32;
        let mut rest = remaining;
        while rest != 0 {
            let bit = rest.trailing_zeros();
            rest &= rest - 1;
            let nj = bit as usize + 1;
            let cost = self.distances.get(node, nj) + self.min_cost(nj, remaining & !(1 << bit));
            if cost < best {
                best = cost;
                best_next = nj as u32;
            }
        }

        self.cost[idx] = best;
        self.next_hop[idx] = best_next;
        best
    }

    /// Replays the next-hop table from the origin to recover the optimal
    /// tour. Must run after `min_cost(0, full)`.
    fn reconstruct(&self, full: u64) -> Vec<usize> {
        let mut tour = Vec::with_capacity(self.n);
        tour.push(0);

        let mut node = 0;
        let mut remaining = full;
        while remaining != 0 {
            let next = self.next_hop[self.index(node, remaining)] as usize;
            tour.push(next);
            remaining &= !(1u64 << (next - 1));
            node = next;
        }
        tour
    }
}
