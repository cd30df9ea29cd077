//! Error types for the exact solvers.

use thiserror::Error;

/// Errors surfaced by the exact solvers.
///
/// Both solvers are total functions over valid input: they either compute
/// the full exact answer or fail fast with one of these variants. There is
/// no recoverable or partial-result error class.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The distance matrix has zero nodes.
    #[error("distance matrix is empty")]
    EmptyMatrix,

    /// The instance has more nodes than the Held-Karp subset bitmask can
    /// represent.
    #[error("instance has {nodes} nodes, exceeding the supported maximum of {max}")]
    TooManyNodes {
        /// Number of nodes in the rejected instance.
        nodes: usize,
        /// Largest supported node count.
        max: usize,
    },
}
