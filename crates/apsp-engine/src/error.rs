//! Error types for the closure computation.

use crate::kernel::KernelError;
use thiserror::Error;

/// Errors surfaced by the closure engine.
///
/// Any of these aborts the whole computation: the engine never returns a
/// partially-converged result, because one is indistinguishable from a
/// correct answer on a small-diameter graph.
#[derive(Debug, Error)]
pub enum ClosureError {
    /// The requested size cannot describe a graph, or the two input
    /// matrices disagree on their dimensions.
    #[error("invalid matrix size: {0}")]
    InvalidSize(String),

    /// A semiring-multiply dispatch failed.
    #[error("semiring multiply failed in round {round}")]
    ComputeFailure {
        /// 1-based index of the doubling round that failed.
        round: u32,
        #[source]
        source: KernelError,
    },

    /// A matrix-sized buffer could not be obtained.
    #[error("failed to allocate a {n}x{n} matrix ({cells} cells)")]
    AllocationFailure { n: usize, cells: usize },
}

/// Result type for closure operations.
pub type Result<T> = std::result::Result<T, ClosureError>;
