//! All-pairs shortest paths by repeated squaring under the min-plus
//! semiring.
//!
//! A distance matrix that is exact for paths of up to L edges, min-plus
//! multiplied by itself, becomes exact for paths of up to 2L edges. The
//! [`ClosureEngine`] exploits this: starting from the adjacency matrix
//! (exact for single edges), ⌈log₂ n⌉ self-multiplications cover every
//! simple path in an n-vertex graph. Alongside the distances, a
//! predecessor matrix is refined in the same dispatches, so shortest
//! paths can be reconstructed afterwards.
//!
//! The multiply itself is behind the [`SemiringKernel`] trait — one
//! synchronous "min-plus multiply plus predecessor update" operation per
//! doubling round. [`PortableKernel`] is the in-tree CPU backend;
//! accelerator backends attach at the same seam.
//!
//! # Quick start
//!
//! ```
//! use apsp_engine::{ClosureEngine, ComputeSession, DistMatrix, PredMatrix};
//!
//! let inf = f32::INFINITY;
//! // 0 → 1 → 2, weight 1 per edge.
//! let weights = [
//!     0.0, 1.0, inf, //
//!     inf, 0.0, 1.0, //
//!     inf, inf, 0.0, //
//! ];
//! let distances = DistMatrix::from_weights(&weights, 3)?;
//! let predecessors = PredMatrix::row_rooted(3)?;
//!
//! let engine = ClosureEngine::new(ComputeSession::portable());
//! let paths = engine.compute_closure(distances, predecessors)?;
//!
//! assert_eq!(paths.distances[(0, 2)].value(), 2.0);
//! assert_eq!(paths.predecessors[(0, 2)], 1);
//! # Ok::<(), apsp_engine::ClosureError>(())
//! ```

pub mod engine;
pub mod error;
pub mod kernel;
pub mod mat;
pub mod portable;
pub mod reference;
pub mod session;
pub mod timing;

pub use engine::{ClosureEngine, ShortestPaths};
pub use error::ClosureError;
pub use kernel::{KernelError, SemiringKernel};
pub use mat::{DistMatrix, PredMatrix, SquareMat};
pub use portable::PortableKernel;
pub use session::ComputeSession;
pub use timing::RoundTiming;
