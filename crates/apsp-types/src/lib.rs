//! Cell types for min-plus shortest-path matrices.
//!
//! A distance matrix over the min-plus (tropical) semiring stores one
//! [`Cost`] per vertex pair:
//!
//! - semiring addition (⊕) is `min` — choosing the cheaper of two routes,
//! - semiring multiplication (⊗) is `+` — concatenating two path legs,
//! - the semiring zero is +∞ ([`Cost::UNREACHABLE`]) — no route,
//! - the semiring one is 0 ([`Cost::ZERO`]) — the empty path.
//!
//! A predecessor matrix stores one [`Vertex`] per pair: the vertex that
//! precedes the column vertex on the best known path.

mod cost;

pub use cost::Cost;

/// Vertex identifier stored in predecessor matrices (0-based).
pub type Vertex = u32;
