//! The semiring-multiply operation the engine dispatches.

use crate::mat::{DistMatrix, PredMatrix};
use thiserror::Error;

/// Errors from a kernel backend.
#[derive(Debug, Error)]
pub enum KernelError {
    /// The operand matrices disagree on their dimensions.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The backend could not run the operation.
    #[error("kernel launch failed: {0}")]
    Launch(String),
}

/// One min-plus multiply with simultaneous predecessor update.
///
/// This is the single unit of work a doubling round dispatches. For every
/// output cell:
///
/// `dst[i][j] = min over k of (a[i][k] + b[k][j])`
///
/// where any k whose leg holds the infinity sentinel is excluded from the
/// minimization. Along with the distance, the predecessor store is
/// refined from the snapshot the kernel observed at entry: with `k*` the
/// winning index (ties broken toward the lowest k),
/// `preds[i][j] = P_prev[k*][j]`, except that `k* = j` — the empty
/// extension, since `b[j][j] = 0` — keeps the incumbent `P_prev[i][j]`.
/// Cells whose minimization is empty keep the sentinel in `dst` and leave
/// their predecessor untouched.
///
/// Distance and predecessor updates happen in one pass over one snapshot;
/// an implementation must not split them into passes that could observe
/// different predecessor states.
///
/// The call is synchronous: when it returns `Ok`, every cell of `dst` and
/// `preds` is fully written. That return is the caller's commit barrier —
/// backends that dispatch asynchronously must wait for completion before
/// returning. Within one call, cells may be computed in any order or in
/// parallel, since each reads only the committed operands and the entry
/// snapshot.
pub trait SemiringKernel {
    /// Human-readable backend name for banners and logs.
    fn description(&self) -> String;

    /// Compute `dst = a ⊗ b`, refining `preds` in place.
    fn multiply(
        &self,
        a: &DistMatrix,
        b: &DistMatrix,
        preds: &mut PredMatrix,
        dst: &mut DistMatrix,
    ) -> Result<(), KernelError>;
}
