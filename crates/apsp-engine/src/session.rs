//! Explicitly owned compute resources.

use crate::error::Result;
use crate::kernel::SemiringKernel;
use crate::mat::DistMatrix;
use crate::portable::PortableKernel;
use apsp_types::Cost;

/// Owns a kernel backend and allocates the buffers a computation needs.
///
/// There is no ambient global state: a session is constructed up front,
/// handed to the [`ClosureEngine`](crate::ClosureEngine) by value, and
/// everything it owns is released when it drops — on error paths too.
#[derive(Debug)]
pub struct ComputeSession<K: SemiringKernel> {
    kernel: K,
}

impl ComputeSession<PortableKernel> {
    /// Session backed by the portable CPU kernel.
    pub fn portable() -> Self {
        Self::new(PortableKernel::new())
    }
}

impl<K: SemiringKernel> ComputeSession<K> {
    /// Wrap an explicit kernel backend.
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    /// The kernel this session dispatches to.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Allocate one distance-matrix-sized scratch slot.
    pub fn alloc_distances(&self, n: usize) -> Result<DistMatrix> {
        DistMatrix::filled(n, Cost::UNREACHABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portable_session_allocates_scratch() {
        let session = ComputeSession::portable();
        let scratch = session.alloc_distances(4).unwrap();
        assert_eq!(scratch.n(), 4);
        assert!(scratch.as_slice().iter().all(|c| c.is_unreachable()));
    }

    #[test]
    fn kernel_describes_itself() {
        let session = ComputeSession::portable();
        assert!(!session.kernel().description().is_empty());
    }
}
