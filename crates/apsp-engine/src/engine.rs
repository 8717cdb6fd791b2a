//! The closure engine: doubling loop, buffer ping-pong, result assembly.

use crate::error::{ClosureError, Result};
use crate::kernel::SemiringKernel;
use crate::mat::{DistMatrix, PredMatrix};
use crate::session::ComputeSession;
use crate::timing::RoundTiming;
use std::time::Instant;
use tracing::debug;

/// Which of the two slots holds committed truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    A,
    B,
}

/// Two distance buffers alternating between "current" and "scratch".
///
/// `split` hands out the committed slot read-only and the scratch slot
/// writable, so a round can never read its own output; `commit` exchanges
/// the role labels without copying a cell. No intermediate state escapes:
/// the only way out is [`BufferPair::into_current`], which yields the
/// slot that passed its round's commit barrier.
#[derive(Debug)]
struct BufferPair {
    a: DistMatrix,
    b: DistMatrix,
    current: Role,
}

impl BufferPair {
    fn new(initial: DistMatrix, scratch: DistMatrix) -> Self {
        Self {
            a: initial,
            b: scratch,
            current: Role::A,
        }
    }

    /// `(current, scratch)` for the next dispatch.
    fn split(&mut self) -> (&DistMatrix, &mut DistMatrix) {
        match self.current {
            Role::A => (&self.a, &mut self.b),
            Role::B => (&self.b, &mut self.a),
        }
    }

    /// Exchange role labels after a dispatch has fully committed.
    fn commit(&mut self) {
        self.current = match self.current {
            Role::A => Role::B,
            Role::B => Role::A,
        };
    }

    /// Consume the pair, yielding the committed slot.
    fn into_current(self) -> DistMatrix {
        match self.current {
            Role::A => self.a,
            Role::B => self.b,
        }
    }
}

/// Final all-pairs result.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// Shortest-path cost for every vertex pair.
    pub distances: DistMatrix,
    /// Predecessor of the column vertex on each shortest path.
    pub predecessors: PredMatrix,
    /// One record per committed doubling round.
    pub rounds: Vec<RoundTiming>,
}

/// Orchestrates repeated min-plus squaring until every simple path is
/// covered.
///
/// The engine owns a [`ComputeSession`] and, per computation, a pair of
/// distance buffers plus the predecessor store. Each round dispatches one
/// synchronous multiply, waits for it to commit, swaps the buffer roles,
/// and doubles the covered path-length bound; the loop exits once the
/// bound reaches the vertex count, after ⌈log₂ n⌉ dispatches.
pub struct ClosureEngine<K: SemiringKernel> {
    session: ComputeSession<K>,
}

impl<K: SemiringKernel> ClosureEngine<K> {
    /// Build an engine on top of an explicitly owned session.
    pub fn new(session: ComputeSession<K>) -> Self {
        Self { session }
    }

    /// Compute the min-plus closure of `distances`, refining
    /// `predecessors` alongside.
    ///
    /// Expects a zero diagonal and row-rooted predecessors (see
    /// `PredMatrix::row_rooted`). Fails with
    /// [`ClosureError::InvalidSize`] for an empty matrix or mismatched
    /// inputs — before any dispatch — and with
    /// [`ClosureError::ComputeFailure`] if a round's dispatch fails, in
    /// which case no partial result is returned.
    pub fn compute_closure(
        &self,
        distances: DistMatrix,
        predecessors: PredMatrix,
    ) -> Result<ShortestPaths> {
        let n = distances.n();
        if n == 0 {
            return Err(ClosureError::InvalidSize(
                "a graph needs at least one vertex".to_string(),
            ));
        }
        if predecessors.n() != n {
            return Err(ClosureError::InvalidSize(format!(
                "distances are {n}x{n} but predecessors are {m}x{m}",
                m = predecessors.n()
            )));
        }

        let scratch = self.session.alloc_distances(n)?;
        let mut pair = BufferPair::new(distances, scratch);
        let mut predecessors = predecessors;
        let mut rounds = Vec::new();

        // The current slot is exact for paths of up to `covered` edges;
        // one squaring doubles that bound.
        let mut covered: usize = 1;
        let mut round: u32 = 0;
        while covered < n {
            round += 1;
            let started = Instant::now();
            let (cur, nxt) = pair.split();
            self.session
                .kernel()
                .multiply(cur, cur, &mut predecessors, nxt)
                .map_err(|source| ClosureError::ComputeFailure { round, source })?;
            // The kernel returning Ok is this round's commit barrier:
            // every cell of the scratch slot is written, so the roles may
            // exchange and the next round may read it.
            pair.commit();
            covered = covered.saturating_mul(2);
            let elapsed = started.elapsed();
            debug!(round, covered, ?elapsed, "doubling round committed");
            rounds.push(RoundTiming {
                round,
                covered,
                elapsed,
            });
        }

        Ok(ShortestPaths {
            distances: pair.into_current(),
            predecessors,
            rounds,
        })
    }
}
