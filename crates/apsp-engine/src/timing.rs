//! Per-round timing records.
//!
//! The engine exposes round timestamps for external collectors but does
//! not interpret them.

use std::time::Duration;

/// Timing for one committed doubling round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTiming {
    /// 1-based round index.
    pub round: u32,
    /// Path-length bound covered after this round committed.
    pub covered: usize,
    /// Wall time from dispatch to commit barrier.
    pub elapsed: Duration,
}

/// Total wall time across the given rounds.
pub fn total_elapsed(rounds: &[RoundTiming]) -> Duration {
    rounds.iter().map(|r| r.elapsed).sum()
}
