//! Random test-input generation.

use apsp_engine::{ClosureError, DistMatrix};
use apsp_types::Cost;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sparse random digraph in the classic harness's shape: zero diagonal,
/// about ⌊n/4⌋ random finite out-edges per vertex with integer weights
/// below 400, everything else unreachable.
pub fn sparse_random(n: usize, seed: u64) -> Result<DistMatrix, ClosureError> {
    let mut dist = DistMatrix::no_edges(n)?;
    let mut rng = StdRng::seed_from_u64(seed);
    for i in 0..n {
        for _ in 0..n / 4 {
            let j = rng.gen_range(0..n);
            dist.set(i, j, Cost::new(rng.gen_range(0..400) as f32));
        }
        // A random edge may have landed on the diagonal; restore it.
        dist.set(i, i, Cost::ZERO);
    }
    Ok(dist)
}
