//! Portable CPU implementation of the semiring multiply.

use crate::kernel::{KernelError, SemiringKernel};
use crate::mat::{DistMatrix, PredMatrix};
use apsp_types::Cost;

/// CPU backend: one unit of work per output cell over the 2D grid.
///
/// Each cell scans its k-range with a strict-improvement comparison, so
/// ties resolve toward the lowest k deterministically. The predecessor
/// store is snapshotted at entry; every cell's update reads that snapshot,
/// never a neighbour's same-round write.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortableKernel;

impl PortableKernel {
    /// Create the portable kernel.
    pub fn new() -> Self {
        Self
    }
}

fn check_square(n: usize, other: usize, name: &str) -> Result<(), KernelError> {
    if other != n {
        return Err(KernelError::DimensionMismatch(format!(
            "{name} is {other}x{other} but the left operand is {n}x{n}"
        )));
    }
    Ok(())
}

impl SemiringKernel for PortableKernel {
    fn description(&self) -> String {
        "portable CPU kernel (one work item per output cell)".to_string()
    }

    fn multiply(
        &self,
        a: &DistMatrix,
        b: &DistMatrix,
        preds: &mut PredMatrix,
        dst: &mut DistMatrix,
    ) -> Result<(), KernelError> {
        let n = a.n();
        check_square(n, b.n(), "right operand")?;
        check_square(n, preds.n(), "predecessor matrix")?;
        check_square(n, dst.n(), "destination")?;

        // Entry snapshot: predecessor reads must not observe another
        // cell's write from this same dispatch.
        let prev = preds.as_slice().to_vec();
        let av = a.as_slice();
        let bv = b.as_slice();

        for i in 0..n {
            let a_row = &av[i * n..(i + 1) * n];
            for j in 0..n {
                let mut best = Cost::UNREACHABLE;
                let mut via = None;
                for (k, &leg_in) in a_row.iter().enumerate() {
                    if leg_in.is_unreachable() {
                        continue;
                    }
                    let leg_out = bv[k * n + j];
                    if leg_out.is_unreachable() {
                        continue;
                    }
                    let candidate = leg_in.then(leg_out);
                    if candidate < best {
                        best = candidate;
                        via = Some(k);
                    }
                }
                dst.set(i, j, best);
                if let Some(k) = via {
                    // k == j is the empty extension (b[j][j] = 0): the path
                    // is the incumbent i→j, whose predecessor stands.
                    let p = if k == j { prev[i * n + j] } else { prev[k * n + j] };
                    preds.set(i, j, p);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apsp_types::Vertex;

    const INF: f32 = f32::INFINITY;

    fn dist(weights: &[f32], n: usize) -> DistMatrix {
        DistMatrix::from_weights(weights, n).unwrap()
    }

    fn multiply_once(d: &DistMatrix) -> (DistMatrix, PredMatrix) {
        let n = d.n();
        let mut preds = PredMatrix::row_rooted(n).unwrap();
        let mut out = DistMatrix::no_edges(n).unwrap();
        PortableKernel::new()
            .multiply(d, d, &mut preds, &mut out)
            .unwrap();
        (out, preds)
    }

    #[test]
    fn rejects_mismatched_operands() {
        let a = DistMatrix::no_edges(3).unwrap();
        let b = DistMatrix::no_edges(2).unwrap();
        let mut preds = PredMatrix::row_rooted(3).unwrap();
        let mut out = DistMatrix::no_edges(3).unwrap();
        let err = PortableKernel::new()
            .multiply(&a, &b, &mut preds, &mut out)
            .unwrap_err();
        assert!(matches!(err, KernelError::DimensionMismatch(_)));
    }

    #[test]
    fn squaring_finds_two_hop_routes() {
        // 0 → 1 → 2, plus an expensive direct 0 → 2.
        #[rustfmt::skip]
        let d = dist(&[
            0.0, 1.0, 10.0,
            INF, 0.0,  1.0,
            INF, INF,  0.0,
        ], 3);
        let (out, preds) = multiply_once(&d);
        assert_eq!(out.get(0, 2).value(), 2.0);
        assert_eq!(preds.get(0, 2), 1);
    }

    #[test]
    fn empty_minimization_keeps_sentinel_and_predecessor() {
        // Two isolated vertices: every k-leg for (0, 1) is infinite.
        let d = dist(&[0.0, INF, INF, 0.0], 2);
        let (out, preds) = multiply_once(&d);
        assert!(out.get(0, 1).is_unreachable());
        assert!(out.get(1, 0).is_unreachable());
        // Predecessors stay at their initial row-rooted values.
        assert_eq!(preds.get(0, 1), 0);
        assert_eq!(preds.get(1, 0), 1);
    }

    #[test]
    fn incumbent_predecessor_survives_when_already_optimal() {
        // Edge 1 → 0 only. The minimization for (1, 0) ties between
        // k = 0 (empty extension) and k = 1 (empty first leg); either way
        // the predecessor must remain vertex 1, not collapse to 0.
        let d = dist(&[0.0, INF, 5.0, 0.0], 2);
        let (out, preds) = multiply_once(&d);
        assert_eq!(out.get(1, 0).value(), 5.0);
        assert_eq!(preds.get(1, 0), 1 as Vertex);
    }

    #[test]
    fn predecessor_update_reads_the_entry_snapshot() {
        // Edges: 1→3 (1), 3→0 (1), 1→0 (10), 2→1 (1).
        // In this round, (1, 0) improves to the 2-hop route via 3, so its
        // predecessor becomes 3. Cell (2, 0) extends the *old* direct edge
        // 1→0 and must record predecessor 1 — reading row 1's same-round
        // write instead would yield 3, a vertex not on the 2-hop path.
        #[rustfmt::skip]
        let d = dist(&[
             0.0, INF, INF, INF,
            10.0, 0.0, INF, 1.0,
             INF, 1.0, 0.0, INF,
             1.0, INF, INF, 0.0,
        ], 4);
        let (out, preds) = multiply_once(&d);
        assert_eq!(out.get(1, 0).value(), 2.0);
        assert_eq!(preds.get(1, 0), 3);
        assert_eq!(out.get(2, 0).value(), 11.0);
        assert_eq!(preds.get(2, 0), 1);
    }

    #[test]
    fn diagonal_stays_zero_with_self_predecessors() {
        #[rustfmt::skip]
        let d = dist(&[
            0.0, 2.0, INF,
            INF, 0.0, 3.0,
            4.0, INF, 0.0,
        ], 3);
        let (out, preds) = multiply_once(&d);
        for i in 0..3 {
            assert_eq!(out.get(i, i), Cost::ZERO);
            assert_eq!(preds.get(i, i), i as Vertex);
        }
    }
}
