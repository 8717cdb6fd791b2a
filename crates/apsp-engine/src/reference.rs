//! Textbook Floyd–Warshall, the cross-check oracle for the doubling
//! engine.

use crate::mat::DistMatrix;

/// O(n³) all-pairs shortest-path distances.
///
/// Plain dynamic programming over intermediate vertices; used by tests
/// and the CLI verification pass to confirm the repeated-squaring result.
pub fn floyd_warshall(weights: &DistMatrix) -> DistMatrix {
    let n = weights.n();
    let mut dist = weights.clone();
    for k in 0..n {
        for i in 0..n {
            let ik = dist.get(i, k);
            if ik.is_unreachable() {
                continue;
            }
            for j in 0..n {
                let best = dist.get(i, j).min(ik.then(dist.get(k, j)));
                dist.set(i, j, best);
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f32 = f32::INFINITY;

    #[test]
    fn finds_multi_hop_routes() {
        #[rustfmt::skip]
        let weights = DistMatrix::from_weights(&[
            0.0, 3.0, INF, 7.0, INF,
            INF, 0.0, 2.0, INF, INF,
            INF, INF, 0.0, 1.0, 5.0,
            INF, INF, INF, 0.0, 2.0,
            INF, INF, INF, INF, 0.0,
        ], 5).unwrap();
        let dist = floyd_warshall(&weights);
        assert_eq!(dist.get(0, 2).value(), 5.0);
        assert_eq!(dist.get(0, 4).value(), 8.0);
        assert!(dist.get(4, 0).is_unreachable());
    }

    #[test]
    fn leaves_disconnected_pairs_unreachable() {
        let weights = DistMatrix::no_edges(3).unwrap();
        let dist = floyd_warshall(&weights);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(dist.get(i, j).is_unreachable(), i != j);
            }
        }
    }
}
