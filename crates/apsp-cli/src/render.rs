//! Fixed-width matrix tables with 1-based labels, matching the output
//! format of the classic harness.

use apsp_engine::{DistMatrix, PredMatrix};

fn table(n: usize, cell: impl Fn(usize, usize) -> String) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>4} ", -1));
    for j in 0..n {
        out.push_str(&format!("{:>4} ", j + 1));
    }
    out.push('\n');
    out.push_str(&"_".repeat(5 * n + 4));
    for i in 0..n {
        out.push('\n');
        out.push_str(&format!("{:>4}|", i + 1));
        for j in 0..n {
            out.push_str(&format!("{:>4} ", cell(i, j)));
        }
    }
    out
}

/// Distance table; the sentinel renders as `inf`.
pub fn distances(m: &DistMatrix) -> String {
    table(m.n(), |i, j| {
        let c = m.get(i, j);
        if c.is_unreachable() {
            "inf".to_string()
        } else {
            format!("{:.0}", c.value())
        }
    })
}

/// Predecessor table, with the stored 0-based vertex ids shifted to the
/// same 1-based labels the headers use.
pub fn predecessors(m: &PredMatrix) -> String {
    table(m.n(), |i, j| (m.get(i, j) + 1).to_string())
}
