//! Text-file matrix loader.
//!
//! Format: the vertex count, then n·n row-major entries separated by
//! whitespace. `inf` (any case) marks an absent edge.

use anyhow::{Context, Result};
use apsp_engine::DistMatrix;
use std::path::Path;

/// Load a distance matrix from `path`.
pub fn distances_from_file(path: &Path) -> Result<DistMatrix> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_distances(&text).with_context(|| format!("parsing {}", path.display()))
}

fn parse_distances(text: &str) -> Result<DistMatrix> {
    let mut tokens = text.split_whitespace();
    let n: usize = tokens
        .next()
        .context("missing vertex count")?
        .parse()
        .context("vertex count is not an integer")?;
    let cells = n.checked_mul(n).context("vertex count too large")?;

    let mut weights = Vec::with_capacity(cells);
    for idx in 0..cells {
        let token = tokens
            .next()
            .with_context(|| format!("entry {} of {cells} missing", idx + 1))?;
        let weight = if token.eq_ignore_ascii_case("inf") {
            f32::INFINITY
        } else {
            token
                .parse::<f32>()
                .with_context(|| format!("bad matrix entry {token:?}"))?
        };
        weights.push(weight);
    }
    Ok(DistMatrix::from_weights(&weights, n)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_size_then_entries() {
        let dist = parse_distances("2\n0 inf\n3 0\n").unwrap();
        assert_eq!(dist.n(), 2);
        assert!(dist.get(0, 1).is_unreachable());
        assert_eq!(dist.get(1, 0).value(), 3.0);
    }

    #[test]
    fn inf_token_is_case_insensitive() {
        let dist = parse_distances("2 0 INF Inf 0").unwrap();
        assert!(dist.get(0, 1).is_unreachable());
        assert!(dist.get(1, 0).is_unreachable());
    }

    #[test]
    fn truncated_input_is_an_error() {
        let err = parse_distances("3 0 1 2").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn junk_entries_are_an_error() {
        assert!(parse_distances("1 abc").is_err());
        assert!(parse_distances("abc").is_err());
    }

    #[test]
    fn reads_from_disk() {
        let path = std::env::temp_dir().join(format!("apsp-load-test-{}.txt", std::process::id()));
        std::fs::write(&path, "1\n0\n").unwrap();
        let dist = distances_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(dist.n(), 1);
        assert_eq!(dist.get(0, 0).value(), 0.0);
    }
}
