//! Command-line driver for the min-plus closure engine.
//!
//! Generates (or loads) a distance matrix, runs the doubling engine, and
//! prints both result matrices as fixed-width tables.

mod gen;
mod load;
mod render;

use anyhow::{bail, Result};
use apsp_engine::reference::floyd_warshall;
use apsp_engine::{timing, ClosureEngine, ComputeSession, PredMatrix, SemiringKernel};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// All-pairs shortest paths by min-plus matrix squaring.
#[derive(Debug, Parser)]
#[command(name = "apsp", version)]
struct Args {
    /// Number of vertices in the generated graph.
    #[arg(default_value_t = 16, conflicts_with = "input")]
    size: usize,

    /// Read the distance matrix from a text file instead of generating
    /// one.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Seed for the random generator (defaults to a fresh one).
    #[arg(long, conflicts_with = "input")]
    seed: Option<u64>,

    /// Cross-check the result against a CPU Floyd-Warshall run.
    #[arg(long)]
    verify: bool,

    /// Print the matrices even when the graph is large.
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let distances = match &args.input {
        Some(path) => load::distances_from_file(path)?,
        None => {
            let seed = args.seed.unwrap_or_else(rand::random);
            info!(size = args.size, seed, "generating random graph");
            gen::sparse_random(args.size, seed)?
        }
    };
    let n = distances.n();
    let predecessors = PredMatrix::row_rooted(n)?;

    let session = ComputeSession::portable();
    println!("Using {}.", session.kernel().description());

    let show = args.print || n < 100;
    if show {
        println!("{}", render::distances(&distances));
        println!("{}", render::predecessors(&predecessors));
    }

    let baseline = args.verify.then(|| distances.clone());

    let engine = ClosureEngine::new(session);
    let paths = engine.compute_closure(distances, predecessors)?;

    let total = timing::total_elapsed(&paths.rounds);
    println!(
        "Closure time: {}.{:06}s over {} rounds",
        total.as_secs(),
        total.subsec_micros(),
        paths.rounds.len()
    );

    if show {
        println!("{}", render::distances(&paths.distances));
        println!("{}", render::predecessors(&paths.predecessors));
    }

    if let Some(input) = baseline {
        if floyd_warshall(&input) == paths.distances {
            println!("Verification passed.");
        } else {
            bail!("engine distances disagree with the CPU reference");
        }
    }
    Ok(())
}
