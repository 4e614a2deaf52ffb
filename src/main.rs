use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use erdos::error::ErrorKind;
use erdos::exact::{ExactColorer, SearchLimits};
use erdos::graph::Graph;
use erdos::greedy::{color_count, greedy_coloring};
use erdos::kcore::KCoreAnalyzer;
use erdos::validate::validate_exact_coloring;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Analyse one Erdos-Renyi G(n, p) instance: k-core fraction, greedy and exact coloring.
#[derive(Parser, Debug)]
#[command(name = "erdos", version, about, long_about = None)]
struct Cli {
    /// Number of vertices
    #[arg(short, long, default_value_t = 100)]
    n: usize,

    /// Per-ordered-pair edge probability
    #[arg(short, long, default_value_t = 0.02)]
    p: f64,

    /// Threshold for the k-core and number of colors
    #[arg(short, long, default_value_t = 3)]
    k: usize,

    /// Deterministic seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Load an edge list instead of sampling (first line n, then `u v` per line)
    #[arg(long, value_name = "FILE")]
    graph: Option<PathBuf>,

    /// Abort the exact search after this many frame steps
    #[arg(long)]
    node_budget: Option<u64>,

    /// Skip the exact coloring search
    #[arg(long)]
    skip_exact: bool,

    /// Print the adjacency lists
    #[arg(long)]
    print_graph: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let g = match &cli.graph {
        Some(path) => Graph::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            println!("G(n={}, p={}) seed={seed}", cli.n, cli.p);
            let mut rng = SmallRng::seed_from_u64(seed);
            erdos::builder::build_graph(cli.n, cli.p, &mut rng)?
        }
    };

    println!(
        "vertices={} edge_insertions={} max_degree={}",
        g.vertex_count(),
        g.edge_count(),
        g.max_degree()
    );
    if cli.print_graph {
        print!("{g}");
    }

    let k = cli.k;
    match KCoreAnalyzer::new(&g).peel(k) {
        Ok(outcome) => println!(
            "{k}-core: {}/{} vertices (fraction {:.4})",
            outcome.survivor_count(),
            g.vertex_count(),
            outcome.fraction()
        ),
        Err(e) if e.kind() == ErrorKind::EmptyGraph => println!("{k}-core: undefined ({e})"),
        Err(e) => return Err(e.into()),
    }

    let coloring = greedy_coloring(&g);
    let used = color_count(&coloring);
    println!(
        "greedy: {used} colors, within {k}: {}",
        if used <= k { "yes" } else { "no" }
    );

    if cli.skip_exact {
        return Ok(());
    }

    let limits = SearchLimits {
        node_budget: cli.node_budget,
    };
    match ExactColorer::new(&g).with_limits(limits).search(k) {
        Ok(outcome) => match outcome.coloring {
            Some(colors) => {
                validate_exact_coloring(&g, &colors, k).map_err(anyhow::Error::msg)?;
                println!("exact: {k}-colorable ({} nodes)", outcome.nodes);
            }
            None => println!("exact: not {k}-colorable ({} nodes)", outcome.nodes),
        },
        Err(e) if e.kind() == ErrorKind::ResourceExhausted => println!("exact: gave up ({e})"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
