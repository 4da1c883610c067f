use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::bail;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cmsd::decomposition::decompose_with;
use cmsd::generate::random_hypergraph;
use cmsd::graph::Graph;
use cmsd::io::{read_dimacs, read_hypergraph};
use cmsd::triangulation::TieBreak;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rule {
    First,
    Last,
}

impl From<Rule> for TieBreak {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::First => TieBreak::First,
            Rule::Last => TieBreak::Last,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Input file: DIMACS (`.col`, `.dimacs`, `.gr`) or hypergraph text (anything else).
    #[arg(value_name = "FILE", required_unless_present = "random")]
    input: Option<PathBuf>,

    /// Generate a random hypergraph with N nodes and K hyperedges instead of reading a file.
    #[clap(long, num_args = 2, value_names = ["N", "K"], conflicts_with = "input")]
    random: Option<Vec<usize>>,

    /// Seed for --random.
    #[clap(long, value_name = "INT", default_value = "42")]
    seed: u64,

    /// Tie-break rule for the triangulation.
    #[clap(long, value_enum, default_value = "first")]
    tie_break: Rule,

    /// Write the graph with separators highlighted to this DOT file.
    #[clap(long, value_name = "PATH")]
    dot: Option<PathBuf>,

    /// Log level.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn load(args: &Cli) -> color_eyre::Result<Graph> {
    if let Some(nk) = &args.random {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        let hg = random_hypergraph(nk[0], nk[1], &mut rng)?;
        info!("Generated hypergraph with {} nodes and {} hyperedges", hg.node_count(), hg.edge_count());
        return Ok(hg.to_graph()?);
    }

    let Some(path) = &args.input else {
        bail!("either FILE or --random is required");
    };
    let is_dimacs = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("col" | "dimacs" | "gr")
    );
    let graph = if is_dimacs {
        read_dimacs(path)?
    } else {
        read_hypergraph(path)?.to_graph()?
    };
    info!("Loaded {:?}", path);
    Ok(graph)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let graph = load(&args)?;
    println!("graph: {} nodes, {} edges", graph.node_count(), graph.edge_count());

    let result = decompose_with(&graph, args.tie_break.into())?;
    let fill = result.triangulation().fill_edges(&graph).count();
    println!("fill edges: {}", fill);

    println!("clique minimal separators: {}", result.separators().len());
    for (i, separator) in result.separator_names().iter().enumerate() {
        println!("  S{} = {:?}", i + 1, separator);
    }

    println!("atoms: {}", result.atoms().len());
    for (i, atom) in result.atom_names().iter().enumerate() {
        println!("  A{} = {:?}", i + 1, atom);
    }

    if let Some(path) = &args.dot {
        std::fs::write(path, result.to_dot()?)?;
        println!("DOT written to {:?}", path);
    }

    println!("Total time: {:.3}s", time_total.elapsed().as_secs_f64());

    Ok(())
}
