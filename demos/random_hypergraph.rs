//! Generates a random hypergraph and prints it in the text format read by
//! `cmsd::io::parse_hypergraph`, together with its clique minimal separators.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cmsd::decomposition::find_minimal_clique_separators;
use cmsd::generate::random_hypergraph;
use cmsd::io::to_hypergraph_string;
use cmsd::Error;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of nodes.
    #[arg(value_name = "INT", default_value = "10")]
    n: usize,

    /// Number of hyperedges.
    #[arg(value_name = "INT", default_value = "4")]
    k: usize,

    /// Random seed.
    #[clap(long, value_name = "INT", default_value = "42")]
    seed: u64,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let hg = random_hypergraph(args.n, args.k, &mut rng)?;
    print!("{}", to_hypergraph_string(&hg));

    match find_minimal_clique_separators(&hg) {
        Ok(separators) => {
            println!("# {} clique minimal separators", separators.len());
            for separator in &separators {
                println!("# {:?}", separator);
            }
        }
        Err(e @ Error::DecompositionFailed(_)) => println!("# {}", e),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
