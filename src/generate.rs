//! Random hypergraphs for tests, benchmarks and demos.
//!
//! [`random_hypergraph`] draws `k` hyperedges over nodes `v1..vn`. Each hyperedge
//! samples distinct nodes; its size is uniform in `1..=max` where `max` is `n`
//! with probability 0.2, `0.6 n` with probability 0.4 and `0.3 n` otherwise.
//! Nodes left uncovered are then appended to a uniformly chosen hyperedge, so the
//! result never has isolated nodes (it may still be disconnected).
//!
//! ```
//! use cmsd::generate::random_hypergraph;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let hg = random_hypergraph(10, 4, &mut rng).unwrap();
//! assert_eq!(hg.node_count(), 10);
//! assert_eq!(hg.edge_count(), 4);
//! ```

use rand::Rng;

use crate::error::InvalidInput;
use crate::hypergraph::Hypergraph;

/// Generates a random hypergraph with `n` nodes and `k` hyperedges.
///
/// Fails with [`InvalidInput::NoHyperedges`] if `n > 0` and `k == 0`.
pub fn random_hypergraph<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Hypergraph, InvalidInput> {
    let mut hg = Hypergraph::new();
    let nodes: Vec<String> = (1..=n).map(|i| format!("v{}", i)).collect();
    hg.add_nodes(nodes.iter().cloned());
    if n == 0 {
        return Ok(hg);
    }
    if k == 0 {
        return Err(InvalidInput::NoHyperedges);
    }

    let labels: Vec<String> = (1..=k).map(|i| format!("e{}", i)).collect();
    let mut covered = vec![false; n];
    for label in &labels {
        let max = max_edge_size(n, rng);
        let size = rng.random_range(1..=max);
        let members = rand::seq::index::sample(rng, n, size);
        for i in members.iter() {
            covered[i] = true;
        }
        hg.add_edge(label.as_str(), members.iter().map(|i| nodes[i].clone()));
    }

    for (i, _) in covered.iter().enumerate().filter(|(_, &c)| !c) {
        let label = &labels[rng.random_range(0..k)];
        hg.add_node_to_edge(nodes[i].clone(), label);
    }

    Ok(hg)
}

fn max_edge_size<R: Rng + ?Sized>(n: usize, rng: &mut R) -> usize {
    let r: f64 = rng.random();
    let size = if r < 0.2 {
        n
    } else if r < 0.6 {
        (0.6 * n as f64) as usize
    } else {
        (0.3 * n as f64) as usize
    };
    size.max(1)
}
