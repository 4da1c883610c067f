//! Decomposition benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench decompose
//! ```

use std::hint::black_box;

use cmsd::decomposition::decompose;
use cmsd::generate::random_hypergraph;
use cmsd::graph::Graph;
use cmsd::triangulation::triangulate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// Inputs
// ============================================================================

/// Cycle on `n` nodes: no clique separator, `n - 3` fill edges.
fn cycle(n: usize) -> Graph {
    let names: Vec<String> = (1..=n).map(|i| format!("v{}", i)).collect();
    Graph::from_edges((0..n).map(|i| (names[i].as_str(), names[(i + 1) % n].as_str()))).unwrap()
}

/// Grid of `side x side` nodes.
fn grid(side: usize) -> Graph {
    let name = |r: usize, c: usize| format!("r{}c{}", r, c);
    let mut edges = Vec::new();
    for r in 0..side {
        for c in 0..side {
            if r + 1 < side {
                edges.push((name(r, c), name(r + 1, c)));
            }
            if c + 1 < side {
                edges.push((name(r, c), name(r, c + 1)));
            }
        }
    }
    Graph::from_edges(edges).unwrap()
}

/// Chain of `count` cliques of size `size`, consecutive ones sharing a node.
fn clique_chain(count: usize, size: usize) -> Graph {
    let mut g = Graph::new();
    let mut prev = g.add_node("c0_0");
    for i in 0..count {
        let mut members = vec![prev];
        for j in 1..size {
            members.push(g.add_node(format!("c{}_{}", i, j)));
        }
        for a in 0..members.len() {
            for b in (a + 1)..members.len() {
                g.add_edge(members[a], members[b]);
            }
        }
        prev = members[size - 1];
    }
    g
}

/// Connected random hypergraph projection, retrying seeds until connected.
fn random_connected(n: usize, k: usize, seed: u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    loop {
        let g = random_hypergraph(n, k, &mut rng).unwrap().to_graph().unwrap();
        if g.is_connected() {
            return g;
        }
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_triangulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulate");
    for n in [16, 64, 256] {
        let g = cycle(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("cycle", n), &g, |b, g| {
            b.iter(|| triangulate(black_box(g)).unwrap());
        });
    }
    for side in [4, 8, 12] {
        let g = grid(side);
        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::new("grid", side), &g, |b, g| {
            b.iter(|| triangulate(black_box(g)).unwrap());
        });
    }
    group.finish();
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    for count in [8, 32, 128] {
        let g = clique_chain(count, 4);
        group.throughput(Throughput::Elements(g.node_count() as u64));
        group.bench_with_input(BenchmarkId::new("clique_chain", count), &g, |b, g| {
            b.iter(|| decompose(black_box(g)).unwrap());
        });
    }
    for n in [20, 50, 100] {
        let g = random_connected(n, n / 4, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("random_hypergraph", n), &g, |b, g| {
            b.iter(|| decompose(black_box(g)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_triangulate, bench_decompose);
criterion_main!(benches);
