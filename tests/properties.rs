//! End-to-end properties of the decomposition on fixed and random inputs.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use test_log::test;

use cmsd::decomposition::{decompose, decompose_with, find_minimal_clique_separators};
use cmsd::error::{Error, InvalidInput};
use cmsd::generate::random_hypergraph;
use cmsd::graph::Graph;
use cmsd::hypergraph::Hypergraph;
use cmsd::node_set::NodeSet;
use cmsd::triangulation::{is_chordal, is_perfect_elimination_ordering, TieBreak};
use cmsd::types::NodeId;

fn family(sets: &[&[&str]]) -> BTreeSet<BTreeSet<String>> {
    sets.iter()
        .map(|s| s.iter().map(|n| n.to_string()).collect())
        .collect()
}

fn hypergraph(nodes: &[&str], edges: &[(&str, &[&str])]) -> Hypergraph {
    let mut hg = Hypergraph::new();
    hg.add_nodes(nodes.iter().copied());
    for &(id, members) in edges {
        hg.add_edge(id, members.iter().copied());
    }
    hg
}

/// Checks every structural property of a successful decomposition.
fn check_decomposition(g: &Graph, tie_break: TieBreak) {
    let result = decompose_with(g, tie_break).unwrap();
    let t = result.triangulation();

    // Triangulation: permutation, supergraph, chordal, minimal.
    let mut seen = NodeSet::new(g.capacity());
    for &x in t.ordering() {
        assert!(seen.insert(x));
    }
    assert_eq!(&seen, g.node_set());
    for (u, v) in g.edges() {
        assert!(t.graph().has_edge(u, v));
    }
    let peo: Vec<NodeId> = t.ordering().iter().rev().copied().collect();
    assert!(is_perfect_elimination_ordering(t.graph(), &peo));
    for (u, v) in t.fill_edges(g).collect::<Vec<_>>() {
        let mut h = t.graph().clone();
        h.remove_edge(u, v);
        assert!(!is_chordal(&h), "fill edge {}-{} is redundant", g.name(u), g.name(v));
    }

    // Separators: non-empty cliques that split the graph.
    for separator in result.separators() {
        assert!(!separator.is_empty());
        assert!(g.is_clique(separator));
        let mut rest = g.clone();
        rest.remove_nodes(separator.iter());
        assert!(rest.connected_components().len() >= 2);
    }

    // Atoms: connected, covering every node.
    let mut covered = NodeSet::new(g.capacity());
    for atom in result.atoms() {
        assert!(!atom.is_empty());
        assert!(g.induced(atom).is_connected());
        covered.union_with(atom);
    }
    assert_eq!(&covered, g.node_set());
}

#[test]
fn test_path_hypergraph() {
    let hg = hypergraph(&["v1", "v2", "v3"], &[("e1", &["v1", "v2"]), ("e2", &["v2", "v3"])]);
    assert_eq!(find_minimal_clique_separators(&hg).unwrap(), family(&[&["v2"]]));
}

#[test]
fn test_four_cycle_hypergraph() {
    let hg = hypergraph(
        &["v1", "v2", "v3", "v4"],
        &[
            ("e1", &["v1", "v2"]),
            ("e2", &["v2", "v3"]),
            ("e3", &["v3", "v4"]),
            ("e4", &["v4", "v1"]),
        ],
    );
    assert!(find_minimal_clique_separators(&hg).unwrap().is_empty());
}

#[test]
fn test_triangles_sharing_a_node() {
    let hg = hypergraph(
        &["a", "b", "c", "d", "e"],
        &[("t1", &["a", "b", "c"]), ("t2", &["c", "d", "e"])],
    );
    assert_eq!(find_minimal_clique_separators(&hg).unwrap(), family(&[&["c"]]));
}

#[test]
fn test_chain_of_hyperedges() {
    let hg = hypergraph(
        &["a", "b", "c", "d", "e", "f"],
        &[
            ("e1", &["a", "b", "c"]),
            ("e2", &["b", "c", "d"]),
            ("e3", &["d", "e", "f"]),
        ],
    );
    assert_eq!(
        find_minimal_clique_separators(&hg).unwrap(),
        family(&[&["b", "c"], &["d"]])
    );
}

#[test]
fn test_disconnected_hypergraph() {
    let hg = hypergraph(&["a", "b", "c", "d"], &[("e1", &["a", "b"]), ("e2", &["c", "d"])]);
    assert_eq!(
        find_minimal_clique_separators(&hg).unwrap_err(),
        Error::DecompositionFailed(InvalidInput::Disconnected { components: 2 })
    );
}

#[test]
fn test_isolated_declared_node() {
    let hg = hypergraph(&["a", "b", "c"], &[("e1", &["a", "b"])]);
    assert!(matches!(
        find_minimal_clique_separators(&hg),
        Err(Error::DecompositionFailed(InvalidInput::Disconnected { .. }))
    ));
}

#[test]
fn test_empty_hypergraph() {
    assert!(find_minimal_clique_separators(&Hypergraph::new()).unwrap().is_empty());
}

#[test]
fn test_wheel_has_no_clique_separator() {
    let mut edges = vec![("v1", "v2"), ("v2", "v3"), ("v3", "v4"), ("v4", "v5"), ("v5", "v1")];
    for v in ["v1", "v2", "v3", "v4", "v5"] {
        edges.push(("hub", v));
    }
    let g = Graph::from_edges(edges).unwrap();
    assert!(decompose(&g).unwrap().separators().is_empty());
    check_decomposition(&g, TieBreak::First);
    check_decomposition(&g, TieBreak::Last);
}

#[test]
fn test_random_hypergraphs_with_fixed_seeds() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for n in 2..=25 {
        for k in 1..=6 {
            let g = random_hypergraph(n, k, &mut rng).unwrap().to_graph().unwrap();
            if g.is_connected() {
                check_decomposition(&g, TieBreak::First);
            } else {
                assert!(matches!(
                    decompose(&g),
                    Err(Error::DecompositionFailed(InvalidInput::Disconnected { .. }))
                ));
            }
        }
    }
}

/// Random connected graph on `n` nodes: a random spanning tree plus extra edges.
fn connected_graph() -> impl Strategy<Value = Graph> {
    (1usize..=12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(any::<prop::sample::Index>(), n),
            prop::collection::vec((0..n, 0..n), 0..=2 * n),
        )
            .prop_map(|(n, parents, extra)| {
                let mut g = Graph::new();
                let ids: Vec<NodeId> = (0..n).map(|i| g.add_node(format!("v{}", i + 1))).collect();
                for i in 1..n {
                    g.add_edge(ids[i], ids[parents[i].index(i)]);
                }
                for (a, b) in extra {
                    if a != b {
                        g.add_edge(ids[a], ids[b]);
                    }
                }
                g
            })
    })
}

proptest! {
    #[test]
    fn prop_decomposition_is_sound(g in connected_graph()) {
        check_decomposition(&g, TieBreak::First);
        check_decomposition(&g, TieBreak::Last);
    }

    #[test]
    fn prop_separators_do_not_depend_on_tie_break(g in connected_graph()) {
        let first = decompose_with(&g, TieBreak::First).unwrap().separator_names();
        let last = decompose_with(&g, TieBreak::Last).unwrap().separator_names();
        prop_assert_eq!(first, last);
    }

    #[test]
    fn prop_random_hypergraph(n in 1usize..30, k in 1usize..8, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let hg = random_hypergraph(n, k, &mut rng).unwrap();
        let g = hg.to_graph().unwrap();
        match find_minimal_clique_separators(&hg) {
            Ok(separators) => {
                prop_assert!(g.is_connected());
                for separator in &separators {
                    let ids: NodeSet = separator.iter().filter_map(|name| g.node_id(name)).collect();
                    prop_assert_eq!(ids.len(), separator.len());
                    prop_assert!(g.is_clique(&ids));
                }
            }
            Err(err) => {
                prop_assert!(!g.is_connected());
                prop_assert!(
                    matches!(err, Error::DecompositionFailed(InvalidInput::Disconnected { .. })),
                    "unexpected error: {}",
                    err
                );
            }
        }
    }
}
