//! Minimal triangulation by MCS-M+.
//!
//! [`triangulate`] computes, in one pass over the nodes:
//!
//! - a **minimal triangulation** `H` of the input graph `G`, i.e. a chordal
//!   supergraph none of whose fill edges can be dropped while staying chordal,
//! - the **ordering** in which nodes were selected (its reverse is a perfect
//!   elimination ordering of `H`, i.e. a minimal elimination ordering of `G`),
//! - the **generators**: nodes whose higher-numbered neighborhood in `H` is a
//!   minimal separator of `G`, and thus a candidate clique separator.
//!
//! # Algorithm
//!
//! Every node carries a label, initially 0. At each step the unselected node `x`
//! with maximum label is selected. Its *reach* `Y` is the set of unselected nodes
//! `z` joined to `x` by a path whose inner nodes all have a label strictly lower
//! than `label(z)`. The search visits the label buckets in increasing order, so a
//! path that has only crossed nodes of label at most `j` continues from bucket `j`.
//! Every `y` in `Y` becomes adjacent to `x` in `H` and gets its label incremented.
//! If `label(x)` did not grow compared to the previously selected node, `x` is a
//! generator.
//!
//! When several nodes share the maximum label, the choice is made by the
//! [`TieBreak`] rule. Any rule yields a valid minimal triangulation; different
//! rules may yield different ones.
//!
//! Reference: A. Berry, R. Pogorelcnik, G. Simonet,
//! *An introduction to clique minimal separator decomposition*, Algorithms 3(2), 2010.

use log::{debug, trace};

use crate::error::InvalidInput;
use crate::graph::Graph;
use crate::node_set::NodeSet;
use crate::types::NodeId;

/// Rule for choosing among nodes that share the maximum label.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum TieBreak {
    /// Pick the node inserted first (smallest [`NodeId`]).
    #[default]
    First,
    /// Pick the node inserted last (largest [`NodeId`]).
    Last,
}

/// Output of [`triangulate`].
#[derive(Debug, Clone)]
pub struct Triangulation {
    graph: Graph,
    ordering: Vec<NodeId>,
    generators: NodeSet,
}

impl Triangulation {
    /// The triangulated (chordal) graph: the input plus fill edges.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Nodes in selection order. The reverse is a perfect elimination ordering of [`graph`](Self::graph).
    pub fn ordering(&self) -> &[NodeId] {
        &self.ordering
    }

    pub fn generators(&self) -> &NodeSet {
        &self.generators
    }

    pub fn is_generator(&self, node: NodeId) -> bool {
        self.generators.contains(node)
    }

    /// Edges of the triangulation that are missing from `original`.
    pub fn fill_edges<'a>(&'a self, original: &'a Graph) -> impl Iterator<Item = (NodeId, NodeId)> + 'a {
        self.graph.edges().filter(move |&(u, v)| !original.has_edge(u, v))
    }
}

/// Computes a minimal triangulation with the default tie-break rule.
///
/// Fails if the graph is disconnected or directed.
///
/// # Examples
///
/// ```
/// use cmsd::graph::Graph;
/// use cmsd::triangulation::triangulate;
///
/// // A 4-cycle needs exactly one chord.
/// let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]).unwrap();
/// let t = triangulate(&g).unwrap();
/// assert_eq!(t.graph().edge_count(), 5);
/// assert_eq!(t.ordering().len(), 4);
/// ```
pub fn triangulate(graph: &Graph) -> Result<Triangulation, InvalidInput> {
    triangulate_with(graph, TieBreak::default())
}

/// Computes a minimal triangulation, choosing among maximum-label nodes by `tie_break`.
pub fn triangulate_with(graph: &Graph, tie_break: TieBreak) -> Result<Triangulation, InvalidInput> {
    if !graph.is_connected() {
        return Err(InvalidInput::Disconnected {
            components: graph.connected_components().len(),
        });
    }
    if graph.is_directed() {
        return Err(InvalidInput::Directed);
    }

    let n = graph.node_count();
    let mut work = graph.clone();
    let mut chordal = graph.clone();

    let mut ordering = Vec::with_capacity(n);
    let mut generators = NodeSet::new(graph.capacity());

    let mut label = vec![0usize; graph.capacity()];
    let mut previous: Option<usize> = None;

    // Labels never exceed n-1, so n buckets suffice.
    let mut reach: Vec<Vec<NodeId>> = vec![Vec::new(); n];

    for step in 0..n {
        let Some(x) = select(work.node_set(), &label, tie_break) else {
            break;
        };
        let lx = label[x.index()];

        if previous.is_some_and(|s| lx <= s) {
            generators.insert(x);
        }
        previous = Some(lx);

        let mut madj = work.neighbors(x).clone();
        let mut reached = madj.clone();
        reached.insert(x);
        for y in madj.iter() {
            reach[label[y.index()]].push(y);
        }

        for j in 0..n {
            while let Some(y) = reach[j].pop() {
                for z in work.neighbors(y).iter() {
                    if reached.insert(z) {
                        let lz = label[z.index()];
                        if lz > j {
                            madj.insert(z);
                            reach[lz].push(z);
                        } else {
                            reach[j].push(z);
                        }
                    }
                }
            }
        }

        trace!(
            "step {}: x={} label={} generator={} madj={:?}",
            step,
            graph.name(x),
            lx,
            generators.contains(x),
            graph.name_list(&madj)
        );

        for y in madj.iter() {
            chordal.add_edge(x, y);
            label[y.index()] += 1;
        }

        ordering.push(x);
        work.remove_node(x);
    }

    debug!(
        "triangulate: {} nodes, {} edges, {} fill edges, {} generators",
        n,
        graph.edge_count(),
        chordal.edge_count() - graph.edge_count(),
        generators.len()
    );

    Ok(Triangulation {
        graph: chordal,
        ordering,
        generators,
    })
}

/// Picks the remaining node of maximum label.
fn select(remaining: &NodeSet, label: &[usize], tie_break: TieBreak) -> Option<NodeId> {
    let mut best: Option<NodeId> = None;
    for node in remaining.iter() {
        let better = match best {
            None => true,
            Some(b) => match tie_break {
                TieBreak::First => label[node.index()] > label[b.index()],
                TieBreak::Last => label[node.index()] >= label[b.index()],
            },
        };
        if better {
            best = Some(node);
        }
    }
    best
}

/// Checks that eliminating nodes in the given order never requires a fill edge,
/// i.e. that the later neighbors of every node form a clique.
///
/// A graph is chordal iff it has a perfect elimination ordering; for a
/// [`Triangulation`], pass the reverse of [`Triangulation::ordering`].
pub fn is_perfect_elimination_ordering(graph: &Graph, elimination: &[NodeId]) -> bool {
    if elimination.len() != graph.node_count() {
        return false;
    }

    let mut later = graph.node_set().clone();
    for &x in elimination {
        if !later.remove(x) {
            return false;
        }
        let mut nbrs = graph.neighbors(x).clone();
        nbrs.intersect_with(&later);
        if !graph.is_clique(&nbrs) {
            return false;
        }
    }
    true
}

/// Tests whether an undirected graph is chordal, using maximum cardinality search.
pub fn is_chordal(graph: &Graph) -> bool {
    let mut weight = vec![0usize; graph.capacity()];
    let mut remaining = graph.node_set().clone();
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(x) = select(&remaining, &weight, TieBreak::First) {
        remaining.remove(x);
        for y in graph.neighbors(x).iter() {
            if remaining.contains(y) {
                weight[y.index()] += 1;
            }
        }
        order.push(x);
    }

    order.reverse();
    is_perfect_elimination_ordering(graph, &order)
}
