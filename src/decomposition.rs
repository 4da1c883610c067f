//! Top-level entry points.
//!
//! [`decompose`] runs the whole pipeline on a graph: minimal triangulation, then
//! separator extraction. [`find_minimal_clique_separators`] does the same for a
//! hypergraph, going through its clique closure first and answering with node
//! names.
//!
//! Invalid input from any stage surfaces as [`Error::DecompositionFailed`];
//! internal invariant violations surface unchanged as [`Error::Internal`].

use std::collections::BTreeSet;

use log::{debug, error};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::hypergraph::Hypergraph;
use crate::node_set::NodeSet;
use crate::separators::{extract, Decomposition};
use crate::triangulation::{triangulate_with, TieBreak, Triangulation};

/// Everything computed by [`decompose`] for one graph.
#[derive(Debug, Clone)]
pub struct CliqueDecomposition {
    graph: Graph,
    triangulation: Triangulation,
    decomposition: Decomposition,
}

impl CliqueDecomposition {
    /// The decomposed graph (a copy of the input).
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn triangulation(&self) -> &Triangulation {
        &self.triangulation
    }

    /// Distinct clique minimal separators, in discovery order.
    pub fn separators(&self) -> &[NodeSet] {
        self.decomposition.separators()
    }

    pub fn atoms(&self) -> &[NodeSet] {
        self.decomposition.atoms()
    }

    /// Separators as sets of node names.
    pub fn separator_names(&self) -> BTreeSet<BTreeSet<String>> {
        self.separators().iter().map(|s| self.graph.names_of(s)).collect()
    }

    /// Atoms as sets of node names.
    pub fn atom_names(&self) -> Vec<BTreeSet<String>> {
        self.atoms().iter().map(|a| self.graph.names_of(a)).collect()
    }

    /// Nodes that belong to at least one separator.
    pub fn separator_members(&self) -> NodeSet {
        let mut members = NodeSet::new(self.graph.capacity());
        for separator in self.separators() {
            members.union_with(separator);
        }
        members
    }

    /// Membership of every graph node (in insertion order) in `nodes`.
    ///
    /// This is the highlight vector a presentation layer needs to color one separator.
    pub fn coloring(&self, nodes: &NodeSet) -> Vec<bool> {
        self.graph.nodes().map(|n| nodes.contains(n)).collect()
    }
}

/// Computes the clique minimal separators of a connected undirected graph.
///
/// # Examples
///
/// ```
/// use cmsd::decomposition::decompose;
/// use cmsd::graph::Graph;
///
/// // Two triangles sharing the node c.
/// let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("d", "e"), ("e", "c")]).unwrap();
/// let result = decompose(&g).unwrap();
/// assert_eq!(result.separators().len(), 1);
/// assert_eq!(result.atoms().len(), 2);
/// ```
pub fn decompose(graph: &Graph) -> Result<CliqueDecomposition> {
    decompose_with(graph, TieBreak::default())
}

/// Same as [`decompose`], with an explicit tie-break rule for the triangulation.
pub fn decompose_with(graph: &Graph, tie_break: TieBreak) -> Result<CliqueDecomposition> {
    let triangulation = triangulate_with(graph, tie_break)?;
    let decomposition = extract(graph, &triangulation).map_err(|violation| {
        error!("clique separator extraction is broken: {}", violation);
        Error::Internal(violation)
    })?;

    debug!(
        "decompose: {} nodes, {} separators, {} atoms",
        graph.node_count(),
        decomposition.separators().len(),
        decomposition.atoms().len()
    );

    Ok(CliqueDecomposition {
        graph: graph.clone(),
        triangulation,
        decomposition,
    })
}

/// Computes the clique minimal separators of a hypergraph's clique closure, by node name.
///
/// # Examples
///
/// ```
/// use cmsd::decomposition::find_minimal_clique_separators;
/// use cmsd::hypergraph::Hypergraph;
///
/// let mut hg = Hypergraph::new();
/// hg.add_nodes(["v1", "v2", "v3"]);
/// hg.add_edge("e1", ["v1", "v2"]);
/// hg.add_edge("e2", ["v2", "v3"]);
///
/// let separators = find_minimal_clique_separators(&hg).unwrap();
/// assert_eq!(separators.len(), 1);
/// assert!(separators.iter().next().unwrap().contains("v2"));
/// ```
pub fn find_minimal_clique_separators(hypergraph: &Hypergraph) -> Result<BTreeSet<BTreeSet<String>>> {
    let graph = hypergraph.to_graph()?;
    let result = decompose(&graph)?;
    Ok(result.separator_names())
}
