//! Hypergraphs and their 2-section.
//!
//! A [`Hypergraph`] is a declared node set plus named hyperedges, each a subset of
//! the nodes. The only thing the decomposition needs from it is its *clique
//! closure* (2-section): the graph connecting every two nodes that share a
//! hyperedge. Any clique of that graph is a clique of the hypergraph, which is
//! what allows the ordinary-graph clique test to stand in for the hypergraph one.
//!
//! # Examples
//!
//! ```
//! use cmsd::hypergraph::Hypergraph;
//!
//! let mut hg = Hypergraph::new();
//! hg.add_nodes(["a", "b", "c", "d"]);
//! hg.add_edge("e1", ["a", "b", "c"]);
//! hg.add_edge("e2", ["c", "d"]);
//!
//! let g = hg.to_graph().unwrap();
//! assert_eq!(g.node_count(), 4);
//! assert_eq!(g.edge_count(), 4); // ab, ac, bc, cd
//! ```

use std::collections::HashSet;

use crate::error::InvalidInput;
use crate::graph::Graph;

/// A hypergraph: ordered node set and ordered hyperedges.
///
/// Hyperedge membership is not validated on insertion; [`Hypergraph::to_graph`]
/// rejects hyperedges that are empty or that reference undeclared nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hypergraph {
    nodes: Vec<String>,
    declared: HashSet<String>,
    edges: Vec<(String, Vec<String>)>,
}

impl Hypergraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node. Returns false if it was already declared.
    pub fn add_node(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.declared.contains(&name) {
            return false;
        }
        self.declared.insert(name.clone());
        self.nodes.push(name);
        true
    }

    pub fn add_nodes<S: Into<String>>(&mut self, names: impl IntoIterator<Item = S>) {
        for name in names {
            self.add_node(name);
        }
    }

    /// Sets the members of hyperedge `id`, replacing any previous members.
    pub fn add_edge<S: Into<String>>(&mut self, id: impl Into<String>, members: impl IntoIterator<Item = S>) {
        let id = id.into();
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        match self.edges.iter_mut().find(|(edge, _)| *edge == id) {
            Some((_, existing)) => *existing = members,
            None => self.edges.push((id, members)),
        }
    }

    /// Appends `node` to hyperedge `edge`, creating the hyperedge if needed.
    pub fn add_node_to_edge(&mut self, node: impl Into<String>, edge: &str) {
        let node = node.into();
        match self.edges.iter_mut().find(|(id, _)| id == edge) {
            Some((_, members)) => {
                if !members.contains(&node) {
                    members.push(node);
                }
            }
            None => self.edges.push((edge.to_owned(), vec![node])),
        }
    }

    /// Removes a hyperedge. Returns its members if it existed.
    pub fn remove_edge(&mut self, id: &str) -> Option<Vec<String>> {
        let position = self.edges.iter().position(|(edge, _)| edge == id)?;
        Some(self.edges.remove(position).1)
    }

    /// Declared nodes, in declaration order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Hyperedges as `(id, members)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges.iter().map(|(id, members)| (id.as_str(), members.as_slice()))
    }

    /// Members of hyperedge `id`.
    pub fn edge(&self, id: &str) -> Option<&[String]> {
        self.edges
            .iter()
            .find(|(edge, _)| edge == id)
            .map(|(_, members)| members.as_slice())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds the clique closure (2-section) of the hypergraph.
    ///
    /// The resulting graph has exactly the declared nodes, in declaration order,
    /// and an edge between every two distinct nodes that share a hyperedge.
    /// Repeated members of one hyperedge are ignored.
    pub fn to_graph(&self) -> Result<Graph, InvalidInput> {
        let mut graph = Graph::new();
        for name in &self.nodes {
            graph.add_node(name);
        }

        for (edge, members) in &self.edges {
            if members.is_empty() {
                return Err(InvalidInput::EmptyHyperedge { edge: edge.clone() });
            }

            let mut ids = Vec::with_capacity(members.len());
            for member in members {
                let id = graph.node_id(member).ok_or_else(|| InvalidInput::UnknownNode {
                    edge: edge.clone(),
                    node: member.clone(),
                })?;
                ids.push(id);
            }

            for (i, &u) in ids.iter().enumerate() {
                for &v in &ids[i + 1..] {
                    if u != v {
                        graph.add_edge(u, v);
                    }
                }
            }
        }

        Ok(graph)
    }
}
