//! Simple graphs over named nodes.
//!
//! A [`Graph`] is an arena of named nodes with one [`NodeSet`] adjacency row per
//! node. Node names are interned in insertion order and the arena is shared
//! (copy-on-write) between clones, so several working copies of the same graph
//! agree on every [`NodeId`]. Removing a node deactivates its slot and clears its
//! row; the id is never reused.
//!
//! # Examples
//!
//! ```
//! use cmsd::graph::Graph;
//!
//! let g = Graph::from_edges([("a", "b"), ("b", "c")]).unwrap();
//! let b = g.node_id("b").unwrap();
//!
//! let mut h = g.clone();
//! h.remove_node(b);
//! assert_eq!(h.connected_components().len(), 2);
//! assert!(g.is_connected()); // the original is untouched
//! ```

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::fmt;
use std::sync::Arc;

use crate::error::InvalidInput;
use crate::node_set::{NodeSet, NodeSetIter};
use crate::types::NodeId;

#[derive(Clone, Default)]
pub struct Graph {
    names: Arc<Vec<String>>,
    index: Arc<HashMap<String, NodeId>>,
    adjacency: Vec<NodeSet>,
    active: NodeSet,
    edge_count: usize,
    directed: bool,
}

impl Graph {
    /// Creates an empty undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty directed graph.
    ///
    /// Directed graphs can be built and inspected, but the decomposition rejects
    /// them with [`InvalidInput::Directed`].
    pub fn new_directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    /// Builds an undirected graph from an edge list, adding nodes as they appear.
    ///
    /// Repeated edges are collapsed. Fails on self-loops.
    pub fn from_edges<I, A, B>(edges: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Graph::new();
        for (a, b) in edges {
            graph.add_edge_named(a.as_ref(), b.as_ref())?;
        }
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of arena slots, including removed nodes.
    pub fn capacity(&self) -> usize {
        self.names.len()
    }

    pub fn node_count(&self) -> usize {
        self.active.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns true if `node` is present (allocated and not removed).
    pub fn contains(&self, node: NodeId) -> bool {
        self.active.contains(node)
    }

    /// Adds a node by name, or returns the id it already has.
    ///
    /// A node that was removed from this graph is re-activated without edges.
    pub fn add_node(&mut self, name: impl AsRef<str>) -> NodeId {
        let name = name.as_ref();
        if let Some(&id) = self.index.get(name) {
            self.active.insert(id);
            return id;
        }

        let id = NodeId::new(self.names.len());
        Arc::make_mut(&mut self.names).push(name.to_owned());
        Arc::make_mut(&mut self.index).insert(name.to_owned(), id);
        self.adjacency.push(NodeSet::empty());
        self.active.insert(id);
        id
    }

    /// Adds the edge `u -- v` (or the arc `u -> v` in a directed graph).
    /// Returns true if the edge was not present before.
    ///
    /// # Panics
    ///
    /// Panics if `u == v` or if either node is not present.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        assert_ne!(u, v, "Self-loops are not allowed");
        assert!(self.contains(u) && self.contains(v), "Both endpoints must be present");

        let added = self.adjacency[u.index()].insert(v);
        if added {
            if !self.directed {
                self.adjacency[v.index()].insert(u);
            }
            self.edge_count += 1;
        }
        added
    }

    /// Adds an edge between two named nodes, creating the nodes if needed.
    pub fn add_edge_named(&mut self, a: &str, b: &str) -> Result<bool, InvalidInput> {
        if a == b {
            return Err(InvalidInput::SelfLoop { node: a.to_owned() });
        }
        let u = self.add_node(a);
        let v = self.add_node(b);
        Ok(self.add_edge(u, v))
    }

    /// Removes the edge `u -- v`. Returns true if it was present.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        if !self.contains(u) || !self.contains(v) {
            return false;
        }
        let removed = self.adjacency[u.index()].remove(v);
        if removed {
            if !self.directed {
                self.adjacency[v.index()].remove(u);
            }
            self.edge_count -= 1;
        }
        removed
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.contains(u) && self.adjacency[u.index()].contains(v)
    }

    /// Returns the (out-)neighbors of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not present.
    pub fn neighbors(&self, node: NodeId) -> &NodeSet {
        assert!(self.contains(node), "Node {} is not present", node);
        &self.adjacency[node.index()]
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// Looks up a present node by name.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied().filter(|&id| self.contains(id))
    }

    /// Returns the name of a node. Removed nodes keep their names.
    pub fn name(&self, node: NodeId) -> &str {
        &self.names[node.index()]
    }

    /// Iterates over present nodes in insertion order.
    pub fn nodes(&self) -> NodeSetIter<'_> {
        self.active.iter()
    }

    /// Returns the set of present nodes.
    pub fn node_set(&self) -> &NodeSet {
        &self.active
    }

    /// Iterates over the edges. Undirected edges are reported once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.active.iter().flat_map(move |u| {
            self.adjacency[u.index()]
                .iter()
                .filter(move |&v| self.directed || u < v)
                .map(move |v| (u, v))
        })
    }

    /// Removes a node and its incident edges. Returns true if it was present.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        if !self.active.remove(node) {
            return false;
        }

        let row = std::mem::take(&mut self.adjacency[node.index()]);
        for v in row.iter() {
            if !self.directed {
                self.adjacency[v.index()].remove(node);
            }
            self.edge_count -= 1;
        }

        if self.directed {
            for u in self.active.iter() {
                if self.adjacency[u.index()].remove(node) {
                    self.edge_count -= 1;
                }
            }
        }
        true
    }

    pub fn remove_nodes(&mut self, nodes: impl IntoIterator<Item = NodeId>) {
        for node in nodes {
            self.remove_node(node);
        }
    }

    /// Returns the subgraph induced by `nodes` (intersected with the present nodes).
    pub fn induced(&self, nodes: &NodeSet) -> Graph {
        let mut sub = self.clone();
        let mut dropped = self.active.clone();
        dropped.difference_with(nodes);
        sub.remove_nodes(dropped.iter());
        sub
    }

    /// Neighbors of `node` ignoring edge direction.
    fn links(&self, node: NodeId) -> Cow<'_, NodeSet> {
        let row = &self.adjacency[node.index()];
        if !self.directed {
            return Cow::Borrowed(row);
        }
        let mut links = row.clone();
        links.extend(self.active.iter().filter(|u| self.adjacency[u.index()].contains(node)));
        Cow::Owned(links)
    }

    /// Returns the nodes outside `nodes` adjacent to at least one of them.
    pub fn neighborhood(&self, nodes: &NodeSet) -> NodeSet {
        let mut result = NodeSet::new(self.capacity());
        for node in nodes.iter().filter(|&n| self.contains(n)) {
            result.union_with(&self.links(node));
        }
        result.difference_with(nodes);
        result
    }

    /// Returns the connected component containing `start` (weak connectivity for directed graphs).
    pub fn component_of(&self, start: NodeId) -> NodeSet {
        let mut component = NodeSet::new(self.capacity());
        if !self.contains(start) {
            return component;
        }

        let mut queue = VecDeque::new();
        component.insert(start);
        queue.push_back(start);
        while let Some(u) = queue.pop_front() {
            for v in self.links(u).iter() {
                if component.insert(v) {
                    queue.push_back(v);
                }
            }
        }
        component
    }

    /// Returns the connected components, ordered by their smallest node id.
    pub fn connected_components(&self) -> Vec<NodeSet> {
        let mut components = Vec::new();
        let mut unvisited = self.active.clone();
        while let Some(start) = unvisited.first() {
            let component = self.component_of(start);
            unvisited.difference_with(&component);
            components.push(component);
        }
        components
    }

    /// Returns true if the graph has at most one component. The empty graph is connected.
    pub fn is_connected(&self) -> bool {
        match self.active.first() {
            None => true,
            Some(start) => self.component_of(start).len() == self.node_count(),
        }
    }

    /// Returns true if every two distinct members of `nodes` are adjacent.
    ///
    /// Vacuously true for sets of size 0 or 1.
    pub fn is_clique(&self, nodes: &NodeSet) -> bool {
        let members: Vec<NodeId> = nodes.iter().collect();
        for (i, &u) in members.iter().enumerate() {
            for &v in &members[i + 1..] {
                if !self.has_edge(u, v) {
                    return false;
                }
            }
        }
        true
    }

    /// Resolves a node set to names.
    pub fn names_of(&self, nodes: &NodeSet) -> BTreeSet<String> {
        nodes.iter().map(|n| self.name(n).to_owned()).collect()
    }

    /// Resolves a node set to names, in node id order.
    pub fn name_list(&self, nodes: &NodeSet) -> Vec<String> {
        nodes.iter().map(|n| self.name(n).to_owned()).collect()
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .field("capacity", &self.capacity())
            .field("directed", &self.directed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(g: &Graph, name: &str) -> NodeId {
        g.node_id(name).unwrap()
    }

    fn names(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_from_edges() {
        let g = Graph::from_edges([("a", "b"), ("b", "c"), ("a", "b"), ("b", "a")]).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_edge(id(&g, "a"), id(&g, "b")));
        assert!(g.has_edge(id(&g, "b"), id(&g, "a")));
        assert!(!g.has_edge(id(&g, "a"), id(&g, "c")));
        assert_eq!(g.name(id(&g, "c")), "c");
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let g = Graph::from_edges([("x", "y"), ("z", "x")]).unwrap();
        let names: Vec<&str> = g.nodes().map(|n| g.name(n)).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_self_loop_rejected() {
        let err = Graph::from_edges([("a", "a")]).unwrap_err();
        assert_eq!(err, InvalidInput::SelfLoop { node: "a".into() });
    }

    #[test]
    #[should_panic(expected = "Self-loops are not allowed")]
    fn test_add_edge_self_loop_panics() {
        let mut g = Graph::new();
        let a = g.add_node("a");
        g.add_edge(a, a);
    }

    #[test]
    fn test_remove_node() {
        let mut g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]).unwrap();
        let c = id(&g, "c");
        assert!(g.remove_node(c));
        assert!(!g.remove_node(c));
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert!(g.node_id("c").is_none());
        assert_eq!(g.name(c), "c");
        assert_eq!(g.connected_components().len(), 2);
    }

    #[test]
    fn test_clones_are_independent() {
        let g = Graph::from_edges([("a", "b"), ("b", "c")]).unwrap();
        let mut h = g.clone();
        h.remove_node(id(&g, "b"));
        h.add_node("d");
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(g.node_id("d").is_none());
        assert_eq!(h.node_count(), 3);
        assert_eq!(h.edge_count(), 0);
    }

    #[test]
    fn test_connected_components() {
        let g = Graph::from_edges([("a", "b"), ("c", "d"), ("d", "e")]).unwrap();
        let components = g.connected_components();
        assert_eq!(components.len(), 2);
        assert_eq!(g.names_of(&components[0]), names(&["a", "b"]));
        assert_eq!(g.names_of(&components[1]), names(&["c", "d", "e"]));
        assert!(!g.is_connected());
        assert!(Graph::new().is_connected());
    }

    #[test]
    fn test_is_clique() {
        let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]).unwrap();
        let abc: NodeSet = ["a", "b", "c"].iter().map(|n| id(&g, n)).collect();
        let abd: NodeSet = ["a", "b", "d"].iter().map(|n| id(&g, n)).collect();
        assert!(g.is_clique(&abc));
        assert!(!g.is_clique(&abd));
        assert!(g.is_clique(&NodeSet::empty()));
        assert!(g.is_clique(&[id(&g, "d")].into_iter().collect()));
    }

    #[test]
    fn test_edges_reported_once() {
        let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]).unwrap();
        let edges: Vec<_> = g.edges().collect();
        assert_eq!(edges.len(), 3);
        assert!(edges.iter().all(|(u, v)| u < v));
    }

    #[test]
    fn test_neighborhood_and_induced() {
        let g = Graph::from_edges([("a", "b"), ("b", "c"), ("c", "d")]).unwrap();
        let bc: NodeSet = [id(&g, "b"), id(&g, "c")].into_iter().collect();
        let around = g.neighborhood(&bc);
        assert_eq!(g.names_of(&around), names(&["a", "d"]));

        let sub = g.induced(&bc);
        assert_eq!(sub.node_count(), 2);
        assert_eq!(sub.edge_count(), 1);
    }

    #[test]
    fn test_directed_graph() {
        let mut g = Graph::new_directed();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(a, b);
        g.add_edge(c, b);
        assert!(g.is_directed());
        assert!(g.has_edge(a, b));
        assert!(!g.has_edge(b, a));
        // Weakly connected through b.
        assert!(g.is_connected());

        g.remove_node(b);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.is_connected());
    }
}
