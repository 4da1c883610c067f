//! Graph to DOT (Graphviz) conversion.
//!
//! The generated DOT output follows these conventions:
//! - **Nodes** are labeled with their names; highlighted nodes (typically the
//!   members of a clique separator) are filled with a configurable color.
//! - **Edges** of the original graph are solid; fill edges of a triangulation
//!   are drawn dashed.
//!
//! # Examples
//!
//! ```
//! use cmsd::decomposition::decompose;
//! use cmsd::graph::Graph;
//!
//! let g = Graph::from_edges([("v1", "v2"), ("v2", "v3")]).unwrap();
//! let result = decompose(&g).unwrap();
//!
//! let dot = result.to_dot().unwrap();
//! // Write to file and render with: neato -Tpng output.dot -o output.png
//! assert!(dot.contains("\"v2\" [style=filled"));
//! ```

use std::fmt::Write as _;

use crate::decomposition::CliqueDecomposition;
use crate::graph::Graph;
use crate::node_set::NodeSet;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for nodes (default: "circle")
    pub node_shape: &'static str,
    /// Fill color for highlighted nodes (default: "lightblue")
    pub highlight_color: &'static str,
    /// Style for edges of the original graph (default: "solid")
    pub edge_style: &'static str,
    /// Style for fill edges of a triangulation (default: "dashed")
    pub fill_edge_style: &'static str,
    /// Whether to draw fill edges at all (default: false)
    pub show_fill_edges: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            highlight_color: "lightblue",
            edge_style: "solid",
            fill_edge_style: "dashed",
            show_fill_edges: false,
        }
    }
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Graph {
    /// Converts the graph to DOT format, filling the `highlighted` nodes.
    pub fn to_dot(&self, highlighted: &NodeSet) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(highlighted, None, &DotConfig::default())
    }

    /// Converts the graph to DOT format.
    ///
    /// If `triangulated` is given and `config.show_fill_edges` is set, its edges
    /// missing from `self` are drawn as fill edges.
    pub fn to_dot_with_config(
        &self,
        highlighted: &NodeSet,
        triangulated: Option<&Graph>,
        config: &DotConfig,
    ) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        let connector = if self.is_directed() { "->" } else { "--" };

        writeln!(dot, "{} {{", if self.is_directed() { "digraph" } else { "graph" })?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        for node in self.nodes() {
            if highlighted.contains(node) {
                writeln!(
                    dot,
                    "{} [style=filled, fillcolor={}];",
                    quote(self.name(node)),
                    config.highlight_color
                )?;
            } else {
                writeln!(dot, "{};", quote(self.name(node)))?;
            }
        }

        for (u, v) in self.edges() {
            writeln!(
                dot,
                "{} {} {} [style={}];",
                quote(self.name(u)),
                connector,
                quote(self.name(v)),
                config.edge_style
            )?;
        }

        if let Some(triangulated) = triangulated.filter(|_| config.show_fill_edges) {
            for (u, v) in triangulated.edges() {
                if self.contains(u) && self.contains(v) && !self.has_edge(u, v) {
                    writeln!(
                        dot,
                        "{} {} {} [style={}];",
                        quote(self.name(u)),
                        connector,
                        quote(self.name(v)),
                        config.fill_edge_style
                    )?;
                }
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

impl CliqueDecomposition {
    /// Converts the decomposed graph to DOT format, highlighting every separator node.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        self.graph()
            .to_dot_with_config(&self.separator_members(), Some(self.triangulation().graph()), config)
    }
}
