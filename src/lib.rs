//! # cmsd: Clique Minimal Separator Decomposition
//!
//! **`cmsd`** finds the *clique minimal separators* of a graph and splits it into *atoms*.
//!
//! ## What is a clique minimal separator?
//!
//! A set of nodes `S` separates `a` from `b` if removing `S` disconnects them.
//! It is a *minimal* separator if no proper subset of `S` does the same for some pair.
//! A *clique minimal separator* is a minimal separator whose nodes are pairwise adjacent.
//! Cutting a graph along all of its clique minimal separators yields the atoms:
//! maximal connected subgraphs without a clique separator of their own.
//!
//! ## How it works
//!
//! 1. **Minimal triangulation** ([`triangulation`]): MCS-M adds a minimal set of fill
//!    edges to make the graph chordal, recording the elimination ordering and the
//!    *generators*, the nodes where a new minimal separator appears.
//! 2. **Extraction** ([`separators`]): walking the ordering backwards, the neighborhood
//!    of each generator in the shrinking triangulation is a minimal separator of the
//!    input. Those that are cliques of the input are the answer.
//!
//! Hypergraphs ([`hypergraph`]) are handled through their clique closure: every
//! hyperedge becomes a clique.
//!
//! ## Basic Usage
//!
//! ```rust
//! use cmsd::graph::Graph;
//! use cmsd::decomposition::decompose;
//!
//! // A square a-b-c-d with a triangle c-e-f hanging off c.
//! let g = Graph::from_edges([
//!     ("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"),
//!     ("c", "e"), ("e", "f"), ("f", "c"),
//! ]).unwrap();
//!
//! let result = decompose(&g).unwrap();
//! let separators = result.separator_names();
//! assert_eq!(separators.len(), 1);
//! assert!(separators.iter().next().unwrap().contains("c"));
//! assert_eq!(result.atoms().len(), 2);
//! ```
//!
//! ## Core Components
//!
//! - **[`graph`]**: Graphs over named nodes with bit-set adjacency.
//! - **[`triangulation`]**: MCS-M minimal triangulation and chordality checks.
//! - **[`separators`]**: Clique minimal separators and atoms from a triangulation.
//! - **[`decomposition`]**: The end-to-end entry points.
//! - **[`io`]**: DIMACS and plain-text hypergraph formats.
//! - **[`dot`]**: Graphviz output with separators highlighted.

pub mod decomposition;
pub mod dot;
pub mod error;
pub mod generate;
pub mod graph;
pub mod hypergraph;
pub mod io;
pub mod node_set;
pub mod separators;
pub mod triangulation;
pub mod types;

pub use decomposition::{decompose, decompose_with, find_minimal_clique_separators, CliqueDecomposition};
pub use error::{Error, InvalidInput, InvariantViolation, Result};
pub use graph::Graph;
pub use hypergraph::Hypergraph;
pub use triangulation::TieBreak;
