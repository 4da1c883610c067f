//! Error types for clique separator decomposition.
//!
//! Two kinds of failure are kept apart. [`InvalidInput`] is bad user data and
//! is recoverable. [`InvariantViolation`] means the algorithm itself went wrong
//! and must never be mistaken for bad input.

use thiserror::Error;

/// The supplied graph or hypergraph cannot be decomposed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The graph has more than one connected component.
    #[error("graph is disconnected ({components} components)")]
    Disconnected { components: usize },

    /// The graph is directed.
    #[error("graph is directed")]
    Directed,

    /// A hyperedge references a node that was never declared.
    #[error("hyperedge '{edge}' references unknown node '{node}'")]
    UnknownNode { edge: String, node: String },

    /// A hyperedge has no members.
    #[error("hyperedge '{edge}' is empty")]
    EmptyHyperedge { edge: String },

    /// An edge connects a node to itself.
    #[error("self-loop on node '{node}'")]
    SelfLoop { node: String },

    /// A random hypergraph over a non-empty node set was requested without hyperedges.
    #[error("cannot cover nodes without any hyperedge")]
    NoHyperedges,
}

/// An internal invariant of the decomposition does not hold.
///
/// This can only be caused by a defect in the triangulation or extraction
/// algorithms, never by the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Removing an accepted clique separator left the graph in one piece.
    #[error("separator {separator:?} does not split the graph")]
    SeparatorDoesNotSplit { separator: Vec<String> },

    /// An atom cut off at a generator turned out to be empty.
    #[error("atom cut off at generator '{generator}' is empty")]
    EmptyAtom { generator: String },

    /// The generator is not part of the graph that remains to be decomposed.
    #[error("generator '{generator}' is outside the remaining atom structure")]
    GeneratorOutsideAtom { generator: String },
}

/// Top-level decomposition error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input was rejected.
    #[error("decomposition failed: {0}")]
    DecompositionFailed(#[from] InvalidInput),

    /// The algorithm violated one of its own invariants.
    #[error("internal invariant violated: {0}")]
    Internal(#[from] InvariantViolation),
}

impl Error {
    /// Returns true if this error signals a defect rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}

/// Result type alias for decomposition operations.
pub type Result<T> = std::result::Result<T, Error>;
