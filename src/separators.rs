//! Clique minimal separators and atoms.
//!
//! Given a graph `G` and a [`Triangulation`] of it, [`extract`] walks the nodes in
//! reverse selection order. For a generator `x`, the neighbors of `x` that are
//! still present in the shrinking triangulation form a minimal separator `S` of
//! `G`. If `S` is a clique of `G`, it is a clique minimal separator: the connected
//! component of `G' - S` holding `x` is cut off, `component + S` is recorded as an
//! atom, and the component is removed from the bookkeeping graph `G'`. Whatever
//! remains of `G'` at the end is the last atom.

use log::{debug, error, trace};

use crate::error::InvariantViolation;
use crate::graph::Graph;
use crate::node_set::NodeSet;
use crate::triangulation::Triangulation;
use crate::types::NodeId;

/// Clique minimal separators and atoms of a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decomposition {
    separators: Vec<NodeSet>,
    atoms: Vec<NodeSet>,
}

impl Decomposition {
    /// Distinct clique minimal separators, in discovery order.
    pub fn separators(&self) -> &[NodeSet] {
        &self.separators
    }

    /// Atoms, in the order they were cut off. The last one is what remained.
    pub fn atoms(&self) -> &[NodeSet] {
        &self.atoms
    }
}

/// Returns true if every two distinct members of `nodes` are adjacent in `graph`.
pub fn is_clique(graph: &Graph, nodes: &NodeSet) -> bool {
    graph.is_clique(nodes)
}

/// Extracts the clique minimal separators of `graph` from its triangulation.
///
/// `triangulation` must have been computed from `graph`. The result may be empty,
/// e.g. for complete graphs or cycles.
pub fn extract(graph: &Graph, triangulation: &Triangulation) -> Result<Decomposition, InvariantViolation> {
    let mut remaining = graph.clone();
    let mut chordal = triangulation.graph().clone();
    let mut decomposition = Decomposition::default();

    for &x in triangulation.ordering().iter().rev() {
        if triangulation.is_generator(x) {
            let separator = chordal.neighbors(x).clone();
            if !separator.is_empty() && is_clique(graph, &separator) {
                let atom = cut_atom(graph, &mut remaining, &separator, x)?;
                trace!(
                    "generator {}: separator {:?}, atom {:?}",
                    graph.name(x),
                    graph.name_list(&separator),
                    graph.name_list(&atom)
                );
                if !decomposition.separators.contains(&separator) {
                    decomposition.separators.push(separator);
                }
                decomposition.atoms.push(atom);
            }
        }
        chordal.remove_node(x);
    }

    if !remaining.is_empty() {
        decomposition.atoms.push(remaining.node_set().clone());
    }

    debug!(
        "extract: {} clique minimal separators, {} atoms",
        decomposition.separators.len(),
        decomposition.atoms.len()
    );
    Ok(decomposition)
}

/// Removes from `remaining` the component of `remaining - separator` holding `generator`,
/// and returns that component together with the separator.
fn cut_atom(
    graph: &Graph,
    remaining: &mut Graph,
    separator: &NodeSet,
    generator: NodeId,
) -> Result<NodeSet, InvariantViolation> {
    let mut split = remaining.clone();
    split.remove_nodes(separator.iter());

    let components = split.connected_components();
    if components.len() < 2 {
        let violation = InvariantViolation::SeparatorDoesNotSplit {
            separator: graph.name_list(separator),
        };
        error!("{}", violation);
        return Err(violation);
    }

    let Some(component) = components.into_iter().find(|c| c.contains(generator)) else {
        let violation = InvariantViolation::GeneratorOutsideAtom {
            generator: graph.name(generator).to_owned(),
        };
        error!("{}", violation);
        return Err(violation);
    };

    remaining.remove_nodes(component.iter());

    let mut atom = component;
    atom.union_with(separator);
    if atom.is_empty() {
        let violation = InvariantViolation::EmptyAtom {
            generator: graph.name(generator).to_owned(),
        };
        error!("{}", violation);
        return Err(violation);
    }
    Ok(atom)
}
