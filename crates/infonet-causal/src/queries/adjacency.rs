//! Direct parents and children of node sets.

use crate::graph::LaggedGraph;

use super::IdSet;

/// Union of the direct predecessors of `nodes`, minus `nodes` themselves.
pub fn parents_of(graph: &LaggedGraph, nodes: &IdSet) -> IdSet {
    nodes
        .iter()
        .flat_map(|&node| graph.predecessors(node))
        .filter(|parent| !nodes.contains(parent))
        .collect()
}

/// Union of the direct successors of `nodes`, minus `nodes` themselves.
pub fn children_of(graph: &LaggedGraph, nodes: &IdSet) -> IdSet {
    nodes
        .iter()
        .flat_map(|&node| graph.successors(node))
        .filter(|child| !nodes.contains(child))
        .collect()
}
