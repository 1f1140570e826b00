//! Prune a candidate set against a reference set using the closure.

use infonet_core::models::{Node, NodeId};

use crate::graph::{LaggedGraph, WeightMatrix};
use crate::queries::IdSet;

/// Outcome of a reduction over ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reduction {
    /// Candidates with a surviving edge into the reference set. Always a subset of the input.
    pub retained: IdSet,
    /// Graph edges `(v1, v2)` from candidates into the reference set that an indirect route
    /// dominates.
    pub removed_edges: Vec<(NodeId, NodeId)>,
}

/// Outcome of a reduction over nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeReduction {
    pub retained: Vec<Node>,
    pub removed_edges: Vec<(Node, Node)>,
}

/// Reduce `candidates` against `reference`.
///
/// Every direct weight whose closure value is strictly larger is zeroed; a candidate is
/// dropped when its remaining weights into `reference` sum to exactly zero. An empty
/// reference set therefore drops every candidate.
pub fn reduce(
    graph: &LaggedGraph,
    closure: &WeightMatrix,
    candidates: &IdSet,
    reference: &IdSet,
) -> Reduction {
    let weights = graph.weights();
    let dominated = |i: usize, j: usize| closure.get(i, j) > weights.get(i, j);

    let retained = candidates
        .iter()
        .copied()
        .filter(|v| {
            let i = v.index();
            let total: f64 = reference
                .iter()
                .map(|u| {
                    let j = u.index();
                    if dominated(i, j) {
                        0.0
                    } else {
                        weights.get(i, j)
                    }
                })
                .sum();
            total != 0.0
        })
        .collect();

    let removed_edges = candidates
        .iter()
        .flat_map(|&v| reference.iter().map(move |&u| (v, u)))
        .filter(|&(v, u)| graph.has_edge(v, u) && dominated(v.index(), u.index()))
        .collect();

    Reduction {
        retained,
        removed_edges,
    }
}
