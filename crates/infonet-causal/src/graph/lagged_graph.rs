//! petgraph wrapper whose node indices coincide with codec ids.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use infonet_core::models::{Node, NodeId};
use infonet_core::NodeCodec;

use super::weights::WeightMatrix;

/// The underlying directed graph type. Node weights are the decoded nodes,
/// edge weights the shifted lag weights.
pub type LagDiGraph = DiGraph<Node, f64>;

/// An immutable unrolled graph together with its dense weight matrix.
#[derive(Debug, Clone)]
pub struct LaggedGraph {
    pub(crate) graph: LagDiGraph,
    pub(crate) codec: NodeCodec,
    pub(crate) weights: WeightMatrix,
    pub(crate) offset: f64,
    pub(crate) acyclic: bool,
}

pub(crate) fn ix(id: NodeId) -> NodeIndex {
    NodeIndex::new(id.index())
}

pub(crate) fn id(ix: NodeIndex) -> NodeId {
    NodeId::new(ix.index())
}

impl LaggedGraph {
    pub fn graph(&self) -> &LagDiGraph {
        &self.graph
    }

    pub fn codec(&self) -> &NodeCodec {
        &self.codec
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    /// Amount subtracted from every lag weight so that all became non-negative
    /// (the tensor minimum when negative, else 0).
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether the unrolled graph has no directed cycle (only contemporaneous
    /// links can introduce one).
    pub fn is_acyclic(&self) -> bool {
        self.acyclic
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.graph.find_edge(ix(from), ix(to)).is_some()
    }

    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph
            .neighbors_directed(ix(node), Direction::Incoming)
            .map(id)
    }

    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.graph
            .neighbors_directed(ix(node), Direction::Outgoing)
            .map(id)
    }

    /// `(parent, child, weight)` for every edge.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (id(e.source()), id(e.target()), *e.weight()))
    }
}
