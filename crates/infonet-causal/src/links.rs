//! Classify how a source reaches a target.

use petgraph::algo::has_path_connecting;

use infonet_core::models::{LinkKind, NodeId};

use crate::graph::lagged_graph::ix;
use crate::graph::LaggedGraph;
use crate::queries::causal_path_nodes;

/// Direct edge first (a direct edge is also a length-1 path), then any path, else unlinked.
pub fn classify(graph: &LaggedGraph, source: NodeId, target: NodeId) -> LinkKind {
    if source == target {
        return LinkKind::Unlinked;
    }
    if graph.has_edge(source, target) {
        return LinkKind::Directed;
    }
    // Any walk shortens to a simple path, so reachability decides.
    if has_path_connecting(graph.graph(), ix(source), ix(target), None) {
        LinkKind::CausalPath
    } else {
        LinkKind::Unlinked
    }
}

/// Whether some path from `source` to `target` passes through an intermediate node.
pub fn has_multi_hop_path(graph: &LaggedGraph, source: NodeId, target: NodeId) -> bool {
    causal_path_nodes(graph, source, target)
        .iter()
        .any(|&node| node != source)
}
