//! Simple directed paths and the nodes lying on them.

use petgraph::algo::all_simple_paths;
use petgraph::visit::{Dfs, Reversed};

use infonet_core::models::NodeId;

use crate::graph::lagged_graph::{id, ix};
use crate::graph::LaggedGraph;

use super::adjacency::parents_of;
use super::IdSet;

/// Every cycle-free directed path from `source` to `target`, both ends included.
///
/// Empty when `source == target` or when the target is unreachable. The number of paths can
/// grow exponentially with the lag horizon; prefer [`causal_path_nodes`] when only the node
/// set matters.
pub fn simple_paths(graph: &LaggedGraph, source: NodeId, target: NodeId) -> Vec<Vec<NodeId>> {
    if source == target {
        return Vec::new();
    }
    all_simple_paths::<Vec<_>, _>(graph.graph(), ix(source), ix(target), 0, None)
        .map(|path| path.into_iter().map(id).collect())
        .collect()
}

/// Non-target nodes of a list of paths.
pub fn flatten_paths(paths: &[Vec<NodeId>]) -> IdSet {
    paths
        .iter()
        .flat_map(|path| path.split_last().map(|(_, rest)| rest).unwrap_or(&[]))
        .copied()
        .collect()
}

/// Every node other than the target lying on some simple path from `source` to `target`
/// (the source included whenever a path exists).
///
/// On an acyclic graph every walk is simple, so this is the set of nodes reachable from the
/// source that can also reach the target; cyclic graphs fall back to enumerating paths.
pub fn causal_path_nodes(graph: &LaggedGraph, source: NodeId, target: NodeId) -> IdSet {
    if source == target {
        return IdSet::new();
    }
    if !graph.is_acyclic() {
        return flatten_paths(&simple_paths(graph, source, target));
    }

    let g = graph.graph();
    let mut reaches_target = IdSet::new();
    let reversed = Reversed(g);
    let mut dfs = Dfs::new(reversed, ix(target));
    while let Some(node) = dfs.next(reversed) {
        reaches_target.insert(id(node));
    }
    if !reaches_target.contains(&source) {
        return IdSet::new();
    }

    let mut on_path = IdSet::new();
    let mut dfs = Dfs::new(g, ix(source));
    while let Some(node) = dfs.next(g) {
        let node = id(node);
        if node != target && reaches_target.contains(&node) {
            on_path.insert(node);
        }
    }
    on_path
}

/// Nodes on the causal paths from `source` to `target`, and their parents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathAndParents {
    /// Parents of the path nodes, excluding the path nodes.
    pub parents: IdSet,
    /// Non-target path nodes.
    pub path: IdSet,
}

pub fn path_and_parents(graph: &LaggedGraph, source: NodeId, target: NodeId) -> PathAndParents {
    let path = causal_path_nodes(graph, source, target);
    PathAndParents {
        parents: parents_of(graph, &path),
        path,
    }
}
