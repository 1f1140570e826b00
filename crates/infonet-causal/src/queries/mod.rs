//! Adjacency and path queries over id sets.

pub mod adjacency;
pub mod paths;

use std::collections::BTreeSet;

use infonet_core::models::NodeId;

/// Working set of node ids. Ordered so every derived result is reproducible.
pub type IdSet = BTreeSet<NodeId>;

pub use adjacency::{children_of, parents_of};
pub use paths::{causal_path_nodes, flatten_paths, path_and_parents, simple_paths, PathAndParents};
