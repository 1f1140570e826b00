use crate::models::Node;

/// Errors raised while building or querying a lagged causal graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("invalid node {node}: {reason}")]
    InvalidNode { node: Node, reason: String },

    #[error("node id {id} is outside the graph of {nnodes} nodes")]
    NodeIdOutOfRange { id: usize, nnodes: usize },

    #[error("causal declaration declares no variables")]
    EmptyDeclaration,

    #[error("invalid declaration for variable {variable}: {reason}")]
    InvalidDeclaration { variable: usize, reason: String },

    #[error("lag weights have shape {found:?}, expected {expected:?}")]
    LagWeightShape {
        expected: (usize, usize, usize),
        found: (usize, usize, usize),
    },
}
