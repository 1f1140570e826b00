//! Bijection between `(variable, lag)` nodes and flat ids of the unrolled graph.
//!
//! Layer `L` holds lag `-L`; within a layer ids follow variable order:
//! `id = variable + nvar * |lag|`. Every other component goes through this codec.

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;
use crate::models::{Node, NodeId};

/// Encoder/decoder for a network of `nvar` variables unrolled to `taumax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCodec {
    nvar: usize,
    taumax: usize,
}

impl NodeCodec {
    pub fn new(nvar: usize, taumax: usize) -> Self {
        Self { nvar, taumax }
    }

    pub fn nvar(&self) -> usize {
        self.nvar
    }

    pub fn taumax(&self) -> usize {
        self.taumax
    }

    /// Total number of unrolled nodes, `nvar * (taumax + 1)`.
    pub fn nnodes(&self) -> usize {
        self.nvar * (self.taumax + 1)
    }

    /// Reject nodes outside the declared variables or the lag horizon.
    pub fn validate(&self, node: &Node) -> Result<(), GraphError> {
        if node.var >= self.nvar {
            return Err(GraphError::InvalidNode {
                node: *node,
                reason: format!("variable {} is not among the {} declared", node.var, self.nvar),
            });
        }
        if node.lag > 0 {
            return Err(GraphError::InvalidNode {
                node: *node,
                reason: "lag must not be positive".to_string(),
            });
        }
        if node.depth() > self.taumax {
            return Err(GraphError::InvalidNode {
                node: *node,
                reason: format!("|lag| exceeds taumax {}", self.taumax),
            });
        }
        Ok(())
    }

    pub fn encode(&self, node: &Node) -> Result<NodeId, GraphError> {
        self.validate(node)?;
        Ok(NodeId::new(node.var + self.nvar * node.depth()))
    }

    pub fn decode(&self, id: NodeId) -> Result<Node, GraphError> {
        self.check_id(id)?;
        Ok(self.node_at(id))
    }

    /// Decode without the range check. Only for ids that came out of this codec.
    pub fn node_at(&self, id: NodeId) -> Node {
        let index = id.index();
        Node::new(index % self.nvar, -((index / self.nvar) as i64))
    }

    pub fn check_id(&self, id: NodeId) -> Result<(), GraphError> {
        if id.index() >= self.nnodes() {
            return Err(GraphError::NodeIdOutOfRange {
                id: id.index(),
                nnodes: self.nnodes(),
            });
        }
        Ok(())
    }

    /// Id of `var` at unrolled layer `layer`, or `None` past the horizon.
    ///
    /// The graph builder uses this to truncate parents that fall outside the window.
    /// Layers too deep to index also come back as `None`.
    pub fn layer_id(&self, var: usize, layer: usize) -> Option<NodeId> {
        if var >= self.nvar {
            return None;
        }
        let index = self.nvar.checked_mul(layer)?.checked_add(var)?;
        (index < self.nnodes()).then_some(NodeId::new(index))
    }

    pub fn encode_all<'a, I>(&self, nodes: I) -> Result<Vec<NodeId>, GraphError>
    where
        I: IntoIterator<Item = &'a Node>,
    {
        nodes.into_iter().map(|n| self.encode(n)).collect()
    }

    pub fn decode_all<I>(&self, ids: I) -> Vec<Node>
    where
        I: IntoIterator<Item = NodeId>,
    {
        ids.into_iter().map(|id| self.node_at(id)).collect()
    }
}
