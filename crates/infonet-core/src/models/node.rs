use std::fmt;

use serde::{Deserialize, Serialize};

/// A variable observed at a lag relative to the present (lag 0).
///
/// Lags are non-positive: `(1, -3)` is variable 1 three steps in the past.
/// Serialized as a `[variable, lag]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, i64)", into = "(usize, i64)")]
pub struct Node {
    pub var: usize,
    pub lag: i64,
}

impl Node {
    pub const fn new(var: usize, lag: i64) -> Self {
        Self { var, lag }
    }

    /// Number of steps into the past, i.e. `|lag|`.
    pub fn depth(&self) -> usize {
        usize::try_from(self.lag.unsigned_abs()).unwrap_or(usize::MAX)
    }
}

impl From<(usize, i64)> for Node {
    fn from((var, lag): (usize, i64)) -> Self {
        Self { var, lag }
    }
}

impl From<Node> for (usize, i64) {
    fn from(node: Node) -> Self {
        (node.var, node.lag)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.var, self.lag)
    }
}

/// Flat id of a node in the unrolled graph. Produced by [`crate::NodeCodec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
