use std::fmt;

use serde::{Deserialize, Serialize};

/// How a source node reaches a target node in the unrolled graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// The source is a direct parent of the target.
    Directed,
    /// The source reaches the target only through one or more intermediate nodes.
    CausalPath,
    /// No directed path connects the two nodes.
    Unlinked,
}

impl LinkKind {
    /// Whether the source influences the target at all.
    pub fn is_linked(&self) -> bool {
        !matches!(self, Self::Unlinked)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::CausalPath => "causal_path",
            Self::Unlinked => "unlinked",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
