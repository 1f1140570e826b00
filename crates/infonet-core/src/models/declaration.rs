//! The per-variable parent declaration: the sole structural input of a network.

use serde::{Deserialize, Serialize};

use super::node::Node;
use crate::errors::GraphError;

/// Parents of every variable, expressed relative to lag 0.
///
/// Index `j` of the outer list holds the parents of variable `j`, so the variable order is
/// exactly the order the caller supplied. `{0: [(0,-1), (1,-1)], 1: [(0,0), (1,-1)]}` is
/// `vec![vec![(0,-1), (1,-1)], vec![(0,0), (1,-1)]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Node>>", into = "Vec<Vec<Node>>")]
pub struct CausalDeclaration {
    parents: Vec<Vec<Node>>,
}

impl CausalDeclaration {
    /// Validate and wrap a parent list.
    ///
    /// Every parent must name a declared variable and have a non-positive lag. Parents
    /// deeper than the horizon are accepted here and truncated when the graph is built.
    pub fn new(parents: Vec<Vec<Node>>) -> Result<Self, GraphError> {
        if parents.is_empty() {
            return Err(GraphError::EmptyDeclaration);
        }
        let nvar = parents.len();
        for (variable, list) in parents.iter().enumerate() {
            for parent in list {
                if parent.var >= nvar {
                    return Err(GraphError::InvalidDeclaration {
                        variable,
                        reason: format!("parent {parent} names undeclared variable {}", parent.var),
                    });
                }
                if parent.lag > 0 {
                    return Err(GraphError::InvalidDeclaration {
                        variable,
                        reason: format!("parent {parent} lies in the future"),
                    });
                }
            }
        }
        Ok(Self { parents })
    }

    /// Convenience constructor from `(variable, lag)` pairs.
    pub fn from_pairs(parents: Vec<Vec<(usize, i64)>>) -> Result<Self, GraphError> {
        Self::new(
            parents
                .into_iter()
                .map(|list| list.into_iter().map(Node::from).collect())
                .collect(),
        )
    }

    /// Number of declared variables.
    pub fn nvar(&self) -> usize {
        self.parents.len()
    }

    /// Declared parents of `var`; empty for an unknown variable.
    pub fn parents_of(&self, var: usize) -> &[Node] {
        self.parents.get(var).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(variable, parents)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Node])> {
        self.parents.iter().enumerate().map(|(v, p)| (v, p.as_slice()))
    }
}

impl TryFrom<Vec<Vec<Node>>> for CausalDeclaration {
    type Error = GraphError;

    fn try_from(parents: Vec<Vec<Node>>) -> Result<Self, Self::Error> {
        Self::new(parents)
    }
}

impl From<CausalDeclaration> for Vec<Vec<Node>> {
    fn from(declaration: CausalDeclaration) -> Self {
        declaration.parents
    }
}
