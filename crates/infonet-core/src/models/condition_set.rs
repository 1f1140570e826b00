use std::collections::btree_set::{self, BTreeSet};

use serde::{Deserialize, Serialize};

use super::node::Node;

/// An order-irrelevant, deduplicated set of nodes used to condition an information measure.
///
/// Backed by a `BTreeSet` so iteration order, and therefore column order handed to an
/// estimator, is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionSet {
    nodes: BTreeSet<Node>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.nodes.contains(node)
    }

    pub fn insert(&mut self, node: Node) -> bool {
        self.nodes.insert(node)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Members that are not in `other`.
    pub fn difference(&self, other: &ConditionSet) -> ConditionSet {
        self.nodes.difference(&other.nodes).copied().collect()
    }

    pub fn union(&self, other: &ConditionSet) -> ConditionSet {
        self.nodes.union(&other.nodes).copied().collect()
    }

    pub fn is_subset(&self, other: &ConditionSet) -> bool {
        self.nodes.is_subset(&other.nodes)
    }

    pub fn to_vec(&self) -> Vec<Node> {
        self.nodes.iter().copied().collect()
    }
}

impl FromIterator<Node> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Node> for ConditionSet {
    fn extend<I: IntoIterator<Item = Node>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl IntoIterator for ConditionSet {
    type Item = Node;
    type IntoIter = btree_set::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConditionSet {
    type Item = &'a Node;
    type IntoIter = btree_set::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
