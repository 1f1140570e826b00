use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::layout::BlockLayout;
use crate::errors::LayoutError;
use crate::models::{ConditionSet, Node};

/// Ordered columns plus block layout for one information measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationRequest {
    columns: Vec<Node>,
    layout: BlockLayout,
}

impl EstimationRequest {
    /// Lay out `blocks` of variable nodes followed by the conditions.
    pub fn new(blocks: &[&[Node]], conditions: &ConditionSet) -> Result<Self, LayoutError> {
        if let Some(block) = blocks.iter().position(|b| b.is_empty()) {
            return Err(LayoutError::EmptyBlock { block });
        }
        let conditioned = !conditions.is_empty();
        let mut columns: Vec<Node> = Vec::new();
        let mut last_indices = Vec::with_capacity(blocks.len());
        for block in blocks {
            columns.extend_from_slice(block);
            last_indices.push(columns.len());
        }
        if !conditioned {
            last_indices.pop();
        }
        columns.extend(conditions.iter().copied());

        let layout = BlockLayout::new(blocks.len(), conditioned, Some(&last_indices), columns.len())?;
        Ok(Self { columns, layout })
    }

    /// Momentary information transfer: source, target, conditions.
    pub fn mit(source: Node, target: Node, conditions: &ConditionSet) -> Result<Self, LayoutError> {
        Self::new(&[&[source], &[target]], conditions)
    }

    /// Partial information decomposition: two sources, target, conditions.
    pub fn mpid(
        source1: Node,
        source2: Node,
        target: Node,
        conditions: &ConditionSet,
    ) -> Result<Self, LayoutError> {
        Self::new(&[&[source1], &[source2], &[target]], conditions)
    }

    /// Transfer from a bundle of source nodes into one target.
    pub fn bundled(
        sources: &[Node],
        target: Node,
        conditions: &ConditionSet,
    ) -> Result<Self, LayoutError> {
        Self::new(&[sources, &[target]], conditions)
    }

    pub fn columns(&self) -> &[Node] {
        &self.columns
    }

    pub fn layout(&self) -> &BlockLayout {
        &self.layout
    }

    /// Column of the first occurrence of `node`.
    pub fn column_of(&self, node: &Node) -> Option<usize> {
        self.columns.iter().position(|n| n == node)
    }

    /// Node → column mapping (first occurrence wins).
    pub fn column_map(&self) -> BTreeMap<Node, usize> {
        let mut map = BTreeMap::new();
        for (column, node) in self.columns.iter().enumerate() {
            map.entry(*node).or_insert(column);
        }
        map
    }
}
