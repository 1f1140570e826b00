//! Condition-set derivations.
//!
//! Each derivation validates its inputs, classifies source/target links without reporting,
//! combines path nodes and their parents by set algebra over ids, optionally prunes with the
//! weighted transitive reduction, and decodes the result back into nodes.

pub mod bundled;
pub mod cit;
pub mod mit;
pub mod mitp;
pub mod mpid;

use infonet_core::config::ConditionConfig;
use infonet_core::events::{ConditionsDerivedEvent, Derivation, SourceDroppedEvent};
use infonet_core::errors::InfonetResult;
use infonet_core::models::{ConditionSet, Node, NodeId};

use crate::links;
use crate::network::CausalNetwork;
use crate::queries::IdSet;

/// Per-call switches shared by every derivation that can prune.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeriveOptions {
    /// Prune the derived set with the weighted transitive reduction.
    pub transitive: bool,
    /// Report the dominated edges the reduction found. Ignored unless `transitive` is set.
    pub removed_edges: bool,
}

impl DeriveOptions {
    pub fn transitive() -> Self {
        Self {
            transitive: true,
            removed_edges: false,
        }
    }

    pub fn with_removed_edges(mut self) -> Self {
        self.removed_edges = true;
        self
    }
}

impl From<&ConditionConfig> for DeriveOptions {
    fn from(config: &ConditionConfig) -> Self {
        Self {
            transitive: config.transitive,
            removed_edges: config.removed_edges,
        }
    }
}

/// The three terms whose union makes up the MPID conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpidTerms {
    /// Parents of the target off both sources' paths.
    pub target: ConditionSet,
    /// Parents of the first source's path off the second source's path.
    pub first_source: ConditionSet,
    /// Parents of the second source's path off the first source's path.
    pub second_source: ConditionSet,
}

/// MPID conditions for a pair of sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpidConditions {
    pub conditions: ConditionSet,
    /// Union of both sources' path nodes.
    pub path_nodes: ConditionSet,
    /// Terms before pruning.
    pub terms: MpidTerms,
}

/// MPID conditions for two source sets, with the sources that were kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MpidSetConditions {
    pub sources1: Vec<Node>,
    pub sources2: Vec<Node>,
    pub conditions: ConditionSet,
    pub path_nodes: ConditionSet,
}

/// Components of the cumulative information transfer from several sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitComponents {
    pub conditions: ConditionSet,
    /// Parents of the target lying on a source's path.
    pub target_path_parents: ConditionSet,
    pub path_nodes: ConditionSet,
    /// Sources linked to the target, in input order.
    pub sources: Vec<Node>,
    pub removed_edges: Vec<(Node, Node)>,
}

impl CitComponents {
    /// True when no source was linked to the target.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Components of the transfer from a bundle of source variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundledComponents {
    /// Source nodes at lags `-1..=-tau`.
    pub immediate_history: ConditionSet,
    /// Parents of the immediate history further back than `tau` within the source variables.
    pub distant_history: ConditionSet,
    /// Parents of the target within the source variables and lag window.
    pub target_path_parents: ConditionSet,
    /// Conditions outside the source variables, per approximation level.
    pub remaining: ConditionSet,
    /// Second-level parents of the distant history and target path parents.
    pub approximation: ConditionSet,
    pub removed_edges: Vec<(Node, Node)>,
    pub removed_approximation_edges: Vec<(Node, Node)>,
}

/// Path nodes and their parents accumulated over several sources.
#[derive(Debug, Default)]
pub(crate) struct PathUnion {
    pub parents: IdSet,
    pub path: IdSet,
}

impl PathUnion {
    pub fn collect(network: &CausalNetwork, sources: &IdSet, target: NodeId) -> Self {
        let mut union = Self::default();
        for &source in sources {
            let found = crate::queries::path_and_parents(network.graph(), source, target);
            union.parents.extend(found.parents);
            union.path.extend(found.path);
        }
        union
    }
}

/// Split `sources` into those linked to `target`, reporting each one dropped.
pub(crate) fn linked_sources(
    network: &CausalNetwork,
    derivation: Derivation,
    sources: &[Node],
    target: &Node,
    target_id: NodeId,
) -> InfonetResult<(Vec<Node>, IdSet)> {
    let encoded = network.codec().encode_all(sources)?;
    let mut kept = Vec::with_capacity(sources.len());
    let mut ids = IdSet::new();
    for (source, id) in sources.iter().zip(encoded) {
        if links::classify(network.graph(), id, target_id).is_linked() {
            if ids.insert(id) {
                kept.push(*source);
            }
        } else {
            network.handler().on_source_dropped(&SourceDroppedEvent {
                derivation,
                source: *source,
                target: *target,
            });
        }
    }
    Ok((kept, ids))
}

pub(crate) fn report_derived(
    network: &CausalNetwork,
    derivation: Derivation,
    target: &Node,
    conditions: &ConditionSet,
) {
    network.handler().on_conditions_derived(&ConditionsDerivedEvent {
        derivation,
        target: *target,
        conditions: conditions.len(),
    });
}

pub(crate) fn difference(a: &IdSet, b: &IdSet) -> IdSet {
    a.difference(b).copied().collect()
}
