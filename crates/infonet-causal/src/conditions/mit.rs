//! Momentary information transfer conditions.

use infonet_core::errors::InfonetResult;
use infonet_core::events::Derivation;
use infonet_core::models::{ConditionSet, Node};

use crate::network::CausalNetwork;
use crate::queries::{parents_of, IdSet};

/// `parents(source) ∪ (parents(target) \ {source})`. No path is required.
pub fn derive(network: &CausalNetwork, source: &Node, target: &Node) -> InfonetResult<ConditionSet> {
    let s = network.encode(source)?;
    let t = network.encode(target)?;
    let graph = network.graph();

    let mut w = parents_of(graph, &IdSet::from([s]));
    w.extend(parents_of(graph, &IdSet::from([t])));
    w.remove(&s);

    let conditions = network.conditions(&w);
    super::report_derived(network, Derivation::Mit, target, &conditions);
    Ok(conditions)
}
