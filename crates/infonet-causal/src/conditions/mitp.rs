//! MIT conditions restricted to the causal paths between source and target.

use infonet_core::errors::InfonetResult;
use infonet_core::events::{Derivation, PathMissingEvent};
use infonet_core::models::{ConditionSet, LinkKind, Node};

use crate::links;
use crate::network::CausalNetwork;
use crate::queries::{parents_of, path_and_parents, IdSet};

use super::DeriveOptions;

/// `W = P ∪ (parents(target) \ C)` over the path nodes `C` and their parents `P`.
///
/// Empty when the source is unlinked, or when the direct edge is its only route to the
/// target; both cases are reported to the handler. With `transitive`, `W` is pruned against
/// its children on the path.
pub fn derive(
    network: &CausalNetwork,
    source: &Node,
    target: &Node,
    options: DeriveOptions,
) -> InfonetResult<ConditionSet> {
    let s = network.encode(source)?;
    let t = network.encode(target)?;
    let graph = network.graph();

    let link = links::classify(graph, s, t);
    let routed = match link {
        LinkKind::Unlinked => false,
        LinkKind::Directed => links::has_multi_hop_path(graph, s, t),
        LinkKind::CausalPath => true,
    };
    if !routed {
        network.handler().on_path_missing(&PathMissingEvent {
            derivation: Derivation::Mitp,
            source: *source,
            target: *target,
            link,
        });
        return Ok(ConditionSet::new());
    }

    let found = path_and_parents(graph, s, t);
    let pt = parents_of(graph, &IdSet::from([t]));
    let mut w = found.parents;
    w.extend(super::difference(&pt, &found.path));

    let pruned = network.prune(w, &found.path, options);
    let conditions = network.conditions(&pruned.retained);
    super::report_derived(network, Derivation::Mitp, target, &conditions);
    Ok(conditions)
}
