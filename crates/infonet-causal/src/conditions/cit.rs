//! Cumulative information transfer components for several sources.

use infonet_core::errors::InfonetResult;
use infonet_core::events::Derivation;
use infonet_core::models::Node;

use crate::network::CausalNetwork;
use crate::queries::{parents_of, IdSet};

use super::{difference, CitComponents, DeriveOptions, PathUnion};

/// Conditions `(parents(target) \ C) ∪ (P \ C)` over the union of every linked source's path
/// nodes `C` and their parents `P`.
///
/// Unlinked sources are dropped and reported; if none remain the result is empty.
pub fn derive(
    network: &CausalNetwork,
    sources: &[Node],
    target: &Node,
    options: DeriveOptions,
) -> InfonetResult<CitComponents> {
    let t = network.encode(target)?;
    let (kept, ids) = super::linked_sources(network, Derivation::Cit, sources, target, t)?;
    if kept.is_empty() {
        return Ok(CitComponents::default());
    }

    let pt = parents_of(network.graph(), &IdSet::from([t]));
    let paths = PathUnion::collect(network, &ids, t);

    let mut w = difference(&pt, &paths.path);
    w.extend(difference(&paths.parents, &paths.path));
    let target_path_parents: IdSet = pt.intersection(&paths.path).copied().collect();

    let pruned = network.prune(w, &paths.path, options);
    let removed_edges = if options.transitive && options.removed_edges {
        network.decode_edges(&pruned.removed_edges)
    } else {
        Vec::new()
    };

    let result = CitComponents {
        conditions: network.conditions(&pruned.retained),
        target_path_parents: network.conditions(&target_path_parents),
        path_nodes: network.conditions(&paths.path),
        sources: kept,
        removed_edges,
    };
    super::report_derived(network, Derivation::Cit, target, &result.conditions);
    Ok(result)
}
