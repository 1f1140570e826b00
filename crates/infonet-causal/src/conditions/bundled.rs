//! Components of the information transfer from a bundle of source variables.
//!
//! A source variable's history is split at lag `tau`: the immediate history holds lags
//! `-1..=-tau`, the distant history everything further back. The distant history is
//! represented by the parents of the immediate history that sit beyond `tau` in the source
//! variables. What is conditioned on outside the source variables depends on the
//! [`ApproximationLevel`].

use std::collections::BTreeSet;

use infonet_core::config::ApproximationLevel;
use infonet_core::errors::InfonetResult;
use infonet_core::events::Derivation;
use infonet_core::models::{Node, NodeId};

use crate::network::CausalNetwork;
use crate::queries::{parents_of, IdSet};

use super::{difference, BundledComponents, DeriveOptions};

pub fn derive(
    network: &CausalNetwork,
    source_vars: &[usize],
    target: &Node,
    tau: usize,
    level: ApproximationLevel,
    options: DeriveOptions,
) -> InfonetResult<BundledComponents> {
    let bundle: BTreeSet<usize> = source_vars.iter().copied().collect();
    let depth = i64::try_from(tau).unwrap_or(i64::MAX);
    // Lag check independent of the bundle, so an empty bundle is still bounded by taumax.
    network.codec().validate(&Node::new(0, -depth))?;
    for &var in &bundle {
        network.codec().validate(&Node::new(var, -depth))?;
    }
    let t = network.encode(target)?;
    let graph = network.graph();
    let in_bundle = |id: &NodeId| bundle.contains(&network.codec().node_at(*id).var);

    let ich: IdSet = bundle
        .iter()
        .flat_map(|&var| (1..=depth).map(move |lag| Node::new(var, -lag)))
        .map(|node| network.encode(&node))
        .collect::<InfonetResult<_>>()?;

    let pt = parents_of(graph, &IdSet::from([t]));
    let ptc: IdSet = pt
        .iter()
        .copied()
        .filter(|id| in_bundle(id) && network.codec().node_at(*id).lag >= -depth)
        .collect();
    let ptr = difference(&pt, &ptc);

    let w: IdSet = parents_of(graph, &ich)
        .into_iter()
        .filter(|id| in_bundle(id) && network.codec().node_at(*id).lag < -depth)
        .collect();
    let distant = network.prune(w, &ich, options);
    let w = distant.retained;

    let mut approximation = IdSet::new();
    let mut removed_approximation_edges = Vec::new();
    let remaining = if level == ApproximationLevel::Zeroth || bundle.len() == network.nvar() {
        IdSet::new()
    } else {
        let mut f = ptr;
        if level == ApproximationLevel::Second {
            approximation = w
                .iter()
                .chain(&ptc)
                .flat_map(|&id| parents_of(graph, &IdSet::from([id])))
                .filter(|id| !in_bundle(id))
                .collect();
            if options.transitive {
                let scope: IdSet = ich.union(&w).copied().collect();
                let pruned = network.prune(approximation, &scope, options);
                approximation = pruned.retained;
                removed_approximation_edges = pruned.removed_edges;
            }
            f.extend(approximation.iter().copied());
        }
        f
    };

    let report_edges = options.transitive && options.removed_edges;
    let result = BundledComponents {
        immediate_history: network.conditions(&ich),
        distant_history: network.conditions(&w),
        target_path_parents: network.conditions(&ptc),
        remaining: network.conditions(&remaining),
        approximation: network.conditions(&approximation),
        removed_edges: if report_edges {
            network.decode_edges(&distant.removed_edges)
        } else {
            Vec::new()
        },
        removed_approximation_edges: if report_edges {
            network.decode_edges(&removed_approximation_edges)
        } else {
            Vec::new()
        },
    };
    super::report_derived(network, Derivation::Bundled, target, &result.remaining);
    Ok(result)
}
