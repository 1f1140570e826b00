//! Momentary partial information decomposition conditions, for two sources or two source sets.

use infonet_core::errors::InfonetResult;
use infonet_core::events::{Derivation, PathMissingEvent};
use infonet_core::models::{Node, NodeId};

use crate::links;
use crate::network::CausalNetwork;
use crate::queries::{parents_of, path_and_parents, IdSet};

use super::{difference, DeriveOptions, MpidConditions, MpidSetConditions, MpidTerms, PathUnion};

/// Three-term MPID union over the two sides' path nodes `C1`, `C2` and parents `P1`, `P2`.
struct Terms {
    target: IdSet,
    first: IdSet,
    second: IdSet,
    path: IdSet,
}

impl Terms {
    fn new(pt: &IdSet, first: &PathUnion, second: &PathUnion) -> Self {
        let path: IdSet = first.path.union(&second.path).copied().collect();
        Self {
            target: difference(pt, &path),
            first: difference(&first.parents, &second.path),
            second: difference(&second.parents, &first.path),
            path,
        }
    }

    fn union(&self) -> IdSet {
        self.target
            .iter()
            .chain(&self.first)
            .chain(&self.second)
            .copied()
            .collect()
    }
}

fn single(network: &CausalNetwork, source: NodeId, target: NodeId) -> PathUnion {
    let found = path_and_parents(network.graph(), source, target);
    PathUnion {
        parents: found.parents,
        path: found.path,
    }
}

/// MPID conditions for `source1`, `source2` onto `target`.
///
/// Both sources must be linked to the target; otherwise the unlinked one is reported and
/// the result is empty.
pub fn derive(
    network: &CausalNetwork,
    source1: &Node,
    source2: &Node,
    target: &Node,
    options: DeriveOptions,
) -> InfonetResult<MpidConditions> {
    let s1 = network.encode(source1)?;
    let s2 = network.encode(source2)?;
    let t = network.encode(target)?;
    let graph = network.graph();

    for (source, id) in [(source1, s1), (source2, s2)] {
        let link = links::classify(graph, id, t);
        if !link.is_linked() {
            network.handler().on_path_missing(&PathMissingEvent {
                derivation: Derivation::Mpid,
                source: *source,
                target: *target,
                link,
            });
            return Ok(MpidConditions::default());
        }
    }

    let pt = parents_of(graph, &IdSet::from([t]));
    let terms = Terms::new(&pt, &single(network, s1, t), &single(network, s2, t));
    let pruned = network.prune(terms.union(), &terms.path, options);

    let result = MpidConditions {
        conditions: network.conditions(&pruned.retained),
        path_nodes: network.conditions(&terms.path),
        terms: MpidTerms {
            target: network.conditions(&terms.target),
            first_source: network.conditions(&terms.first),
            second_source: network.conditions(&terms.second),
        },
    };
    super::report_derived(network, Derivation::Mpid, target, &result.conditions);
    Ok(result)
}

/// MPID conditions for two source sets.
///
/// Sources not linked to the target are dropped from their set and reported. Path nodes and
/// parents are accumulated over every kept source of each set.
pub fn derive_sets(
    network: &CausalNetwork,
    sources1: &[Node],
    sources2: &[Node],
    target: &Node,
    options: DeriveOptions,
) -> InfonetResult<MpidSetConditions> {
    for source in sources1.iter().chain(sources2) {
        network.codec().validate(source)?;
    }
    let t = network.encode(target)?;

    let (kept1, ids1) = super::linked_sources(network, Derivation::MpidSet, sources1, target, t)?;
    let (kept2, ids2) = super::linked_sources(network, Derivation::MpidSet, sources2, target, t)?;

    let pt = parents_of(network.graph(), &IdSet::from([t]));
    let first = PathUnion::collect(network, &ids1, t);
    let second = PathUnion::collect(network, &ids2, t);
    let terms = Terms::new(&pt, &first, &second);
    let pruned = network.prune(terms.union(), &terms.path, options);

    let result = MpidSetConditions {
        sources1: kept1,
        sources2: kept2,
        conditions: network.conditions(&pruned.retained),
        path_nodes: network.conditions(&terms.path),
    };
    super::report_derived(network, Derivation::MpidSet, target, &result.conditions);
    Ok(result)
}
