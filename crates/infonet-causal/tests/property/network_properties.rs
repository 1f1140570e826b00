//! Property tests for the causal network over random lagged declarations.

use std::sync::Arc;

use proptest::prelude::*;

use infonet_causal::{CausalNetwork, DeriveOptions};
use infonet_core::models::{CausalDeclaration, LagWeights, LinkKind, Node};
use infonet_core::NoopHandler;

const TAUMAX: usize = 3;

/// A declaration of 1..=3 variables with up to three parents each, plus matching weights.
fn network_strategy() -> impl Strategy<Value = CausalNetwork> {
    (1_usize..=3)
        .prop_flat_map(|nvar| {
            let parent = (0..nvar, 0_i64..=TAUMAX as i64);
            let parents = prop::collection::vec(prop::collection::vec(parent, 0..=3), nvar);
            let weights = prop::collection::vec(0.05_f64..1.0, nvar * nvar * (TAUMAX + 1));
            (Just(nvar), parents, weights)
        })
        .prop_map(|(nvar, parents, weights)| {
            let parents: Vec<Vec<Node>> = parents
                .into_iter()
                .enumerate()
                .map(|(var, list)| {
                    list.into_iter()
                        .filter(|&(p, lag)| !(p == var && lag == 0))
                        .map(|(p, lag)| Node::new(p, -lag))
                        .collect()
                })
                .collect();
            let nested: Vec<Vec<Vec<f64>>> = weights
                .chunks(nvar * (TAUMAX + 1))
                .map(|row| row.chunks(TAUMAX + 1).map(<[f64]>::to_vec).collect())
                .collect();
            CausalNetwork::new(
                CausalDeclaration::new(parents).unwrap(),
                Some(LagWeights::from_nested(nested).unwrap()),
                TAUMAX,
            )
            .unwrap()
            .with_handler(Arc::new(NoopHandler))
        })
}

fn node_strategy() -> impl Strategy<Value = Node> {
    (0_usize..3, 0_i64..=TAUMAX as i64).prop_map(|(var, lag)| Node::new(var, -lag))
}

/// Clamp a generated node into the network's variables.
fn fit(network: &CausalNetwork, node: Node) -> Node {
    Node::new(node.var % network.nvar(), node.lag)
}

fn fit_all(network: &CausalNetwork, nodes: &[Node]) -> Vec<Node> {
    let mut fitted: Vec<Node> = nodes.iter().map(|&n| fit(network, n)).collect();
    fitted.sort();
    fitted.dedup();
    fitted
}

proptest! {
    #[test]
    fn adjacency_excludes_the_query_set(
        network in network_strategy(),
        members in prop::collection::vec(node_strategy(), 0..5),
    ) {
        let members = fit_all(&network, &members);
        let parents = network.parents_of(&members).unwrap();
        let children = network.children_of(&members).unwrap();
        prop_assert!(parents.iter().all(|p| !members.contains(p)));
        prop_assert!(children.iter().all(|c| !members.contains(c)));
    }

    #[test]
    fn directed_link_implies_parent(
        network in network_strategy(),
        a in node_strategy(),
        b in node_strategy(),
    ) {
        let (a, b) = (fit(&network, a), fit(&network, b));
        let link = network.check_links(&a, &b).unwrap();
        let parents = network.search_parents(&b).unwrap();
        prop_assert_eq!(link == LinkKind::Directed, parents.contains(&a));
        if link == LinkKind::Unlinked {
            prop_assert!(network.search_causal_path_nodes(&a, &b).unwrap().is_empty());
        }
    }

    #[test]
    fn nested_paths_flatten_to_path_nodes(
        network in network_strategy(),
        a in node_strategy(),
        b in node_strategy(),
    ) {
        let (a, b) = (fit(&network, a), fit(&network, b));
        let paths = network.search_causal_paths(&a, &b).unwrap();
        let mut flattened: Vec<Node> = paths
            .iter()
            .flat_map(|path| path[..path.len() - 1].iter().copied())
            .collect();
        flattened.sort();
        flattened.dedup();
        prop_assert_eq!(flattened, network.search_causal_path_nodes(&a, &b).unwrap());
    }

    #[test]
    fn mit_never_contains_the_source(
        network in network_strategy(),
        a in node_strategy(),
        b in node_strategy(),
    ) {
        let (a, b) = (fit(&network, a), fit(&network, b));
        let mit = network.mit_condition(&a, &b).unwrap();
        prop_assert!(!mit.contains(&a));
    }

    #[test]
    fn mpid_source_terms_swap(
        network in network_strategy(),
        a in node_strategy(),
        b in node_strategy(),
        t in node_strategy(),
    ) {
        let (a, b, t) = (fit(&network, a), fit(&network, b), fit(&network, t));
        let forward = network.mpid_condition(&a, &b, &t, DeriveOptions::default()).unwrap();
        let backward = network.mpid_condition(&b, &a, &t, DeriveOptions::default()).unwrap();
        prop_assert_eq!(&forward.terms.first_source, &backward.terms.second_source);
        prop_assert_eq!(&forward.terms.second_source, &backward.terms.first_source);
        prop_assert_eq!(&forward.conditions, &backward.conditions);
    }

    #[test]
    fn reduction_is_an_idempotent_subset(
        network in network_strategy(),
        candidates in prop::collection::vec(node_strategy(), 0..6),
        reference in prop::collection::vec(node_strategy(), 0..6),
    ) {
        let candidates = fit_all(&network, &candidates);
        let reference = fit_all(&network, &reference);
        let once = network.transitive_reduction(&candidates, &reference).unwrap();
        prop_assert!(once.retained.iter().all(|v| candidates.contains(v)));
        let twice = network.transitive_reduction(&once.retained, &reference).unwrap();
        prop_assert_eq!(&twice.retained, &once.retained);
    }

    #[test]
    fn pruned_conditions_are_a_subset(
        network in network_strategy(),
        a in node_strategy(),
        t in node_strategy(),
    ) {
        let (a, t) = (fit(&network, a), fit(&network, t));
        let plain = network.mitp_condition(&a, &t, DeriveOptions::default()).unwrap();
        let pruned = network.mitp_condition(&a, &t, DeriveOptions::transitive()).unwrap();
        prop_assert!(pruned.is_subset(&plain));
    }
}
