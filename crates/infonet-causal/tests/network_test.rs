//! Scenario tests for the causal network: construction, queries, links and derivations.

use std::sync::{Arc, Mutex};

use infonet_causal::{CausalNetwork, DeriveOptions};
use infonet_core::config::{ApproximationLevel, NetworkConfig};
use infonet_core::events::{
    ConditionsDerivedEvent, Derivation, EdgesPrunedEvent, NetworkEventHandler, PathMissingEvent,
    SourceDroppedEvent,
};
use infonet_core::models::{CausalDeclaration, ConditionSet, LagWeights, LinkKind, Node};
use infonet_core::NoopHandler;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn n(var: usize, lag: i64) -> Node {
    Node::new(var, lag)
}

fn set(nodes: &[(usize, i64)]) -> ConditionSet {
    nodes.iter().map(|&(v, l)| n(v, l)).collect()
}

fn nodes(list: &[(usize, i64)]) -> Vec<Node> {
    list.iter().map(|&(v, l)| n(v, l)).collect()
}

/// `{0: [(0,-1), (1,-1)], 1: [(0,0), (1,-1)]}`
fn two_variable_declaration() -> CausalDeclaration {
    CausalDeclaration::from_pairs(vec![vec![(0, -1), (1, -1)], vec![(0, 0), (1, -1)]]).unwrap()
}

fn two_variable_network(taumax: usize) -> CausalNetwork {
    CausalNetwork::new(two_variable_declaration(), None, taumax)
        .unwrap()
        .with_handler(Arc::new(NoopHandler))
}

#[derive(Default)]
struct RecordingHandler {
    missing: Mutex<Vec<PathMissingEvent>>,
    dropped: Mutex<Vec<SourceDroppedEvent>>,
    derived: Mutex<Vec<ConditionsDerivedEvent>>,
    pruned: Mutex<Vec<EdgesPrunedEvent>>,
}

impl NetworkEventHandler for RecordingHandler {
    fn on_path_missing(&self, event: &PathMissingEvent) {
        self.missing.lock().unwrap().push(event.clone());
    }
    fn on_source_dropped(&self, event: &SourceDroppedEvent) {
        self.dropped.lock().unwrap().push(event.clone());
    }
    fn on_conditions_derived(&self, event: &ConditionsDerivedEvent) {
        self.derived.lock().unwrap().push(event.clone());
    }
    fn on_edges_pruned(&self, event: &EdgesPrunedEvent) {
        self.pruned.lock().unwrap().push(event.clone());
    }
}

fn recorded_network(taumax: usize) -> (CausalNetwork, Arc<RecordingHandler>) {
    let handler = Arc::new(RecordingHandler::default());
    let network = CausalNetwork::new(two_variable_declaration(), None, taumax)
        .unwrap()
        .with_handler(handler.clone());
    (network, handler)
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn unrolls_declaration_at_every_layer() {
    let network = two_variable_network(3);
    assert_eq!(network.nvar(), 2);
    assert_eq!(network.taumax(), 3);
    assert_eq!(network.nnodes(), 8);
    // var 0: two lag-1 parents on layers 0..=2, var 1: (0,0) on 4 layers and (1,-1) on 3.
    assert_eq!(network.graph().edge_count(), 13);
    assert!(network.graph().is_acyclic());
    assert_eq!(network.offset(), 0.0);
}

#[test]
fn taumax_zero_keeps_only_contemporaneous_edges() {
    let network = two_variable_network(0);
    assert_eq!(network.nnodes(), 2);
    let edges: Vec<_> = network
        .graph()
        .edges()
        .map(|(a, b, _)| (a.index(), b.index()))
        .collect();
    assert_eq!(edges, vec![(0, 1)]);
    for (a, b, _) in network.graph().edges() {
        assert!(a.index() < network.nnodes() && b.index() < network.nnodes());
    }
}

#[test]
fn parents_beyond_any_representable_layer_are_truncated() {
    let declaration = CausalDeclaration::from_pairs(vec![vec![(1, i64::MIN)], vec![]]).unwrap();
    let network = CausalNetwork::new(declaration, None, 3).unwrap();
    assert_eq!(network.nnodes(), 8);
    assert_eq!(network.graph().edge_count(), 0);
}

#[test]
fn negative_lag_weights_are_shifted_and_offset_recorded() {
    let mut nested = vec![vec![vec![0.5; 3]; 2]; 2];
    nested[1][0][1] = -0.25;
    let weights = LagWeights::from_nested(nested).unwrap();
    let network = CausalNetwork::new(two_variable_declaration(), Some(weights), 2).unwrap();

    assert_eq!(network.offset(), -0.25);
    assert!(network.graph().weights().is_non_negative());
    // (1,-1) -> (0,0) carries the minimum, now zero; (0,-1) -> (0,0) carries 0.5 + 0.25.
    let codec = network.codec();
    let target = codec.encode(&n(0, 0)).unwrap().index();
    let weakest = codec.encode(&n(1, -1)).unwrap().index();
    let strong = codec.encode(&n(0, -1)).unwrap().index();
    assert_eq!(network.graph().weights().get(weakest, target), 0.0);
    assert_eq!(network.graph().weights().get(strong, target), 0.75);
    assert_eq!(network.original_lag_weights().get(1, 0, 1), -0.25);
}

#[test]
fn lag_weights_of_the_wrong_shape_are_rejected() {
    let weights = LagWeights::uniform(2, 5);
    assert!(CausalNetwork::new(two_variable_declaration(), Some(weights), 3).is_err());
}

#[test]
fn config_selects_horizon_and_sequential_closure() {
    let config = NetworkConfig {
        taumax: 2,
        parallel_closure: false,
    };
    let sequential = CausalNetwork::with_config(two_variable_declaration(), None, &config).unwrap();
    let parallel = two_variable_network(2);
    assert_eq!(sequential.nnodes(), 6);
    assert_eq!(sequential.closure(), parallel.closure());
}

// ---------------------------------------------------------------------------
// Queries and links
// ---------------------------------------------------------------------------

#[test]
fn parents_and_children_of_single_nodes() {
    let network = two_variable_network(3);
    assert_eq!(
        network.search_parents(&n(0, 0)).unwrap(),
        nodes(&[(0, -1), (1, -1)])
    );
    assert_eq!(
        network.search_children(&n(0, -1)).unwrap(),
        nodes(&[(0, 0), (1, -1)])
    );
    // The oldest layer has no parents inside the window.
    assert!(network.search_parents(&n(0, -3)).unwrap().is_empty());
}

#[test]
fn set_queries_exclude_members() {
    let network = two_variable_network(3);
    let members = nodes(&[(0, -1), (0, 0)]);
    let parents = network.parents_of(&members).unwrap();
    assert_eq!(parents, nodes(&[(0, -2), (1, -2), (1, -1)]));
    let children = network.children_of(&members).unwrap();
    assert_eq!(children, nodes(&[(1, -1), (1, 0)]));
}

#[test]
fn nested_paths_flatten_to_path_nodes() {
    let network = two_variable_network(3);
    let mut paths = network.search_causal_paths(&n(1, -2), &n(0, 0)).unwrap();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            nodes(&[(1, -2), (0, -1), (0, 0)]),
            nodes(&[(1, -2), (0, -1), (1, -1), (0, 0)]),
            nodes(&[(1, -2), (1, -1), (0, 0)]),
        ]
    );
    assert_eq!(
        network.search_causal_path_nodes(&n(1, -2), &n(0, 0)).unwrap(),
        nodes(&[(0, -1), (1, -2), (1, -1)])
    );
    let (parents, path) = network.path_and_parents(&n(1, -2), &n(0, 0)).unwrap();
    assert_eq!(parents, nodes(&[(0, -2), (1, -3)]));
    assert_eq!(path, nodes(&[(0, -1), (1, -2), (1, -1)]));
}

#[test]
fn no_paths_from_a_node_to_itself() {
    let network = two_variable_network(3);
    assert!(network.search_causal_paths(&n(0, -1), &n(0, -1)).unwrap().is_empty());
    assert!(network.search_causal_path_nodes(&n(0, -1), &n(0, -1)).unwrap().is_empty());
}

#[test]
fn links_are_classified_direct_first() {
    let network = two_variable_network(3);
    assert_eq!(network.check_links(&n(1, -1), &n(0, 0)).unwrap(), LinkKind::Directed);
    assert_eq!(network.check_links(&n(1, -2), &n(0, 0)).unwrap(), LinkKind::CausalPath);
    assert_eq!(network.check_links(&n(0, 0), &n(1, -1)).unwrap(), LinkKind::Unlinked);
}

#[test]
fn unlinked_check_is_reported() {
    let (network, handler) = recorded_network(3);
    network.check_links(&n(0, 0), &n(1, -1)).unwrap();
    network.check_links(&n(1, -1), &n(0, 0)).unwrap();
    let missing = handler.missing.lock().unwrap();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].derivation, Derivation::Links);
    assert_eq!(missing[0].link, LinkKind::Unlinked);
}

// ---------------------------------------------------------------------------
// Derivations
// ---------------------------------------------------------------------------

#[test]
fn mit_unions_both_parent_sets() {
    let network = two_variable_network(3);
    let mit = network.mit_condition(&n(1, -2), &n(0, 0)).unwrap();
    assert_eq!(mit, set(&[(0, -2), (0, -1), (1, -3), (1, -1)]));
}

#[test]
fn mit_excludes_a_source_that_is_a_target_parent() {
    let network = two_variable_network(3);
    let mit = network.mit_condition(&n(1, -1), &n(0, 0)).unwrap();
    assert!(!mit.contains(&n(1, -1)));
    assert_eq!(mit, set(&[(0, -1), (1, -2)]));
}

#[test]
fn mitp_conditions_on_path_parents() {
    let network = two_variable_network(3);
    let mitp = network
        .mitp_condition(&n(1, -2), &n(0, 0), DeriveOptions::default())
        .unwrap();
    assert_eq!(mitp, set(&[(0, -2), (1, -3)]));
}

#[test]
fn mitp_is_empty_for_direct_only_and_unlinked_sources() {
    let (network, handler) = recorded_network(3);
    let direct = network
        .mitp_condition(&n(1, -1), &n(0, 0), DeriveOptions::default())
        .unwrap();
    assert!(direct.is_empty());
    let unlinked = network
        .mitp_condition(&n(0, 0), &n(1, -1), DeriveOptions::default())
        .unwrap();
    assert!(unlinked.is_empty());

    let missing = handler.missing.lock().unwrap();
    let kinds: Vec<LinkKind> = missing.iter().map(|e| e.link).collect();
    assert_eq!(kinds, vec![LinkKind::Directed, LinkKind::Unlinked]);
    assert!(missing.iter().all(|e| e.derivation == Derivation::Mitp));
}

#[test]
fn mitp_keeps_a_direct_parent_that_also_has_a_detour() {
    let network = two_variable_network(3);
    // (0,-1) -> (0,0) directly and through (1,-1).
    let mitp = network
        .mitp_condition(&n(0, -1), &n(0, 0), DeriveOptions::default())
        .unwrap();
    assert_eq!(mitp, set(&[(0, -2), (1, -2)]));
}

#[test]
fn mpid_returns_terms_and_path_nodes() {
    let network = two_variable_network(3);
    let mpid = network
        .mpid_condition(&n(0, -2), &n(1, -2), &n(0, 0), DeriveOptions::default())
        .unwrap();
    assert_eq!(mpid.conditions, set(&[(0, -3), (1, -3)]));
    assert_eq!(mpid.path_nodes, set(&[(0, -2), (0, -1), (1, -2), (1, -1)]));
    assert!(mpid.terms.target.is_empty());
    assert_eq!(mpid.terms.first_source, set(&[(0, -3), (1, -3)]));
    assert_eq!(mpid.terms.second_source, set(&[(1, -3)]));
}

#[test]
fn mpid_with_an_unlinked_source_is_empty() {
    let (network, handler) = recorded_network(3);
    let mpid = network
        .mpid_condition(&n(0, 0), &n(1, -2), &n(1, -1), DeriveOptions::transitive())
        .unwrap();
    assert!(mpid.conditions.is_empty());
    assert!(mpid.path_nodes.is_empty());

    let missing = handler.missing.lock().unwrap();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].source, n(0, 0));
    assert_eq!(missing[0].derivation, Derivation::Mpid);
}

#[test]
fn mpid_set_drops_unlinked_sources_and_accumulates_both_sets() {
    let (network, handler) = recorded_network(3);
    let result = network
        .mpid_set_condition(
            &nodes(&[(0, -2), (1, -3), (0, 0)]),
            &nodes(&[(1, -1)]),
            &n(0, 0),
            DeriveOptions::default(),
        )
        .unwrap();
    assert_eq!(result.sources1, nodes(&[(0, -2), (1, -3)]));
    assert_eq!(result.sources2, nodes(&[(1, -1)]));
    assert_eq!(result.conditions, set(&[(0, -3), (1, -3)]));
    assert_eq!(
        result.path_nodes,
        set(&[(0, -2), (0, -1), (1, -3), (1, -2), (1, -1)])
    );

    let dropped = handler.dropped.lock().unwrap();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].source, n(0, 0));
    assert_eq!(dropped[0].derivation, Derivation::MpidSet);
}

#[test]
fn cit_components_over_linked_sources() {
    let network = two_variable_network(3);
    let cit = network
        .cit_components(
            &nodes(&[(0, -2), (1, -2), (0, 0)]),
            &n(0, 0),
            DeriveOptions::default(),
        )
        .unwrap();
    assert_eq!(cit.sources, nodes(&[(0, -2), (1, -2)]));
    assert_eq!(cit.conditions, set(&[(0, -3), (1, -3)]));
    assert_eq!(cit.target_path_parents, set(&[(0, -1), (1, -1)]));
    assert_eq!(cit.path_nodes, set(&[(0, -2), (0, -1), (1, -2), (1, -1)]));
    assert!(cit.removed_edges.is_empty());
}

#[test]
fn cit_without_linked_sources_is_empty() {
    let network = two_variable_network(3);
    let cit = network
        .cit_components(&nodes(&[(0, 0)]), &n(1, -1), DeriveOptions::default())
        .unwrap();
    assert!(cit.is_empty());
    assert!(cit.conditions.is_empty());
}

#[test]
fn bundled_components_follow_the_approximation_level() {
    let network = two_variable_network(3);
    let derive = |level| {
        network
            .bundled_components(&[1], &n(0, 0), 1, level, DeriveOptions::default())
            .unwrap()
    };

    let zeroth = derive(ApproximationLevel::Zeroth);
    assert_eq!(zeroth.immediate_history, set(&[(1, -1)]));
    assert_eq!(zeroth.distant_history, set(&[(1, -2)]));
    assert_eq!(zeroth.target_path_parents, set(&[(1, -1)]));
    assert!(zeroth.remaining.is_empty());

    let first = derive(ApproximationLevel::First);
    assert_eq!(first.remaining, set(&[(0, -1)]));
    assert!(first.approximation.is_empty());

    let second = derive(ApproximationLevel::Second);
    assert_eq!(second.approximation, set(&[(0, -2), (0, -1)]));
    assert_eq!(second.remaining, set(&[(0, -2), (0, -1)]));
}

#[test]
fn bundled_components_covering_every_variable_leave_nothing_remaining() {
    let network = two_variable_network(3);
    let all = network
        .bundled_components(
            &[1, 0, 1],
            &n(0, 0),
            1,
            ApproximationLevel::Second,
            DeriveOptions::transitive(),
        )
        .unwrap();
    assert_eq!(all.immediate_history, set(&[(0, -1), (1, -1)]));
    assert_eq!(all.distant_history, set(&[(0, -2), (1, -2)]));
    assert!(all.remaining.is_empty());
    assert!(all.approximation.is_empty());
}

#[test]
fn bundled_components_with_zero_tau_have_no_history() {
    let network = two_variable_network(3);
    let bundled = network
        .bundled_components(&[1], &n(0, 0), 0, ApproximationLevel::First, DeriveOptions::default())
        .unwrap();
    assert!(bundled.immediate_history.is_empty());
    assert!(bundled.distant_history.is_empty());
    assert_eq!(bundled.remaining, set(&[(0, -1), (1, -1)]));
}

#[test]
fn derivations_report_their_results() {
    let (network, handler) = recorded_network(3);
    network.mit_condition(&n(1, -2), &n(0, 0)).unwrap();
    network
        .mitp_condition(&n(1, -2), &n(0, 0), DeriveOptions::transitive())
        .unwrap();

    let derived = handler.derived.lock().unwrap();
    assert_eq!(derived.len(), 2);
    assert_eq!(derived[0].derivation, Derivation::Mit);
    assert_eq!(derived[0].conditions, 4);
    assert_eq!(derived[1].derivation, Derivation::Mitp);
    assert_eq!(handler.pruned.lock().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Sharing
// ---------------------------------------------------------------------------

#[test]
fn a_network_is_shared_read_only_across_threads() {
    let network = Arc::new(two_variable_network(4));
    let expected = network
        .mitp_condition(&n(1, -3), &n(0, 0), DeriveOptions::transitive())
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let network = Arc::clone(&network);
            std::thread::spawn(move || {
                network
                    .mitp_condition(&n(1, -3), &n(0, 0), DeriveOptions::transitive())
                    .unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn toml_config_drives_network_and_derivations() {
    let config = infonet_core::InfonetConfig::from_toml(
        r#"
        [network]
        taumax = 3
        parallel_closure = false

        [conditions]
        transitive = true
        removed_edges = true
        approximation_level = 2
        "#,
    )
    .unwrap();
    let network = CausalNetwork::with_config(two_variable_declaration(), None, &config.network)
        .unwrap()
        .with_handler(Arc::new(NoopHandler));
    let options = DeriveOptions::from(&config.conditions);
    assert_eq!(options, DeriveOptions::transitive().with_removed_edges());

    let bundled = network
        .bundled_components(&[1], &n(0, 0), 1, config.conditions.approximation_level, options)
        .unwrap();
    assert_eq!(bundled.distant_history, set(&[(1, -2)]));
    assert!(bundled.remaining.contains(&n(0, -1)));
}
