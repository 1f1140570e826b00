//! CausalNetwork: owns the unrolled graph, validates node inputs, and coordinates queries,
//! derivations, and reductions.

use std::sync::{Arc, OnceLock};

use infonet_core::config::{ApproximationLevel, NetworkConfig};
use infonet_core::errors::InfonetResult;
use infonet_core::events::{Derivation, EdgesPrunedEvent, NetworkEventHandler, PathMissingEvent};
use infonet_core::models::{CausalDeclaration, ConditionSet, LagWeights, LinkKind, Node, NodeId};
use infonet_core::{NodeCodec, TracingHandler};

use crate::conditions::{
    self, BundledComponents, CitComponents, DeriveOptions, MpidConditions, MpidSetConditions,
};
use crate::graph::{self, LaggedGraph, WeightMatrix};
use crate::links;
use crate::queries::{self, IdSet};
use crate::reduction::{self, NodeReduction, Reduction};

/// A lagged causal network, built once and read-only afterwards.
///
/// Every query takes `&self` and works on fresh local sets, so one network can be shared
/// across threads (`Arc<CausalNetwork>`) without locking.
pub struct CausalNetwork {
    graph: LaggedGraph,
    declaration: CausalDeclaration,
    original_lag_weights: LagWeights,
    config: NetworkConfig,
    closure: OnceLock<WeightMatrix>,
    handler: Arc<dyn NetworkEventHandler>,
}

impl CausalNetwork {
    /// Build a network with default settings and the given horizon.
    pub fn new(
        declaration: CausalDeclaration,
        lag_weights: Option<LagWeights>,
        taumax: usize,
    ) -> InfonetResult<Self> {
        let config = NetworkConfig {
            taumax,
            ..NetworkConfig::default()
        };
        Self::with_config(declaration, lag_weights, &config)
    }

    /// Build a network from a config section.
    pub fn with_config(
        declaration: CausalDeclaration,
        lag_weights: Option<LagWeights>,
        config: &NetworkConfig,
    ) -> InfonetResult<Self> {
        let original_lag_weights = match lag_weights {
            Some(weights) => weights,
            None => LagWeights::uniform(declaration.nvar(), config.taumax),
        };
        let graph = graph::build(&declaration, Some(&original_lag_weights), config.taumax)?;
        Ok(Self {
            graph,
            declaration,
            original_lag_weights,
            config: config.clone(),
            closure: OnceLock::new(),
            handler: Arc::new(TracingHandler),
        })
    }

    /// Replace the diagnostic handler (defaults to [`TracingHandler`]).
    pub fn with_handler(mut self, handler: Arc<dyn NetworkEventHandler>) -> Self {
        self.handler = handler;
        self
    }

    // --- Accessors ---

    pub fn graph(&self) -> &LaggedGraph {
        &self.graph
    }

    pub fn codec(&self) -> &NodeCodec {
        self.graph.codec()
    }

    pub fn declaration(&self) -> &CausalDeclaration {
        &self.declaration
    }

    /// The lag weights as supplied, before the non-negativity shift.
    pub fn original_lag_weights(&self) -> &LagWeights {
        &self.original_lag_weights
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn nvar(&self) -> usize {
        self.codec().nvar()
    }

    pub fn taumax(&self) -> usize {
        self.codec().taumax()
    }

    pub fn nnodes(&self) -> usize {
        self.codec().nnodes()
    }

    pub fn offset(&self) -> f64 {
        self.graph.offset()
    }

    /// Max-min closure of the weight matrix, computed on first use.
    pub fn closure(&self) -> &WeightMatrix {
        self.closure.get_or_init(|| {
            reduction::max_min_closure(self.graph.weights(), self.config.parallel_closure)
        })
    }

    // --- Node queries ---

    /// Direct parents of `node`.
    pub fn search_parents(&self, node: &Node) -> InfonetResult<Vec<Node>> {
        self.parents_of(std::slice::from_ref(node))
    }

    /// Direct children of `node`.
    pub fn search_children(&self, node: &Node) -> InfonetResult<Vec<Node>> {
        self.children_of(std::slice::from_ref(node))
    }

    /// Parents of a node set, excluding its members.
    pub fn parents_of(&self, nodes: &[Node]) -> InfonetResult<Vec<Node>> {
        let ids = self.encode_set(nodes)?;
        Ok(self.decode(&queries::parents_of(&self.graph, &ids)))
    }

    /// Children of a node set, excluding its members.
    pub fn children_of(&self, nodes: &[Node]) -> InfonetResult<Vec<Node>> {
        let ids = self.encode_set(nodes)?;
        Ok(self.decode(&queries::children_of(&self.graph, &ids)))
    }

    /// Every simple path from `source` to `target`, target included.
    pub fn search_causal_paths(&self, source: &Node, target: &Node) -> InfonetResult<Vec<Vec<Node>>> {
        let (s, t) = (self.encode(source)?, self.encode(target)?);
        Ok(queries::simple_paths(&self.graph, s, t)
            .into_iter()
            .map(|path| self.codec().decode_all(path))
            .collect())
    }

    /// Deduplicated non-target nodes on any path from `source` to `target`.
    pub fn search_causal_path_nodes(&self, source: &Node, target: &Node) -> InfonetResult<Vec<Node>> {
        let (s, t) = (self.encode(source)?, self.encode(target)?);
        Ok(self.decode(&queries::causal_path_nodes(&self.graph, s, t)))
    }

    /// `(parents of the path nodes, path nodes)` between `source` and `target`.
    pub fn path_and_parents(
        &self,
        source: &Node,
        target: &Node,
    ) -> InfonetResult<(Vec<Node>, Vec<Node>)> {
        let (s, t) = (self.encode(source)?, self.encode(target)?);
        let found = queries::path_and_parents(&self.graph, s, t);
        Ok((self.decode(&found.parents), self.decode(&found.path)))
    }

    /// Classify the link from `source` to `target`, reporting unlinked pairs to the handler.
    pub fn check_links(&self, source: &Node, target: &Node) -> InfonetResult<LinkKind> {
        let (s, t) = (self.encode(source)?, self.encode(target)?);
        let link = links::classify(&self.graph, s, t);
        if link == LinkKind::Unlinked {
            self.handler.on_path_missing(&PathMissingEvent {
                derivation: Derivation::Links,
                source: *source,
                target: *target,
                link,
            });
        }
        Ok(link)
    }

    // --- Condition sets ---

    /// Conditions for the momentary information transfer from `source` to `target`.
    pub fn mit_condition(&self, source: &Node, target: &Node) -> InfonetResult<ConditionSet> {
        conditions::mit::derive(self, source, target)
    }

    /// MIT conditions restricted to the causal paths from `source` to `target`.
    pub fn mitp_condition(
        &self,
        source: &Node,
        target: &Node,
        options: DeriveOptions,
    ) -> InfonetResult<ConditionSet> {
        conditions::mitp::derive(self, source, target, options)
    }

    /// Conditions for the partial information decomposition of two sources onto `target`.
    pub fn mpid_condition(
        &self,
        source1: &Node,
        source2: &Node,
        target: &Node,
        options: DeriveOptions,
    ) -> InfonetResult<MpidConditions> {
        conditions::mpid::derive(self, source1, source2, target, options)
    }

    /// MPID conditions for two sets of sources.
    pub fn mpid_set_condition(
        &self,
        sources1: &[Node],
        sources2: &[Node],
        target: &Node,
        options: DeriveOptions,
    ) -> InfonetResult<MpidSetConditions> {
        conditions::mpid::derive_sets(self, sources1, sources2, target, options)
    }

    /// Components of the cumulative information transfer from `sources` to `target`.
    pub fn cit_components(
        &self,
        sources: &[Node],
        target: &Node,
        options: DeriveOptions,
    ) -> InfonetResult<CitComponents> {
        conditions::cit::derive(self, sources, target, options)
    }

    /// Components of the transfer from a bundle of source variables, split at lag `tau`.
    pub fn bundled_components(
        &self,
        source_vars: &[usize],
        target: &Node,
        tau: usize,
        level: ApproximationLevel,
        options: DeriveOptions,
    ) -> InfonetResult<BundledComponents> {
        conditions::bundled::derive(self, source_vars, target, tau, level, options)
    }

    /// Weighted transitive reduction of `candidates` against `reference`.
    pub fn transitive_reduction(
        &self,
        candidates: &[Node],
        reference: &[Node],
    ) -> InfonetResult<NodeReduction> {
        let v1 = self.encode_set(candidates)?;
        let v2 = self.encode_set(reference)?;
        let reduced = self.reduce(&v1, &v2);
        Ok(NodeReduction {
            retained: self.decode(&reduced.retained),
            removed_edges: self.decode_edges(&reduced.removed_edges),
        })
    }

    // --- Crate-internal helpers ---

    pub(crate) fn handler(&self) -> &dyn NetworkEventHandler {
        self.handler.as_ref()
    }

    pub(crate) fn encode(&self, node: &Node) -> InfonetResult<NodeId> {
        Ok(self.codec().encode(node)?)
    }

    pub(crate) fn encode_set(&self, nodes: &[Node]) -> InfonetResult<IdSet> {
        nodes.iter().map(|n| self.encode(n)).collect()
    }

    /// Decode into nodes sorted by `(var, lag)`, the order of [`ConditionSet`].
    pub(crate) fn decode(&self, ids: &IdSet) -> Vec<Node> {
        let mut nodes = self.codec().decode_all(ids.iter().copied());
        nodes.sort_unstable();
        nodes
    }

    pub(crate) fn conditions(&self, ids: &IdSet) -> ConditionSet {
        ids.iter().map(|&id| self.codec().node_at(id)).collect()
    }

    pub(crate) fn decode_edges(&self, edges: &[(NodeId, NodeId)]) -> Vec<(Node, Node)> {
        edges
            .iter()
            .map(|&(a, b)| (self.codec().node_at(a), self.codec().node_at(b)))
            .collect()
    }

    /// Reduce against the cached closure and report the outcome.
    pub(crate) fn reduce(&self, candidates: &IdSet, reference: &IdSet) -> Reduction {
        let reduced = reduction::reduce(&self.graph, self.closure(), candidates, reference);
        self.handler.on_edges_pruned(&EdgesPrunedEvent {
            candidates: candidates.len(),
            retained: reduced.retained.len(),
            removed_edges: reduced.removed_edges.len(),
        });
        reduced
    }

    /// Reduce `candidates` against their children inside `scope`, when requested.
    pub(crate) fn prune(&self, candidates: IdSet, scope: &IdSet, options: DeriveOptions) -> Reduction {
        if !options.transitive {
            return Reduction {
                retained: candidates,
                removed_edges: Vec::new(),
            };
        }
        let reference: IdSet = queries::children_of(&self.graph, &candidates)
            .intersection(scope)
            .copied()
            .collect();
        self.reduce(&candidates, &reference)
    }
}

impl std::fmt::Debug for CausalNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CausalNetwork")
            .field("nvar", &self.nvar())
            .field("taumax", &self.taumax())
            .field("edges", &self.graph.edge_count())
            .field("offset", &self.offset())
            .finish_non_exhaustive()
    }
}
