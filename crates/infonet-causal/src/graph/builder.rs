//! Unroll a causal declaration into a stationary lagged graph.
//!
//! Every variable's declared parents are replicated at each layer `0..=taumax`. A parent
//! that would land beyond the horizon is dropped rather than inserted.

use petgraph::algo::is_cyclic_directed;
use tracing::{debug, instrument};

use infonet_core::errors::GraphError;
use infonet_core::models::{CausalDeclaration, LagWeights, NodeId};
use infonet_core::NodeCodec;

use super::lagged_graph::{ix, LagDiGraph, LaggedGraph};
use super::weights::WeightMatrix;

/// Build the unrolled graph. Missing `lag_weights` means uniform 1.0 couplings.
#[instrument(skip(declaration, lag_weights), fields(nvar = declaration.nvar()))]
pub fn build(
    declaration: &CausalDeclaration,
    lag_weights: Option<&LagWeights>,
    taumax: usize,
) -> Result<LaggedGraph, GraphError> {
    let nvar = declaration.nvar();
    let codec = NodeCodec::new(nvar, taumax);
    let nnodes = codec.nnodes();

    let lag_weights = match lag_weights {
        Some(weights) => {
            weights.check_shape(nvar, taumax)?;
            weights.clone()
        }
        None => LagWeights::uniform(nvar, taumax),
    };
    let min = lag_weights.min();
    let offset = if min < 0.0 { min } else { 0.0 };
    let lag_weights = lag_weights.shifted(offset);

    let mut graph = LagDiGraph::with_capacity(nnodes, nnodes);
    for index in 0..nnodes {
        graph.add_node(codec.node_at(NodeId::new(index)));
    }

    let mut truncated = 0_usize;
    for layer in 0..=taumax {
        for (var, parents) in declaration.iter() {
            let Some(child) = codec.layer_id(var, layer) else {
                continue;
            };
            for parent in parents {
                let start = layer
                    .checked_add(parent.depth())
                    .and_then(|depth| codec.layer_id(parent.var, depth));
                match start {
                    Some(start) => {
                        let weight = lag_weights.get(parent.var, var, parent.depth());
                        graph.update_edge(ix(start), ix(child), weight);
                    }
                    None => truncated += 1,
                }
            }
        }
    }

    let mut weights = WeightMatrix::zeros(nnodes);
    for edge in graph.raw_edges() {
        weights.set(edge.source().index(), edge.target().index(), edge.weight);
    }
    let acyclic = !is_cyclic_directed(&graph);

    debug!(
        nnodes,
        edges = graph.edge_count(),
        truncated,
        offset,
        acyclic,
        "lagged graph built"
    );

    Ok(LaggedGraph {
        graph,
        codec,
        weights,
        offset,
        acyclic,
    })
}
