//! Handler forwarding every event to `tracing`.

use tracing::{debug, info};

use super::handler::NetworkEventHandler;
use super::types::*;

/// Default handler of a network: structured log lines under the `infonet` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl NetworkEventHandler for TracingHandler {
    fn on_path_missing(&self, event: &PathMissingEvent) {
        info!(
            target: "infonet",
            derivation = %event.derivation,
            source = %event.source,
            node_target = %event.target,
            link = %event.link,
            "no causal path between source and target"
        );
    }

    fn on_source_dropped(&self, event: &SourceDroppedEvent) {
        info!(
            target: "infonet",
            derivation = %event.derivation,
            source = %event.source,
            node_target = %event.target,
            "dropping source not linked to target"
        );
    }

    fn on_conditions_derived(&self, event: &ConditionsDerivedEvent) {
        debug!(
            target: "infonet",
            derivation = %event.derivation,
            node_target = %event.target,
            conditions = event.conditions,
            "condition set derived"
        );
    }

    fn on_edges_pruned(&self, event: &EdgesPrunedEvent) {
        debug!(
            target: "infonet",
            candidates = event.candidates,
            retained = event.retained,
            removed_edges = event.removed_edges,
            "transitive reduction applied"
        );
    }
}
