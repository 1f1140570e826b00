//! NetworkEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Sink for network diagnostics.
///
/// Handlers only override the events they care about. `Send + Sync` so one handler can serve
/// a network shared across threads.
pub trait NetworkEventHandler: Send + Sync {
    fn on_path_missing(&self, _event: &PathMissingEvent) {}
    fn on_source_dropped(&self, _event: &SourceDroppedEvent) {}
    fn on_conditions_derived(&self, _event: &ConditionsDerivedEvent) {}
    fn on_edges_pruned(&self, _event: &EdgesPrunedEvent) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl NetworkEventHandler for NoopHandler {}
