//! Diagnostic events for network queries.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when ignored.

pub mod handler;
pub mod tracing_handler;
pub mod types;

pub use handler::{NetworkEventHandler, NoopHandler};
pub use tracing_handler::TracingHandler;
pub use types::*;
