//! # infonet-core
//!
//! Foundation crate for lagged causal networks.
//! Defines the node value type and its codec, the causal declaration and lag-weight
//! models, errors, config, diagnostic events, and the estimator hand-off interface.
//! Every other crate in the workspace depends on this.

pub mod codec;
pub mod config;
pub mod errors;
pub mod estimation;
pub mod events;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use codec::NodeCodec;
pub use config::InfonetConfig;
pub use errors::{InfonetError, InfonetResult};
pub use events::{NetworkEventHandler, NoopHandler, TracingHandler};
pub use models::{CausalDeclaration, ConditionSet, LagWeights, LinkKind, Node, NodeId};
