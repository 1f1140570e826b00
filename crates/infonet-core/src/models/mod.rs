//! Value types shared by every layer: nodes, declarations, weights, condition sets.

pub mod condition_set;
pub mod declaration;
pub mod lag_weights;
pub mod link;
pub mod node;

pub use condition_set::ConditionSet;
pub use declaration::CausalDeclaration;
pub use lag_weights::LagWeights;
pub use link::LinkKind;
pub use node::{Node, NodeId};
