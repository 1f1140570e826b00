//! Weighted transitive reduction.
//!
//! A direct edge `i → j` is dominated when some indirect route carries a strictly stronger
//! bottleneck weight than the edge itself. A candidate conditioning node is kept only if at
//! least one of its edges into the reference set survives.

pub mod closure;
pub mod transitive;

pub use closure::max_min_closure;
pub use transitive::{reduce, NodeReduction, Reduction};
