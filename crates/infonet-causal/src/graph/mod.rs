//! The time-unrolled graph: builder, petgraph wrapper, dense weight matrix.

pub mod builder;
pub mod lagged_graph;
pub mod weights;

pub use builder::build;
pub use lagged_graph::{LagDiGraph, LaggedGraph};
pub use weights::WeightMatrix;
