//! # infonet-causal
//!
//! The conditioning engine. Unrolls a lagged causal declaration into a stationary
//! directed graph (`petgraph`), answers parent/child/path queries over it, and derives
//! the node sets that condition MIT, MITP, MPID and cumulative transfer estimates,
//! optionally pruned by a weighted transitive reduction.

pub mod conditions;
pub mod graph;
pub mod links;
pub mod network;
pub mod queries;
pub mod reduction;

pub use conditions::{
    BundledComponents, CitComponents, DeriveOptions, MpidConditions, MpidSetConditions, MpidTerms,
};
pub use graph::{LaggedGraph, WeightMatrix};
pub use network::CausalNetwork;
pub use queries::IdSet;
pub use reduction::{NodeReduction, Reduction};
