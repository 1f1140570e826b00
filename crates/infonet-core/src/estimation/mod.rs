//! Hand-off to the information estimators that consume derived node sets.
//!
//! The engine never reads time-series values. It supplies an [`EstimationRequest`]: the
//! ordered columns an estimator should assemble from the data, and the [`BlockLayout`]
//! telling it where each variable block ends.

mod estimator;
mod layout;
mod request;

pub use estimator::InformationEstimator;
pub use layout::BlockLayout;
pub use request::EstimationRequest;
