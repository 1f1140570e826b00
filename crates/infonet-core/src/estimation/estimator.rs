use super::request::EstimationRequest;

/// An information-measure estimator (KDE, k-NN, ...) living outside this workspace.
///
/// `data` holds one row per sample and one column per node in `request.columns()`.
pub trait InformationEstimator {
    type Output;
    type Error: std::error::Error;

    fn estimate(
        &self,
        request: &EstimationRequest,
        data: &[Vec<f64>],
    ) -> Result<Self::Output, Self::Error>;
}
