/// Errors raised while validating the block layout handed to an estimator.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("unsupported case {case}: only 1, 2 or 3 variable blocks")]
    UnsupportedCase { case: usize },

    #[error("case {case} (conditioned: {conditioned}) needs {expected} last indices, got {found}")]
    WrongArity {
        case: usize,
        conditioned: bool,
        expected: usize,
        found: usize,
    },

    #[error("last indices {indices:?} must be strictly increasing and start above 0")]
    Unordered { indices: Vec<usize> },

    #[error("layout needs {needed} columns but the data has {ndim}")]
    ExceedsDimension { needed: usize, ndim: usize },

    #[error("block {block} is empty")]
    EmptyBlock { block: usize },
}
