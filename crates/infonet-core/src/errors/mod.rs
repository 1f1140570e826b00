//! Error types. One enum per concern, wrapped by [`InfonetError`].

mod config_error;
mod graph_error;
mod layout_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use layout_error::LayoutError;

/// Top-level error for every public entry point of the workspace.
#[derive(Debug, thiserror::Error)]
pub enum InfonetError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type InfonetResult<T> = Result<T, InfonetError>;
