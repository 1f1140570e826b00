use serde::{Deserialize, Serialize};

use super::defaults;

/// Unrolling and closure settings for a causal network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Maximum lag horizon; the graph holds `taumax + 1` layers.
    pub taumax: usize,
    /// Run the max-min closure across threads.
    pub parallel_closure: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            taumax: defaults::DEFAULT_TAUMAX,
            parallel_closure: defaults::DEFAULT_PARALLEL_CLOSURE,
        }
    }
}
