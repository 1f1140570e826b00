use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// How much of the non-source history the bundled components condition on.
///
/// Higher levels condition on more nodes at the cost of a higher-dimensional estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ApproximationLevel {
    /// No conditions outside the source variables.
    Zeroth,
    /// Remaining parents of the target.
    First,
    /// Remaining parents of the target, plus parents of the distant history and of the
    /// target's on-path parents.
    Second,
}

impl TryFrom<u8> for ApproximationLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::Zeroth),
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(ConfigError::InvalidValue {
                field: "approximation_level".to_string(),
                message: format!("expected 0, 1 or 2, got {other}"),
            }),
        }
    }
}

impl From<ApproximationLevel> for u8 {
    fn from(level: ApproximationLevel) -> Self {
        match level {
            ApproximationLevel::Zeroth => 0,
            ApproximationLevel::First => 1,
            ApproximationLevel::Second => 2,
        }
    }
}

impl fmt::Display for ApproximationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Defaults for condition-set derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionConfig {
    /// Prune derived sets with the weighted transitive reduction.
    pub transitive: bool,
    /// Report the edges the reduction found dominated.
    pub removed_edges: bool,
    /// Default level for bundled components.
    pub approximation_level: ApproximationLevel,
}

impl Default for ConditionConfig {
    fn default() -> Self {
        Self {
            transitive: defaults::DEFAULT_TRANSITIVE,
            removed_edges: defaults::DEFAULT_REMOVED_EDGES,
            approximation_level: ApproximationLevel::First,
        }
    }
}
