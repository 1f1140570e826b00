//! Configuration, loadable from TOML. Every section falls back to [`defaults`].

mod condition_config;
pub mod defaults;
mod network_config;
mod observability_config;

use serde::{Deserialize, Serialize};

pub use condition_config::{ApproximationLevel, ConditionConfig};
pub use network_config::NetworkConfig;
pub use observability_config::ObservabilityConfig;

use crate::errors::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfonetConfig {
    pub network: NetworkConfig,
    pub conditions: ConditionConfig,
    pub observability: ObservabilityConfig,
}

impl InfonetConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.taumax == 0 {
            return Err(ConfigError::InvalidValue {
                field: "network.taumax".to_string(),
                message: "must be a positive lag horizon".to_string(),
            });
        }
        if !matches!(
            self.observability.log_level.as_str(),
            "trace" | "debug" | "info" | "warn" | "error"
        ) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!("unknown level {:?}", self.observability.log_level),
            });
        }
        Ok(())
    }
}
