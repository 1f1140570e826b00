//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::defaults::LOG_ENV_VAR;
use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Install a global `tracing` subscriber.
///
/// `INFONET_LOG` overrides the configured level, e.g. `INFONET_LOG=infonet=debug`.
/// Idempotent, and a no-op if the host application already installed a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);
        let _ = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
