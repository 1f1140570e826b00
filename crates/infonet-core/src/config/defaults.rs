// Single source of truth for all default values.

// --- Network ---
pub const DEFAULT_TAUMAX: usize = 6;
pub const DEFAULT_PARALLEL_CLOSURE: bool = true;

// --- Conditions ---
pub const DEFAULT_TRANSITIVE: bool = false;
pub const DEFAULT_REMOVED_EDGES: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const LOG_ENV_VAR: &str = "INFONET_LOG";
