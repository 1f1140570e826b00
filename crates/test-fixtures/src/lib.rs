//! Golden causal-network scenarios shared by the workspace tests.
//!
//! Each scenario is one JSON file under `golden/causal/<name>.json` holding a `declaration`
//! (parents per variable as `[var, lag]` pairs), a `taumax`, optional `lag_weights`, and the
//! expected query and condition results for that network.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const CAUSAL_DIR: &str = "golden/causal";

/// `golden/causal` inside this crate, resolved at compile time.
pub fn causal_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(CAUSAL_DIR)
}

fn scenario_path(name: &str) -> PathBuf {
    causal_dir().join(format!("{name}.json"))
}

/// Deserialize scenario `name` into `T`. Panics on a missing or malformed file.
pub fn load_scenario<T: DeserializeOwned>(name: &str) -> T {
    let path = scenario_path(name);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read scenario {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("scenario {} is not valid: {e}", path.display()))
}

/// Scenario `name` as untyped JSON, for tests that only read a few expectation keys.
pub fn scenario_value(name: &str) -> serde_json::Value {
    load_scenario(name)
}

pub fn scenario_exists(name: &str) -> bool {
    scenario_path(name).is_file()
}

/// Names of every scenario on disk, sorted.
pub fn scenario_names() -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(causal_dir()) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension()? != "json" {
                return None;
            }
            Some(path.file_stem()?.to_str()?.to_owned())
        })
        .collect();
    names.sort();
    names
}
