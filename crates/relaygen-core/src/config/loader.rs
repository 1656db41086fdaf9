//! Config loader — reads `~/.relaygen/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `DispatcherConfig::default()`)
//! 2. JSON file at `~/.relaygen/config.json` (or an explicit path)
//! 3. Environment variables (override JSON)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::DispatcherConfig;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path (or `path`) + env vars.
///
/// Falls back to `DispatcherConfig::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> DispatcherConfig {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    apply_env_overrides(load_config_from_path(&config_path))
}

/// Load config from a specific file path, without env overrides.
fn load_config_from_path(path: &Path) -> DispatcherConfig {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return DispatcherConfig::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return DispatcherConfig::default();
        }
    };

    match serde_json::from_str::<DispatcherConfig>(&content) {
        Ok(c) => c.fill_defaults(),
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            DispatcherConfig::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &DispatcherConfig, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Supported variables:
/// - `USE_PYTHON_BACKEND` (`"true"` enables) → `python.enabled`
/// - `PYTHON_SERVER_URL` → `python.endpoint_url`
/// - `USE_LOCAL_LLM` (`"true"` enables) → `local.enabled`
/// - `LOCAL_LLM_URL` → `local.endpoint_url`
/// - `RAPIDAPI_KEY` → `rapid.credential`
/// - `RELAYGEN_REQUEST_TIMEOUT_SECS` → `request_timeout_secs`
/// - `RELAYGEN_PLACEHOLDER_DELAY_MS` → `placeholder_delay_ms`
pub fn apply_env_overrides(config: DispatcherConfig) -> DispatcherConfig {
    apply_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable lookup.
///
/// Empty URLs and a zero timeout fall back to the defaults.
fn apply_overrides_from<F>(mut config: DispatcherConfig, lookup: F) -> DispatcherConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("USE_PYTHON_BACKEND") {
        config.python.enabled = val == "true";
    }
    if let Some(val) = lookup("PYTHON_SERVER_URL") {
        config.python.endpoint_url = val;
    }
    if let Some(val) = lookup("USE_LOCAL_LLM") {
        config.local.enabled = val == "true";
    }
    if let Some(val) = lookup("LOCAL_LLM_URL") {
        config.local.endpoint_url = val;
    }
    if let Some(val) = lookup("RAPIDAPI_KEY") {
        config.rapid.credential = Some(val);
    }

    if let Some(val) = lookup("RELAYGEN_REQUEST_TIMEOUT_SECS") {
        match val.parse::<u64>() {
            Ok(n) if n > 0 => config.request_timeout_secs = n,
            _ => warn!("Ignoring invalid RELAYGEN_REQUEST_TIMEOUT_SECS: {}", val),
        }
    }
    if let Some(val) = lookup("RELAYGEN_PLACEHOLDER_DELAY_MS") {
        match val.parse::<u64>() {
            Ok(n) => config.placeholder_delay_ms = n,
            Err(_) => warn!("Ignoring invalid RELAYGEN_PLACEHOLDER_DELAY_MS: {}", val),
        }
    }

    config.fill_defaults()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
