//! Configuration schema — one explicit struct handed to the dispatcher.
//!
//! Hierarchy: `DispatcherConfig` → `ProviderConfig` per provider kind
//! (`python`, `local`, `rapid`).
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};

/// Default OpenAI-compatible endpoint for the local LLM (Ollama's port).
pub const DEFAULT_LOCAL_LLM_URL: &str = "http://localhost:11434/v1/chat/completions";

/// Default endpoint of the Python generation server.
pub const DEFAULT_PYTHON_SERVER_URL: &str = "http://localhost:5001/generate";

/// Per-request timeout used when none (or zero) is configured.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// RapidAPI host header value.
pub const RAPIDAPI_HOST: &str =
    "cheapest-gpt-4-turbo-gpt-4-vision-chatgpt-openai-ai-api.p.rapidapi.com";

/// RapidAPI chat completions endpoint.
pub const RAPIDAPI_URL: &str =
    "https://cheapest-gpt-4-turbo-gpt-4-vision-chatgpt-openai-ai-api.p.rapidapi.com/v1/chat/completions";

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.relaygen/config.json` + env vars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DispatcherConfig {
    /// Python generation server (`USE_PYTHON_BACKEND`, `PYTHON_SERVER_URL`).
    pub python: ProviderConfig,
    /// OpenAI-compatible local server (`USE_LOCAL_LLM`, `LOCAL_LLM_URL`).
    pub local: ProviderConfig,
    /// RapidAPI gateway (`RAPIDAPI_KEY`). Gated by the credential alone;
    /// `enabled` is ignored.
    pub rapid: ProviderConfig,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Artificial delay before the placeholder response, in milliseconds.
    pub placeholder_delay_ms: u64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            python: ProviderConfig::disabled(DEFAULT_PYTHON_SERVER_URL),
            local: ProviderConfig::disabled(DEFAULT_LOCAL_LLM_URL),
            rapid: ProviderConfig::disabled(RAPIDAPI_URL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            placeholder_delay_ms: 1500,
        }
    }
}

impl DispatcherConfig {
    /// Whether the Python backend path is switched on.
    pub fn use_python(&self) -> bool {
        self.python.enabled
    }

    /// Whether the local LLM path is switched on.
    pub fn use_local(&self) -> bool {
        self.local.enabled
    }

    /// Whether a RapidAPI key is present.
    pub fn has_rapid_key(&self) -> bool {
        self.rapid.has_credential()
    }

    /// Restore defaults for blank endpoints and a zero timeout.
    pub fn fill_defaults(mut self) -> Self {
        if self.request_timeout_secs == 0 {
            self.request_timeout_secs = DEFAULT_REQUEST_TIMEOUT_SECS;
        }
        for (provider, default_url) in [
            (&mut self.python, DEFAULT_PYTHON_SERVER_URL),
            (&mut self.local, DEFAULT_LOCAL_LLM_URL),
            (&mut self.rapid, RAPIDAPI_URL),
        ] {
            if provider.endpoint_url.trim().is_empty() {
                provider.endpoint_url = default_url.to_string();
            }
        }
        self
    }
}

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// Configuration for a single provider (flag, URL, optional credential).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// Whether this provider takes part in the fallback chain.
    pub enabled: bool,
    /// Full URL the request is POSTed to.
    pub endpoint_url: String,
    /// API key, if the provider needs one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

impl ProviderConfig {
    fn disabled(endpoint_url: &str) -> Self {
        Self {
            enabled: false,
            endpoint_url: endpoint_url.to_string(),
            credential: None,
        }
    }

    /// Whether a non-empty credential is set.
    pub fn has_credential(&self) -> bool {
        self.credential.as_deref().is_some_and(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_everything() {
        let config = DispatcherConfig::default();
        assert!(!config.use_python());
        assert!(!config.use_local());
        assert!(!config.has_rapid_key());
        assert_eq!(config.local.endpoint_url, DEFAULT_LOCAL_LLM_URL);
        assert_eq!(config.python.endpoint_url, DEFAULT_PYTHON_SERVER_URL);
    }

    #[test]
    fn empty_credential_counts_as_absent() {
        let mut config = DispatcherConfig::default();
        config.rapid.credential = Some(String::new());
        assert!(!config.has_rapid_key());

        config.rapid.credential = Some("rk-123".into());
        assert!(config.has_rapid_key());
    }

    #[test]
    fn partial_provider_gets_default_endpoint() {
        let config: DispatcherConfig =
            serde_json::from_str(r#"{ "python": { "enabled": true } }"#).unwrap();
        assert!(config.python.endpoint_url.is_empty());

        let config = config.fill_defaults();
        assert_eq!(config.python.endpoint_url, DEFAULT_PYTHON_SERVER_URL);
        assert!(config.use_python());
    }

    #[test]
    fn zero_timeout_gets_default() {
        let config: DispatcherConfig =
            serde_json::from_str(r#"{ "requestTimeoutSecs": 0 }"#).unwrap();
        assert_eq!(config.request_timeout_secs, 0);
        assert_eq!(
            config.fill_defaults().request_timeout_secs,
            DEFAULT_REQUEST_TIMEOUT_SECS
        );
    }

    #[test]
    fn camel_case_keys() {
        let json = serde_json::to_value(DispatcherConfig::default()).unwrap();
        assert!(json.get("requestTimeoutSecs").is_some());
        assert!(json["local"].get("endpointUrl").is_some());
        assert!(json["rapid"].get("credential").is_none());
    }
}
