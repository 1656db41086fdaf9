//! Text returned to the caller when no provider produced a completion.

use std::fmt::Display;
use std::time::Duration;

use relaygen_core::config::DispatcherConfig;

/// Returned when the local LLM is the only configured provider and it failed.
pub const PLACEHOLDER_RESPONSE: &str = "**[Mock Response]**

The local LLM could not be reached, so this is a placeholder response instead of generated content.

To get real output:
- Start your local model server (for example `ollama serve`) and check LOCAL_LLM_URL
- Or set RAPIDAPI_KEY to use the hosted fallback";

/// Wait `delay`, then hand back [`PLACEHOLDER_RESPONSE`].
///
/// Uses tokio's clock, so paused-time tests observe the delay without waiting.
pub async fn placeholder_response(delay: Duration) -> String {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    PLACEHOLDER_RESPONSE.to_string()
}

/// Terminal message when the Python backend fails and nothing else is configured.
pub fn python_backend_error(endpoint_url: &str, error: &impl Display) -> String {
    format!(
        "**Python Backend Error**

Could not get a response from the Python server at {endpoint_url}.

Error: {error}

Make sure the Python server is running and reachable, or set USE_LOCAL_LLM=true or RAPIDAPI_KEY to enable a fallback provider."
    )
}

/// Help text returned when every applicable provider was skipped or failed.
pub fn configuration_help(config: &DispatcherConfig) -> String {
    let key_status = if config.has_rapid_key() {
        "found"
    } else {
        "not found"
    };

    format!(
        "**AI Provider Not Available**

None of the configured providers returned a response. Configure at least one of:

1. Python backend: set USE_PYTHON_BACKEND=true and run the server at PYTHON_SERVER_URL
2. Local LLM: set USE_LOCAL_LLM=true and point LOCAL_LLM_URL at an OpenAI-compatible server (e.g. Ollama)
3. RapidAPI: set RAPIDAPI_KEY to a valid key

Current settings:
- LOCAL_LLM_URL: {local_url}
- USE_LOCAL_LLM: {use_local}
- USE_PYTHON_BACKEND: {use_python}
- RAPIDAPI_KEY: {key_status}",
        local_url = config.local.endpoint_url,
        use_local = config.use_local(),
        use_python = config.use_python(),
    )
}
