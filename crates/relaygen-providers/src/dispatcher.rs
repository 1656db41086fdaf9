//! Fallback dispatcher — tries each configured provider in priority order.
//!
//! Order: Python backend → local LLM → RapidAPI → configuration help text.
//! The first provider that returns text wins; the rest are never called.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use relaygen_core::config::DispatcherConfig;
use relaygen_core::types::GenerationRequest;

use crate::error::ProviderError;
use crate::http::build_client;
use crate::local_llm::LocalLlmProvider;
use crate::messages::{configuration_help, placeholder_response, python_backend_error};
use crate::python_backend::PythonBackendProvider;
use crate::rapidapi::RapidApiProvider;
use crate::traits::{ProviderKind, TextProvider};

/// Model sent whenever the local or Python path is active.
pub const LOCAL_MODEL: &str = "llama3";

/// What a provider failure means for the rest of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FailurePolicy {
    /// Log and move on to the next provider.
    Continue,
    /// Stop and return the Python backend error text.
    ReportError,
    /// Stop and return the placeholder response after the configured delay.
    Placeholder,
}

/// Walks the provider chain for each request. Stateless between calls.
pub struct ProviderDispatcher {
    config: DispatcherConfig,
    providers: Vec<Arc<dyn TextProvider>>,
}

impl std::fmt::Debug for ProviderDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDispatcher")
            .field("chain", &self.chain())
            .field("use_local", &self.config.use_local())
            .field("use_python", &self.config.use_python())
            .field("has_rapid_key", &self.config.has_rapid_key())
            .finish()
    }
}

impl ProviderDispatcher {
    /// Build the chain from `config`: one shared HTTP client, one provider per
    /// enabled backend.
    pub fn new(config: DispatcherConfig) -> Result<Self, ProviderError> {
        let client = build_client(Duration::from_secs(config.request_timeout_secs))?;

        let mut providers: Vec<Arc<dyn TextProvider>> = Vec::new();
        if config.use_python() {
            providers.push(Arc::new(PythonBackendProvider::new(
                client.clone(),
                &config.python,
            )));
        }
        if config.use_local() {
            providers.push(Arc::new(LocalLlmProvider::new(client.clone(), &config.local)));
        }
        if config.has_rapid_key() {
            providers.push(Arc::new(RapidApiProvider::new(client, &config.rapid)));
        }

        debug!(chain = ?providers.iter().map(|p| p.kind()).collect::<Vec<_>>(), "Dispatcher ready");

        Ok(Self { config, providers })
    }

    /// Use an explicit provider chain. Failure handling still follows `config`'s flags.
    pub fn with_providers(config: DispatcherConfig, providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self { config, providers }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Provider kinds in the order they will be tried.
    pub fn chain(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Model actually sent: forced to [`LOCAL_MODEL`] when the local or Python path is on.
    pub fn resolve_model(&self, requested: &str) -> String {
        if self.config.use_local() || self.config.use_python() {
            LOCAL_MODEL.to_string()
        } else {
            requested.to_string()
        }
    }

    /// Generate a completion. Always returns a non-empty string; failures
    /// become a fallback attempt or diagnostic text.
    pub async fn generate(&self, model: &str, system_prompt: &str, user_message: &str) -> String {
        self.generate_request(&GenerationRequest::new(model, system_prompt, user_message))
            .await
    }

    /// Same as [`generate`](Self::generate), taking the request struct.
    pub async fn generate_request(&self, request: &GenerationRequest) -> String {
        let request = GenerationRequest {
            model: self.resolve_model(&request.model),
            ..request.clone()
        };

        for provider in &self.providers {
            let name = provider.display_name();
            info!(provider = name, model = %request.model, "Attempting generation");

            let err = match provider.try_generate(&request).await {
                Ok(text) => {
                    info!(provider = name, chars = text.chars().count(), "Generation succeeded");
                    return text;
                }
                Err(e) => e,
            };

            match self.failure_policy(provider.kind()) {
                FailurePolicy::Continue => {
                    warn!(provider = name, error = %err, "Provider failed, trying next");
                }
                FailurePolicy::ReportError => {
                    error!(provider = name, error = %err, "Python backend failed, no fallback configured");
                    return python_backend_error(&self.config.python.endpoint_url, &err);
                }
                FailurePolicy::Placeholder => {
                    error!(
                        provider = name,
                        error = %err,
                        "Local LLM failed, no fallback configured; returning placeholder"
                    );
                    return placeholder_response(Duration::from_millis(
                        self.config.placeholder_delay_ms,
                    ))
                    .await;
                }
            }
        }

        warn!(
            local_url = %self.config.local.endpoint_url,
            use_local = self.config.use_local(),
            use_python = self.config.use_python(),
            has_rapid_key = self.config.has_rapid_key(),
            "No provider produced a response"
        );
        configuration_help(&self.config)
    }

    fn failure_policy(&self, kind: ProviderKind) -> FailurePolicy {
        let has_key = self.config.has_rapid_key();
        match kind {
            ProviderKind::Python if !self.config.use_local() && !has_key => {
                FailurePolicy::ReportError
            }
            ProviderKind::Local if !has_key && !self.config.use_python() => {
                FailurePolicy::Placeholder
            }
            _ => FailurePolicy::Continue,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
