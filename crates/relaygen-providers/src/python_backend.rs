//! Python generation server: `POST {prompt, system_prompt}` → `{text}`.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::debug;

use relaygen_core::config::ProviderConfig;
use relaygen_core::types::{GenerationRequest, PythonGenerateRequest, PythonGenerateResponse};

use crate::error::ProviderError;
use crate::http::{post_json, require_text};
use crate::traits::{ProviderKind, TextProvider};

/// Talks to a user-run Python server that wraps its own model.
///
/// The server picks the model, so `GenerationRequest::model` is not sent.
#[derive(Debug, Clone)]
pub struct PythonBackendProvider {
    client: reqwest::Client,
    endpoint_url: String,
}

impl PythonBackendProvider {
    pub fn new(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
        }
    }
}

#[async_trait]
impl TextProvider for PythonBackendProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Python
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let body = PythonGenerateRequest {
            prompt: request.user_message.clone(),
            system_prompt: request.system_prompt.clone(),
        };

        debug!(url = %self.endpoint_url, "Calling Python backend");

        let response: PythonGenerateResponse =
            post_json(&self.client, &self.endpoint_url, HeaderMap::new(), &body).await?;
        require_text(response.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::http::build_client;

    fn provider_for(server: &MockServer) -> PythonBackendProvider {
        let config = ProviderConfig {
            enabled: true,
            endpoint_url: format!("{}/generate", server.uri()),
            credential: None,
        };
        PythonBackendProvider::new(build_client(Duration::from_secs(5)).unwrap(), &config)
    }

    #[tokio::test]
    async fn test_sends_prompt_and_system_prompt() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .and(body_json(serde_json::json!({
                "prompt": "Summarise this",
                "system_prompt": "You are terse."
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "text": "Done." })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let request = GenerationRequest::new("ignored", "You are terse.", "Summarise this");

        assert_eq!(provider.try_generate(&request).await.unwrap(), "Done.");
    }

    #[tokio::test]
    async fn test_missing_text_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "result": "?" })),
            )
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let err = provider
            .try_generate(&GenerationRequest::new("m", "s", "u"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Traceback ..."))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let err = provider
            .try_generate(&GenerationRequest::new("m", "s", "u"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Traceback"));
    }
}
