//! OpenAI-compatible local server (Ollama, llama.cpp, LM Studio, vLLM).

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::debug;

use relaygen_core::config::ProviderConfig;
use relaygen_core::types::{ChatCompletionRequest, ChatCompletionResponse, GenerationRequest};

use crate::error::ProviderError;
use crate::http::{post_json, require_text};
use crate::traits::{ProviderKind, TextProvider};

/// Sampling temperature sent to chat-completion backends.
pub const CHAT_TEMPERATURE: f64 = 0.7;

/// Local LLM reached over the chat completions API, no authentication.
#[derive(Debug, Clone)]
pub struct LocalLlmProvider {
    client: reqwest::Client,
    endpoint_url: String,
}

impl LocalLlmProvider {
    pub fn new(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
        }
    }
}

#[async_trait]
impl TextProvider for LocalLlmProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: request.model.clone(),
            messages: request.chat_messages(),
            max_tokens: None,
            temperature: CHAT_TEMPERATURE,
        };

        debug!(url = %self.endpoint_url, model = %body.model, "Calling local LLM");

        let response: ChatCompletionResponse =
            post_json(&self.client, &self.endpoint_url, HeaderMap::new(), &body).await?;
        require_text(response.into_text())
    }
}
