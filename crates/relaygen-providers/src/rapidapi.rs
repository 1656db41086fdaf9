//! RapidAPI-hosted GPT endpoint, authenticated with `x-rapidapi-key`.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use relaygen_core::config::schema::RAPIDAPI_HOST;
use relaygen_core::config::ProviderConfig;
use relaygen_core::types::{ChatCompletionRequest, ChatCompletionResponse, GenerationRequest};

use crate::error::ProviderError;
use crate::http::{post_json, require_text};
use crate::local_llm::CHAT_TEMPERATURE;
use crate::traits::{ProviderKind, TextProvider};

/// Model id always sent to RapidAPI. The caller's model is not forwarded.
pub const RAPIDAPI_MODEL: &str = "gpt-4o";

/// Completion budget for RapidAPI requests.
pub const RAPIDAPI_MAX_TOKENS: u32 = 1000;

pub struct RapidApiProvider {
    client: reqwest::Client,
    endpoint_url: String,
    api_key: String,
}

impl std::fmt::Debug for RapidApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RapidApiProvider")
            .field("endpoint_url", &self.endpoint_url)
            .finish_non_exhaustive()
    }
}

impl RapidApiProvider {
    pub fn new(client: reqwest::Client, config: &ProviderConfig) -> Self {
        Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
            api_key: config.credential.clone().unwrap_or_default(),
        }
    }

    fn headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert("x-rapidapi-host", HeaderValue::from_static(RAPIDAPI_HOST));
        let mut key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| ProviderError::InvalidHeader("x-rapidapi-key"))?;
        key.set_sensitive(true);
        headers.insert("x-rapidapi-key", key);
        Ok(headers)
    }
}

#[async_trait]
impl TextProvider for RapidApiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Rapid
    }

    async fn try_generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let body = ChatCompletionRequest {
            model: RAPIDAPI_MODEL.to_string(),
            messages: request.chat_messages(),
            max_tokens: Some(RAPIDAPI_MAX_TOKENS),
            temperature: CHAT_TEMPERATURE,
        };

        debug!(
            url = %self.endpoint_url,
            requested_model = %request.model,
            model = RAPIDAPI_MODEL,
            "Calling RapidAPI"
        );

        let response: ChatCompletionResponse =
            post_json(&self.client, &self.endpoint_url, self.headers()?, &body).await?;
        require_text(response.into_text())
    }
}
