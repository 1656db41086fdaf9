//! Wire types for the provider HTTP contracts.
//!
//! Two request shapes are spoken: the OpenAI chat completions format (local
//! LLM and RapidAPI) and the Python backend's `{prompt, system_prompt}` form.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Generation request (caller-facing)
// ─────────────────────────────────────────────

/// One generation call as seen by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Model requested by the caller. May be overridden by the dispatcher.
    pub model: String,
    pub system_prompt: String,
    pub user_message: String,
}

impl GenerationRequest {
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            user_message: user_message.into(),
        }
    }

    /// System + user messages in chat format.
    pub fn chat_messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(&self.system_prompt),
            ChatMessage::user(&self.user_message),
        ]
    }
}

// ─────────────────────────────────────────────
// Messages (OpenAI chat completions format)
// ─────────────────────────────────────────────

/// Message author.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A chat message: `{ "role": ..., "content": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

// ─────────────────────────────────────────────
// Chat completion request / response
// ─────────────────────────────────────────────

/// Request body for an OpenAI-compatible chat completion API.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub temperature: f64,
}

/// Raw chat completion response. Only the fields the dispatcher reads.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// A single choice in a chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: AssistantMessage,
}

/// The assistant message within a chat completion choice.
#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, if present.
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next()?.message.content
    }
}

// ─────────────────────────────────────────────
// Python backend
// ─────────────────────────────────────────────

/// Request body for the Python generation server.
#[derive(Debug, Serialize)]
pub struct PythonGenerateRequest {
    pub prompt: String,
    pub system_prompt: String,
}

/// Response body of the Python generation server.
#[derive(Debug, Deserialize)]
pub struct PythonGenerateResponse {
    #[serde(default)]
    pub text: Option<String>,
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_messages_order() {
        let req = GenerationRequest::new("gpt-4o", "Be brief.", "Hi");
        let json = serde_json::to_value(req.chat_messages()).unwrap();
        assert_eq!(
            json,
            json!([
                { "role": "system", "content": "Be brief." },
                { "role": "user", "content": "Hi" }
            ])
        );
    }

    #[test]
    fn test_request_omits_max_tokens_when_unset() {
        let body = ChatCompletionRequest {
            model: "llama3".into(),
            messages: vec![ChatMessage::user("x")],
            max_tokens: None,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("max_tokens").is_none());
        assert_eq!(json["temperature"], 0.7);
    }

    #[test]
    fn test_response_first_choice() {
        let resp: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "message": { "role": "assistant", "content": "first" }, "finish_reason": "stop" },
                { "message": { "role": "assistant", "content": "second" } }
            ]
        }))
        .unwrap();
        assert_eq!(resp.into_text().as_deref(), Some("first"));
    }

    #[test]
    fn test_response_without_choices() {
        let resp: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.into_text().is_none());

        let resp: ChatCompletionResponse =
            serde_json::from_value(json!({ "choices": [{ "message": { "content": null } }] }))
                .unwrap();
        assert!(resp.into_text().is_none());
    }

    #[test]
    fn test_python_request_shape() {
        let body = PythonGenerateRequest {
            prompt: "Write a haiku".into(),
            system_prompt: "You are a poet.".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "prompt": "Write a haiku", "system_prompt": "You are a poet." })
        );
    }
}
