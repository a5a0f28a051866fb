//! OpenAI Chat Completions Adapter
//!
//! reqwest implementation of the LlmProvider port against an OpenAI-style
//! `/v1/chat/completions` endpoint. Failures are classified here so the
//! query engine never has to look at HTTP details.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use atelier::{ChatMessage, Choice, Completion, GenerationOptions, LlmProvider, ProviderError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Per-attempt network timeout; timeouts classify as transient
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI-style chat completions backend
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the endpoint base URL (e.g. a local inference server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
    n: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    content: Option<String>,
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<Completion, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: &options.model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            n: 1,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    ProviderError::Timeout(REQUEST_TIMEOUT)
                } else {
                    ProviderError::Request(err.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::Parse(err.to_string()))?;

        Ok(Completion {
            choices: payload
                .choices
                .into_iter()
                .map(|c| Choice {
                    content: c.message.content,
                })
                .collect(),
        })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

fn map_http_error(status: StatusCode, body: String) -> ProviderError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    // 429 is throttling; 529 is how some backends signal quota overload
    if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() == 529 {
        return ProviderError::RateLimited;
    }

    ProviderError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_status_classifies_transient() {
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, "{}".to_string());
        assert!(err.is_transient());
    }

    #[test]
    fn error_body_message_is_extracted() {
        let body = r#"{"error":{"message":"invalid api key"}}"#.to_string();
        match map_http_error(StatusCode::UNAUTHORIZED, body) {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn opaque_body_is_passed_through() {
        match map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()) {
            ProviderError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
