//! LLM Provider Port
//!
//! Abstract interface for LLM invocations. Implementations live in the
//! infrastructure layer and can be swapped between backends; the query
//! engine only sees this trait plus the classified [`ProviderError`].

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend model used when nothing else is configured
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Role of a message in a chat request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Sampling and retry parameters for one generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Backend model identifier
    pub model: String,
    /// Output budget in tokens
    pub max_tokens: u32,
    /// 0.0 = deterministic, higher = more varied
    pub temperature: f32,
    /// Upper bound on backend calls spent on transient failures
    pub retries: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 250,
            temperature: 0.7,
            retries: 3,
        }
    }
}

impl GenerationOptions {
    /// Deterministic variant used for sentiment extraction
    pub fn sentiment() -> Self {
        Self {
            temperature: 0.0,
            ..Self::default()
        }
    }
}

/// One generated choice; `content` is None when the backend returns a
/// choice without text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    pub content: Option<String>,
}

/// Raw completion reply, before the query engine validates its shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Completion {
    pub choices: Vec<Choice>,
}

/// Classified provider failures.
///
/// [`ProviderError::is_transient`] decides retry eligibility: only rate
/// limiting and per-attempt timeouts are expected to resolve with time.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("rate limited by backend")]
    RateLimited,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ProviderError {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ProviderError::RateLimited | ProviderError::Timeout(_)
        )
    }
}

/// LLM provider interface
///
/// One implementation per backend. Adapters are expected to request exactly
/// one choice per call and to classify failures into [`ProviderError`];
/// everything above this trait is backend-agnostic.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Issue one chat completion request
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &GenerationOptions,
    ) -> Result<Completion, ProviderError>;

    /// Provider name for diagnostics (e.g. "openai")
    fn provider_name(&self) -> &str;
}
