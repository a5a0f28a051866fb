//! Resilient Query Engine
//!
//! Executes one prompt against the LLM backend and returns validated text.
//! Retries are scoped to transient failures only (rate limiting, timeouts);
//! everything else fails fast so an auth problem or a malformed request
//! surfaces immediately instead of burning quota.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::domain::EngageError;
use crate::ports::{ChatMessage, Completion, GenerationOptions, LlmProvider};

/// Resilient single-turn query executor.
///
/// Holds only a read-only provider handle; every call keeps its state on the
/// stack, so one engine serves any number of concurrent sessions.
pub struct QueryEngine {
    provider: Arc<dyn LlmProvider>,
}

impl QueryEngine {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Execute one prompt and return the trimmed reply text.
    ///
    /// The prompt goes out as the sole user message of a single-turn chat
    /// request. Transient failures are retried with exponential backoff:
    /// before retry attempt `n` (numbered from 0) the engine sleeps `2^n`
    /// seconds, reusing the identical prompt and options. At most
    /// `max(options.retries, 1)` backend calls are issued in total; when all
    /// of them are throttled the result is
    /// [`EngageError::RateLimited`] carrying the number of calls made.
    pub async fn query(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, EngageError> {
        let messages = [ChatMessage::user(prompt)];
        let budget = options.retries.max(1);
        let mut attempts = 0u32;

        loop {
            match self.provider.complete(&messages, options).await {
                Ok(completion) => return extract_text(completion),
                Err(err) if err.is_transient() => {
                    attempts += 1;
                    if attempts >= budget {
                        warn!(
                            provider = self.provider.provider_name(),
                            attempts, "giving up after transient backend failures: {err}"
                        );
                        return Err(EngageError::RateLimited { attempts });
                    }
                    let delay = Duration::from_secs(1u64 << (attempts - 1));
                    warn!(
                        provider = self.provider.provider_name(),
                        attempt = attempts,
                        delay_secs = delay.as_secs(),
                        "transient backend failure, retrying: {err}"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    warn!(
                        provider = self.provider.provider_name(),
                        "backend failure: {err}"
                    );
                    return Err(EngageError::Backend(err.to_string()));
                }
            }
        }
    }
}

/// Validate the reply shape and pull out the generated text.
///
/// A reply with no choices, a null-content choice, or whitespace-only text
/// is malformed, and malformed replies are never retried: the transport call
/// succeeded, so a repeat is unlikely to change the backend's reading of the
/// request.
fn extract_text(completion: Completion) -> Result<String, EngageError> {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(EngageError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Choice, ProviderError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Plays back a scripted sequence of outcomes, counting calls.
    struct ScriptedProvider {
        script: Mutex<Vec<Result<Completion, ProviderError>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedProvider {
        fn new(script: Vec<Result<Completion, ProviderError>>) -> Self {
            Self {
                script: Mutex::new(script),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl LlmProvider for ScriptedProvider {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _options: &GenerationOptions,
        ) -> Result<Completion, ProviderError> {
            *self.calls.lock().unwrap() += 1;
            self.script.lock().unwrap().remove(0)
        }

        fn provider_name(&self) -> &str {
            "scripted"
        }
    }

    fn reply(text: &str) -> Result<Completion, ProviderError> {
        Ok(Completion {
            choices: vec![Choice {
                content: Some(text.to_string()),
            }],
        })
    }

    fn engine_with(
        script: Vec<Result<Completion, ProviderError>>,
    ) -> (QueryEngine, Arc<ScriptedProvider>) {
        let provider = Arc::new(ScriptedProvider::new(script));
        (QueryEngine::new(provider.clone()), provider)
    }

    #[tokio::test(start_paused = true)]
    async fn recovers_after_transient_failures_with_backoff() {
        let (engine, provider) = engine_with(vec![
            Err(ProviderError::RateLimited),
            Err(ProviderError::RateLimited),
            reply("All good"),
        ]);

        let started = tokio::time::Instant::now();
        let text = engine
            .query("prompt", &GenerationOptions::default())
            .await
            .unwrap();

        assert_eq!(text, "All good");
        assert_eq!(provider.calls(), 3);
        // two backoff sleeps: 2^0 + 2^1 seconds of virtual time
        assert!(started.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limited_after_budget_exhausted() {
        let (engine, provider) = engine_with(vec![
            Err(ProviderError::RateLimited),
            Err(ProviderError::RateLimited),
            Err(ProviderError::RateLimited),
        ]);

        let err = engine
            .query("prompt", &GenerationOptions::default())
            .await
            .unwrap_err();

        match err {
            EngageError::RateLimited { attempts } => assert_eq!(attempts, 3),
            other => panic!("expected RateLimited, got {:?}", other),
        }
        assert_eq!(provider.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_counts_as_transient() {
        let (engine, provider) = engine_with(vec![
            Err(ProviderError::Timeout(Duration::from_secs(30))),
            reply("eventually"),
        ]);

        let text = engine
            .query("prompt", &GenerationOptions::default())
            .await
            .unwrap();

        assert_eq!(text, "eventually");
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn empty_choice_list_is_malformed_and_not_retried() {
        let (engine, provider) = engine_with(vec![Ok(Completion::default())]);

        let err = engine
            .query("prompt", &GenerationOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, EngageError::MalformedResponse));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn whitespace_only_content_is_malformed() {
        let (engine, provider) = engine_with(vec![reply("   \n\t ")]);

        let err = engine
            .query("prompt", &GenerationOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, EngageError::MalformedResponse));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn null_content_choice_is_malformed() {
        let (engine, provider) = engine_with(vec![Ok(Completion {
            choices: vec![Choice { content: None }],
        })]);

        let err = engine
            .query("prompt", &GenerationOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, EngageError::MalformedResponse));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn non_transient_failure_is_not_retried() {
        let (engine, provider) = engine_with(vec![Err(ProviderError::Api {
            status: 401,
            message: "invalid api key".to_string(),
        })]);

        let err = engine
            .query("prompt", &GenerationOptions::default())
            .await
            .unwrap_err();

        match err {
            EngageError::Backend(message) => assert!(message.contains("invalid api key")),
            other => panic!("expected Backend, got {:?}", other),
        }
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn reply_text_is_trimmed() {
        let (engine, _provider) = engine_with(vec![reply("  An insight.  \n")]);

        let text = engine
            .query("prompt", &GenerationOptions::default())
            .await
            .unwrap();

        assert_eq!(text, "An insight.");
    }
}
