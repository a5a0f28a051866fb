//! Domain Errors
//!
//! The classified outcomes of the engagement core.

use thiserror::Error;

use crate::domain::entities::PromptKind;

/// Engagement core errors
///
/// Every failure the core can produce is one of these variants; callers
/// pattern-match instead of catching. `RateLimited` is the only class the
/// query engine recovers from (bounded retry) before surfacing it.
#[derive(Debug, Error)]
pub enum EngageError {
    /// A prompt template was rendered without one of its required values.
    /// A programming error in the caller, not bad user input.
    #[error("prompt template '{kind}' is missing required field '{field}'")]
    MissingField {
        kind: PromptKind,
        field: &'static str,
    },

    /// The backend throttled every call the retry budget allowed.
    #[error("backend rate limited after {attempts} attempts")]
    RateLimited { attempts: u32 },

    /// Any non-transient backend failure: auth, network, malformed request,
    /// backend internal. Never retried.
    #[error("backend error: {0}")]
    Backend(String),

    /// Transport succeeded but the reply carried no usable text.
    #[error("backend returned no usable content")]
    MalformedResponse,
}
