//! Atelier Domain Library
//!
//! Core domain types and the resilient LLM engagement layer for the Atelier
//! client-relationship demo.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (ClientProfile, GalleryEvent, Prompt)
//!   - `value_objects/`: Immutable value types (SentimentReading)
//!   - `errors/`: The classified error taxonomy
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `profile_store`: Read-only access to the fixed demo records
//!   - `services/`: External service interfaces (LlmProvider)
//!
//! - **Services** (`services/`): The engagement core built on the ports
//!   - `query_engine`: Resilient LLM invocation with transient-only retry
//!   - `interpreter`: Typed interpretation of raw model output
//!
//! # Usage
//!
//! ```rust,ignore
//! use atelier::{PromptRequest, QueryEngine, interpret_sentiment};
//!
//! let prompt = PromptRequest::insights(&client).render()?;
//! let text = engine.query(&prompt, &GenerationOptions::default()).await?;
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{
    ClientProfile, EngageError, GalleryEvent, PromptKind, PromptRequest, SentimentReading,
};
pub use ports::{
    ChatMessage, Choice, Completion, GenerationOptions, LlmProvider, MessageRole, ProfileStore,
    ProviderError, DEFAULT_MODEL,
};
pub use services::{interpret_sentiment, QueryEngine};
