//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! external systems (the profile fixture, the LLM backend).
//!
//! Implementations of these traits live in the infrastructure layer.

pub mod profile_store;
pub mod services;

// Re-exports
pub use profile_store::*;
pub use services::*;
