//! Atelier API Routes
//!
//! - /atelier/clients - Profile display
//! - /atelier/clients/:id/engagement-score - Simulated engagement likelihood
//! - /atelier/clients/:id/engage/:kind - LLM generation operations
//! - /atelier/clients/:id/sentiment - Sentiment estimate
//! - /atelier/events - Show calendar

pub mod clients;
pub mod engage;
pub mod events;
pub mod swagger;
