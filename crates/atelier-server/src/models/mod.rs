//! Atelier API Models
//!
//! Request/response DTOs for the HTTP surface.

mod client;
mod engage;

pub use client::*;
pub use engage::*;
