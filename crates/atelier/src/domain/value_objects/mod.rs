//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod sentiment;

pub use sentiment::*;
