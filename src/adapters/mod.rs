//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM provider implementations (Anthropic, mock)
//! - `mongo` - MongoDB-backed repositories
//! - `http` - axum REST surface

pub mod ai;
pub mod http;
pub mod mongo;
