//! Outbound response generation for RoleLens.
//!
//! This crate owns everything that touches the hosted chat-completion
//! service: system-prompt construction, the OpenRouter HTTP agent, the
//! deterministic offline fallback, and secret configuration. The domain
//! layer consumes it only through the
//! [`ResponseGenerator`](rolelens_core::generate::ResponseGenerator) seam.

pub mod config;
pub mod error;
pub mod fallback;
pub mod openrouter_api_agent;
pub mod prompt;
pub mod responder;

pub use error::GenerationError;
pub use openrouter_api_agent::OpenRouterApiAgent;
pub use responder::PersonaResponder;
