//! Response generator seam.
//!
//! The conversation state machine talks to the language-model backend
//! through this trait, decoupling session logic from the transport
//! (HTTP API, offline fallback, test stub).

use crate::persona::PersonaKey;

/// Produces assistant text for a user utterance under a persona lens.
///
/// Implementations must always return displayable text: transport,
/// authentication, and parse failures are caught behind this seam and
/// rendered as human-readable message content, never surfaced as errors.
/// Each call is self-contained: only the latest user text is supplied,
/// and no prior conversation turns are forwarded.
#[async_trait::async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Generates a reply to `user_text` as the given persona.
    async fn generate(&self, user_text: &str, persona: PersonaKey) -> String;
}
