//! Persona-parameterized response generation.

use rolelens_core::error::Result;
use rolelens_core::generate::ResponseGenerator;
use rolelens_core::persona::{self, Persona, PersonaKey};
use std::str::FromStr;

use crate::error::GenerationError;
use crate::fallback;
use crate::openrouter_api_agent::OpenRouterApiAgent;
use crate::prompt;

/// Generates assistant replies under a persona lens.
///
/// With an agent configured, each reply comes from one chat-completion
/// call carrying a fresh system prompt and the latest user text. Without
/// a credential the deterministic offline fallback answers instead. Every
/// failure on the outbound call is caught here and rendered as assistant
/// text; this boundary never raises for transport, auth, or parse
/// failures.
pub struct PersonaResponder {
    agent: Option<OpenRouterApiAgent>,
}

impl PersonaResponder {
    /// Creates a responder over an explicit agent (or none for offline).
    pub fn new(agent: Option<OpenRouterApiAgent>) -> Self {
        Self { agent }
    }

    /// Creates a responder from ambient configuration.
    ///
    /// A missing credential selects the offline fallback; it is never an
    /// error.
    pub fn from_env() -> Self {
        let agent = OpenRouterApiAgent::try_from_env();
        if agent.is_none() {
            tracing::info!("no OpenRouter credential configured; using offline fallback");
        }
        Self::new(agent)
    }

    /// Creates a responder that always uses the offline fallback.
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// True when replies come from the hosted service.
    pub fn is_online(&self) -> bool {
        self.agent.is_some()
    }

    /// Generates a reply for a string persona key.
    ///
    /// # Errors
    ///
    /// Returns [`RolelensError::UnknownPersona`] if `persona_key` is not
    /// in the fixed set. That is a programmer/config error and is
    /// propagated, unlike generation-service failures which are rendered
    /// as text.
    ///
    /// [`RolelensError::UnknownPersona`]: rolelens_core::RolelensError::UnknownPersona
    pub async fn generate_response(&self, user_text: &str, persona_key: &str) -> Result<String> {
        let key = PersonaKey::from_str(persona_key)
            .map_err(|_| rolelens_core::RolelensError::unknown_persona(persona_key))?;
        Ok(self.generate(user_text, key).await)
    }

    async fn respond(&self, user_text: &str, persona: &Persona) -> String {
        let Some(agent) = &self.agent else {
            tracing::debug!(persona = persona.name, "offline fallback response");
            return fallback::fallback_response(persona);
        };

        let system_prompt = prompt::build_system_prompt(persona);
        match agent.complete(&system_prompt, user_text).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(persona = persona.name, error = %err, "generation failed");
                failure_text(&err)
            }
        }
    }
}

#[async_trait::async_trait]
impl ResponseGenerator for PersonaResponder {
    async fn generate(&self, user_text: &str, persona: PersonaKey) -> String {
        self.respond(user_text, persona::get(persona)).await
    }
}

/// Renders a caught generation failure as assistant text.
fn failure_text(err: &GenerationError) -> String {
    format!(
        "**Analysis:** I encountered an error processing your request. Error: {err}"
    )
}
