//! Session-owned conversation state.

use serde::Serialize;
use uuid::Uuid;

use super::message::{ConversationMessage, MessageRole};
use crate::persona::PersonaKey;

/// Seeded assistant greeting shown before any user action.
const WELCOME_MESSAGE: &str = "👋 **Welcome!** I'm your multi-persona Company Research \
     Assistant. Select your role to get started with customized insights!";

/// The per-session mutable record of active persona and message log.
///
/// Created once per session, seeded with a welcome message, and mutated
/// only through the transitions in
/// [`ConversationManager`](super::manager::ConversationManager). The log
/// is append-only; [`reset`](Self::reset) is the explicit session-end
/// semantics and restores the seeded state.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationState {
    /// Unique session identifier (UUID format)
    id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    created_at: String,
    /// The currently active persona
    active_persona: PersonaKey,
    /// Ordered message log, display order
    messages: Vec<ConversationMessage>,
}

impl ConversationState {
    /// Creates a fresh session state with the default persona and the
    /// seeded welcome message.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            active_persona: PersonaKey::SalesExecutive,
            messages: vec![ConversationMessage::new(
                MessageRole::Assistant,
                WELCOME_MESSAGE,
            )],
        }
    }

    /// Restores the seeded initial state, keeping the session id.
    pub fn reset(&mut self) {
        self.active_persona = PersonaKey::SalesExecutive;
        self.messages.clear();
        self.messages.push(ConversationMessage::new(
            MessageRole::Assistant,
            WELCOME_MESSAGE,
        ));
    }

    /// The session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Session creation timestamp (ISO 8601 format).
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// The currently active persona key.
    pub fn active_persona(&self) -> PersonaKey {
        self.active_persona
    }

    /// The full message log in display order.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub(super) fn set_active_persona(&mut self, key: PersonaKey) {
        self.active_persona = key;
    }

    pub(super) fn append(&mut self, role: MessageRole, content: impl Into<String>) {
        self.messages.push(ConversationMessage::new(role, content));
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_seeded_with_one_welcome_message() {
        let state = ConversationState::new();
        assert_eq!(state.active_persona(), PersonaKey::SalesExecutive);
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].role, MessageRole::Assistant);
        assert!(state.messages()[0].content.contains("Welcome"));
        assert!(!state.id().is_empty());
    }

    #[test]
    fn reset_restores_the_seeded_state_but_keeps_the_id() {
        let mut state = ConversationState::new();
        let id = state.id().to_string();
        state.append(MessageRole::User, "hello");
        state.set_active_persona(PersonaKey::ProductManager);

        state.reset();

        assert_eq!(state.id(), id);
        assert_eq!(state.active_persona(), PersonaKey::SalesExecutive);
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn sessions_get_unique_ids() {
        assert_ne!(ConversationState::new().id(), ConversationState::new().id());
    }
}
