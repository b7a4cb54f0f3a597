//! Session events and their outcomes.
//!
//! The presentation layer drives a session exclusively through
//! [`SessionEvent`] values; the machine reports what happened through
//! [`EventOutcome`].

use serde::{Deserialize, Serialize};

use crate::persona::PersonaKey;

/// High-level events the presentation layer can publish to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The user picked a persona in the selector.
    SwitchPersona { key: PersonaKey },
    /// The user submitted raw text.
    Submit { content: String },
}

/// Result of handling a session event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// No state change occurred (repeat persona switch, empty submit).
    NoOp,
    /// The active persona changed and an announcement was appended.
    PersonaSwitched(PersonaKey),
    /// A reply was appended to the log.
    Replied {
        /// The assistant text that was appended.
        content: String,
        /// Whether the analytics panel (chart + table) should be surfaced
        /// alongside the reply. Presentation side effect, not a state
        /// mutation.
        show_analytics: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_a_type_tag() {
        let event = SessionEvent::SwitchPersona {
            key: PersonaKey::FinancialAnalyst,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            "{\"type\":\"switch_persona\",\"key\":\"financial_analyst\"}"
        );
    }

    #[test]
    fn events_round_trip_through_serde() {
        let event = SessionEvent::Submit {
            content: "analyze the market".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
