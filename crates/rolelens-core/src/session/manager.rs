//! The conversation state machine.

use std::sync::Arc;

use serde::Serialize;

use super::event::{EventOutcome, SessionEvent};
use super::message::{ConversationMessage, MessageRole};
use super::state::ConversationState;
use crate::analytics::{self, ChartDescriptor, MetricTable};
use crate::generate::ResponseGenerator;
use crate::persona::{self, Persona, PersonaKey};

/// Keywords whose presence in user input surfaces the analytics panel
/// alongside the reply (case-insensitive substring match).
const TRIGGER_KEYWORDS: [&str; 4] = ["analyze", "research", "data", "metrics"];

/// Everything the presentation layer needs for one render cycle.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView<'a> {
    /// Full message log for transcript display.
    pub messages: &'a [ConversationMessage],
    /// Active persona metadata for headers and the selector.
    pub persona: &'static Persona,
    /// Persona-specific chart, absent when chart support is unavailable.
    pub chart: Option<ChartDescriptor>,
    /// Persona-specific metrics table.
    pub table: MetricTable,
}

/// Drives a single session's conversation state.
///
/// Each user action is handled to completion before the next is accepted:
/// the transitions take `&mut self`, so two submits can never overlap on
/// one session. The one potentially slow operation (the generation call)
/// is awaited inline; the UI is expected to indicate a busy state for its
/// duration.
pub struct ConversationManager {
    state: ConversationState,
    generator: Arc<dyn ResponseGenerator>,
}

impl ConversationManager {
    /// Creates a manager over a fresh session state.
    pub fn new(generator: Arc<dyn ResponseGenerator>) -> Self {
        Self {
            state: ConversationState::new(),
            generator,
        }
    }

    /// Read access to the session state.
    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Assembles the presentation-boundary view for the current state.
    pub fn view(&self) -> SessionView<'_> {
        let key = self.state.active_persona();
        SessionView {
            messages: self.state.messages(),
            persona: persona::get(key),
            chart: analytics::build_chart(key),
            table: analytics::build_table(key),
        }
    }

    /// Dispatches a presentation-layer event to the matching transition.
    pub async fn handle_event(&mut self, event: SessionEvent) -> EventOutcome {
        match event {
            SessionEvent::SwitchPersona { key } => self.switch_persona(key),
            SessionEvent::Submit { content } => self.submit(&content).await,
        }
    }

    /// Switches the active persona.
    ///
    /// Appends exactly one assistant announcement for the new persona.
    /// Switching to the already-active persona is a no-op and appends
    /// nothing.
    pub fn switch_persona(&mut self, key: PersonaKey) -> EventOutcome {
        if key == self.state.active_persona() {
            return EventOutcome::NoOp;
        }

        let persona = persona::get(key);
        self.state.set_active_persona(key);
        self.state.append(
            MessageRole::Assistant,
            format!(
                "🔄 **Switched to {} {} Mode**\n\n*{}*\n\n**Focus areas:** {}",
                persona.icon,
                persona.name,
                persona.description,
                persona.priorities_joined()
            ),
        );
        tracing::debug!(session_id = self.state.id(), persona = %key, "persona switched");

        EventOutcome::PersonaSwitched(key)
    }

    /// Handles submitted user text.
    ///
    /// Appends the user message, generates a reply under the active
    /// persona, and appends it: exactly two messages, in that order.
    /// Empty or whitespace-only input is a no-op.
    pub async fn submit(&mut self, text: &str) -> EventOutcome {
        if text.trim().is_empty() {
            return EventOutcome::NoOp;
        }

        let key = self.state.active_persona();
        self.state.append(MessageRole::User, text);

        let reply = self.generator.generate(text, key).await;
        self.state.append(MessageRole::Assistant, reply.clone());
        tracing::debug!(
            session_id = self.state.id(),
            persona = %key,
            log_len = self.state.messages().len(),
            "submit handled"
        );

        EventOutcome::Replied {
            content: reply,
            show_analytics: wants_analytics(text),
        }
    }

    /// Restores the seeded initial state.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

/// True when the user text contains an analysis-trigger keyword.
fn wants_analytics(text: &str) -> bool {
    let lowered = text.to_lowercase();
    TRIGGER_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stub generator that echoes a canned reply and records calls.
    struct StubGenerator {
        reply: String,
        calls: std::sync::Mutex<Vec<(String, PersonaKey)>>,
    }

    impl StubGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                calls: std::sync::Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl ResponseGenerator for StubGenerator {
        async fn generate(&self, user_text: &str, persona: PersonaKey) -> String {
            self.calls
                .lock()
                .unwrap()
                .push((user_text.to_string(), persona));
            self.reply.clone()
        }
    }

    fn manager_with(reply: &str) -> (ConversationManager, Arc<StubGenerator>) {
        let generator = Arc::new(StubGenerator::new(reply));
        (ConversationManager::new(generator.clone()), generator)
    }

    #[test]
    fn switch_appends_exactly_one_announcement() {
        let (mut manager, _) = manager_with("ok");

        let outcome = manager.switch_persona(PersonaKey::MarketResearcher);

        assert_eq!(
            outcome,
            EventOutcome::PersonaSwitched(PersonaKey::MarketResearcher)
        );
        assert_eq!(
            manager.state().active_persona(),
            PersonaKey::MarketResearcher
        );
        assert_eq!(manager.state().messages().len(), 2);
        let announcement = &manager.state().messages()[1];
        assert_eq!(announcement.role, MessageRole::Assistant);
        assert!(announcement.content.contains("Market Researcher"));
        assert!(announcement.content.contains("market share"));
    }

    #[test]
    fn switch_to_active_persona_is_a_noop() {
        let (mut manager, _) = manager_with("ok");

        let outcome = manager.switch_persona(PersonaKey::SalesExecutive);

        assert_eq!(outcome, EventOutcome::NoOp);
        assert_eq!(manager.state().messages().len(), 1);
    }

    #[test]
    fn announcement_count_equals_effective_switches() {
        let (mut manager, _) = manager_with("ok");
        let sequence = [
            PersonaKey::SalesExecutive,  // no-op (already active)
            PersonaKey::ProductManager,  // effective
            PersonaKey::ProductManager,  // no-op
            PersonaKey::FinancialAnalyst, // effective
            PersonaKey::SalesExecutive,  // effective
        ];

        let effective = sequence
            .into_iter()
            .filter(|key| manager.switch_persona(*key) != EventOutcome::NoOp)
            .count();

        assert_eq!(effective, 3);
        assert_eq!(manager.state().messages().len(), 1 + effective);
    }

    #[tokio::test]
    async fn submit_appends_user_then_assistant() {
        let (mut manager, generator) = manager_with("here are the numbers");

        let outcome = manager.submit("how is the pipeline?").await;

        let messages = manager.state().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "how is the pipeline?");
        assert_eq!(messages[2].role, MessageRole::Assistant);
        assert_eq!(messages[2].content, "here are the numbers");
        assert_eq!(
            outcome,
            EventOutcome::Replied {
                content: "here are the numbers".to_string(),
                show_analytics: false,
            }
        );

        let calls = generator.calls.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[(
                "how is the pipeline?".to_string(),
                PersonaKey::SalesExecutive
            )]
        );
    }

    #[tokio::test]
    async fn empty_submit_is_a_noop() {
        let (mut manager, generator) = manager_with("ok");

        assert_eq!(manager.submit("").await, EventOutcome::NoOp);
        assert_eq!(manager.submit("   \n\t").await, EventOutcome::NoOp);
        assert_eq!(manager.state().messages().len(), 1);
        assert!(generator.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn trigger_keywords_surface_analytics() {
        let (mut manager, _) = manager_with("ok");

        for text in [
            "please Analyze our position",
            "any new RESEARCH?",
            "show me the data",
            "what do the metrics say",
        ] {
            match manager.submit(text).await {
                EventOutcome::Replied { show_analytics, .. } => {
                    assert!(show_analytics, "expected analytics for {text:?}")
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        match manager.submit("good morning").await {
            EventOutcome::Replied { show_analytics, .. } => assert!(!show_analytics),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[tokio::test]
    async fn events_dispatch_to_transitions() {
        let (mut manager, _) = manager_with("ok");

        let outcome = manager
            .handle_event(SessionEvent::SwitchPersona {
                key: PersonaKey::StrategicPlanner,
            })
            .await;
        assert_eq!(
            outcome,
            EventOutcome::PersonaSwitched(PersonaKey::StrategicPlanner)
        );

        let outcome = manager
            .handle_event(SessionEvent::Submit {
                content: "hello".to_string(),
            })
            .await;
        assert!(matches!(outcome, EventOutcome::Replied { .. }));
    }

    #[tokio::test]
    async fn spec_scenario_walkthrough() {
        let (mut manager, _) = manager_with("market looks strong");

        // Initial state: sales executive, one welcome message.
        assert_eq!(manager.state().active_persona(), PersonaKey::SalesExecutive);
        assert_eq!(manager.state().messages().len(), 1);

        // Switch to market researcher.
        manager.switch_persona(PersonaKey::MarketResearcher);
        assert_eq!(manager.state().messages().len(), 2);
        assert_eq!(
            manager.state().active_persona(),
            PersonaKey::MarketResearcher
        );

        // Submit with a trigger keyword.
        let outcome = manager.submit("analyze the market").await;
        let messages = manager.state().messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages.last().unwrap().role, MessageRole::Assistant);
        assert_eq!(
            outcome,
            EventOutcome::Replied {
                content: "market looks strong".to_string(),
                show_analytics: true,
            }
        );

        // Repeat switch is a no-op.
        assert_eq!(
            manager.switch_persona(PersonaKey::MarketResearcher),
            EventOutcome::NoOp
        );
        assert_eq!(manager.state().messages().len(), 4);
    }

    #[test]
    fn view_exposes_log_persona_and_analytics() {
        let (mut manager, _) = manager_with("ok");
        manager.switch_persona(PersonaKey::FinancialAnalyst);

        let view = manager.view();
        assert_eq!(view.messages.len(), 2);
        assert_eq!(view.persona.key, PersonaKey::FinancialAnalyst);
        assert!(!view.table.rows.is_empty());
        #[cfg(feature = "charts")]
        assert!(view.chart.is_some());
    }
}
