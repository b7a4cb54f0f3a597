//! Deterministic offline fallback.
//!
//! When no credential is configured the assistant still answers, with a
//! templated placeholder that is clearly marked as non-AI output.

use rolelens_core::persona::Persona;

/// Builds the placeholder analysis for a persona.
///
/// Deterministic: the output depends only on the persona's name and
/// first priority topic, never on the user text and never on the network.
pub fn fallback_response(persona: &Persona) -> String {
    format!(
        "**{name} Analysis:** As a {lower_name}, I would analyze this focusing on \
         {priority}. Based on typical industry data:\n\n\
         - **Key Metric:** 15-25% growth potential\n\
         - **Opportunity Size:** $2-5M addressable market\n\
         - **Implementation Timeline:** 6-12 months\n\
         - **Success Probability:** 70-80%\n\n\
         *Note: Add your OpenRouter API key to secret.json for AI-powered analysis*",
        name = persona.name,
        lower_name = persona.name.to_lowercase(),
        priority = persona.priorities[0],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolelens_core::persona;

    #[test]
    fn fallback_is_deterministic() {
        for persona in persona::all() {
            assert_eq!(fallback_response(persona), fallback_response(persona));
        }
    }

    #[test]
    fn fallback_names_persona_and_first_priority() {
        for persona in persona::all() {
            let text = fallback_response(persona);
            assert!(text.contains(persona.name));
            assert!(text.contains(persona.priorities[0]));
        }
    }

    #[test]
    fn fallback_is_marked_as_placeholder() {
        let text = fallback_response(persona::all().first().unwrap());
        assert!(text.contains("Add your OpenRouter API key"));
    }
}
