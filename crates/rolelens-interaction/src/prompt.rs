//! System-prompt construction.
//!
//! Every generation call carries a freshly built system instruction: the
//! persona's role directive plus its priority topics. Prior conversation
//! turns are never included.

use rolelens_core::persona::{Persona, PersonaKey};

/// The persona-specific role directive for the system instruction.
fn role_directive(key: PersonaKey) -> &'static str {
    match key {
        PersonaKey::SalesExecutive => {
            "You are a sales executive. Focus on revenue opportunities, sales metrics, \
             pipeline value, conversion rates, and actionable sales strategies. Provide \
             specific numbers and revenue projections."
        }
        PersonaKey::MarketResearcher => {
            "You are a market researcher. Focus on market size, growth rates, competitive \
             analysis, consumer trends, and market share data. Provide comprehensive market \
             intelligence."
        }
        PersonaKey::FinancialAnalyst => {
            "You are a financial analyst. Focus on financial metrics, ROI calculations, \
             risk assessment, valuation, and investment recommendations. Provide precise \
             financial numbers."
        }
        PersonaKey::StrategicPlanner => {
            "You are a strategic planner. Focus on long-term strategy, growth \
             opportunities, strategic initiatives, and implementation roadmaps. Provide \
             forward-looking insights."
        }
        PersonaKey::ProductManager => {
            "You are a product manager. Focus on product opportunities, feature analysis, \
             user needs, and product roadmap. Provide user-centric recommendations."
        }
    }
}

/// Builds the system instruction for a persona.
pub fn build_system_prompt(persona: &Persona) -> String {
    format!(
        "{}\n\nAlways provide specific numbers, metrics, and data-driven insights. \
         Use the persona's focus areas: {}",
        role_directive(persona.key),
        persona.priorities_joined()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolelens_core::persona;

    #[test]
    fn prompt_contains_directive_and_priorities() {
        let researcher = persona::get(PersonaKey::MarketResearcher);
        let prompt = build_system_prompt(researcher);
        assert!(prompt.contains("You are a market researcher."));
        assert!(prompt.contains("market share, industry trends, competitive landscape"));
    }

    #[test]
    fn each_persona_gets_a_distinct_directive() {
        let prompts: Vec<String> = persona::all()
            .iter()
            .map(build_system_prompt)
            .collect();
        for (i, a) in prompts.iter().enumerate() {
            for b in &prompts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
