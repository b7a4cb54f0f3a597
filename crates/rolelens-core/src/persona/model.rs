//! Persona domain model.
//!
//! Represents the role lenses a user can adopt when conversing with the
//! assistant. Each persona has distinct priority topics used both in
//! prompt construction and in UI hints.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Identifier for one of the five fixed personas.
///
/// The set is closed: persona-conditional behavior across the codebase
/// dispatches on this enum rather than on free-form strings. External
/// string keys (e.g. `"sales_executive"`) parse via [`FromStr`].
///
/// [`FromStr`]: std::str::FromStr
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PersonaKey {
    SalesExecutive,
    MarketResearcher,
    FinancialAnalyst,
    StrategicPlanner,
    ProductManager,
}

/// A persona representing a role lens with specific priorities.
///
/// Personas are immutable demonstration data defined in
/// [`preset`](super::preset); all fields borrow from static storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    /// Registry key for this persona
    pub key: PersonaKey,
    /// Display name of the persona
    pub name: &'static str,
    /// Short description of the persona's focus
    pub description: &'static str,
    /// Ordered priority topics, most important first
    pub priorities: [&'static str; 3],
    /// Icon glyph shown next to the persona in selectors and headers
    pub icon: &'static str,
}

impl Persona {
    /// Renders the footer hint for this persona, built from its two
    /// leading priority topics.
    pub fn tip(&self) -> String {
        format!(
            "💡 {} {} Tip: Focus on **{}** and **{}** for maximum impact!",
            self.icon, self.name, self.priorities[0], self.priorities[1]
        )
    }

    /// Priority topics joined for prompt construction and announcements.
    pub fn priorities_joined(&self) -> String {
        self.priorities.join(", ")
    }
}
