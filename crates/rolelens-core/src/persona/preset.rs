//! The fixed persona presets.
//!
//! Five role lenses, each with distinct priority topics. Order here is the
//! selector display order and must match the [`PersonaKey`] declaration
//! order (the registry indexes by discriminant).

use super::model::{Persona, PersonaKey};

pub(super) const PERSONAS: [Persona; 5] = [
    Persona {
        key: PersonaKey::SalesExecutive,
        name: "Sales Executive",
        description: "Focuses on revenue opportunities and sales strategies",
        priorities: ["revenue growth", "client acquisition", "sales metrics"],
        icon: "💰",
    },
    Persona {
        key: PersonaKey::MarketResearcher,
        name: "Market Researcher",
        description: "Focuses on market trends and competitive analysis",
        priorities: ["market share", "industry trends", "competitive landscape"],
        icon: "📊",
    },
    Persona {
        key: PersonaKey::FinancialAnalyst,
        name: "Financial Analyst",
        description: "Focuses on financial metrics and ROI analysis",
        priorities: ["financial performance", "ROI analysis", "risk assessment"],
        icon: "💹",
    },
    Persona {
        key: PersonaKey::StrategicPlanner,
        name: "Strategic Planner",
        description: "Focuses on long-term strategy and growth opportunities",
        priorities: [
            "strategic initiatives",
            "growth opportunities",
            "market positioning",
        ],
        icon: "🛣️",
    },
    Persona {
        key: PersonaKey::ProductManager,
        name: "Product Manager",
        description: "Focuses on product opportunities and feature analysis",
        priorities: ["product-market fit", "feature analysis", "customer needs"],
        icon: "🎯",
    },
];
