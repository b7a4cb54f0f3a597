//! Persona-specific metrics tables.

use serde::Serialize;

use crate::persona::PersonaKey;

/// A small illustrative metrics table.
///
/// Column-major header plus row-major cells; column sets vary by persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<&'static str>>,
}

/// Builds the metrics table for a persona.
///
/// Deterministic and side-effect free; the values are static
/// demonstration data.
pub fn build_table(key: PersonaKey) -> MetricTable {
    match key {
        PersonaKey::SalesExecutive => MetricTable {
            columns: vec!["Metric", "Value", "Target"],
            rows: vec![
                vec!["Pipeline Value", "$2.5M", "$3.0M"],
                vec!["Conversion Rate", "22%", "25%"],
                vec!["Avg Deal Size", "$125K", "$140K"],
                vec!["Sales Cycle", "67 days", "60 days"],
            ],
        },
        PersonaKey::MarketResearcher => MetricTable {
            columns: vec!["Metric", "Value", "Trend"],
            rows: vec![
                vec!["Market Size", "$15B", "Growing"],
                vec!["Growth Rate", "18%", "Accelerating"],
                vec!["Market Share", "12%", "Increasing"],
                vec!["Competitors", "8 major", "Consolidating"],
            ],
        },
        PersonaKey::FinancialAnalyst => MetricTable {
            columns: vec!["Metric", "Value", "YoY Growth"],
            rows: vec![
                vec!["Revenue", "$850M", "+24%"],
                vec!["Profit Margin", "18.5%", "+2.1%"],
                vec!["ROI", "22%", "+3.5%"],
                vec!["Valuation", "$4.2B", "+28%"],
            ],
        },
        PersonaKey::StrategicPlanner => MetricTable {
            columns: vec!["Initiative", "Timeline", "Investment", "ROI Potential"],
            rows: vec![
                vec!["Market Expansion", "6-12 months", "$5M", "35%"],
                vec!["Product Innovation", "12-18 months", "$8M", "42%"],
                vec!["Digital Transformation", "18-24 months", "$12M", "28%"],
            ],
        },
        PersonaKey::ProductManager => MetricTable {
            columns: vec!["Feature", "User Impact", "Development Effort", "Priority"],
            rows: vec![
                vec!["AI Integration", "High", "High", "P0"],
                vec!["Mobile App", "Medium", "Medium", "P1"],
                vec!["API Access", "Low", "Low", "P2"],
                vec!["Analytics", "High", "Medium", "P0"],
            ],
        },
    }
}
