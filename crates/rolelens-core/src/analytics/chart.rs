//! Declarative chart descriptors for the analytics panel.
//!
//! The core does not render anything; it hands the presentation layer a
//! descriptor of one illustrative visualization per persona. Chart
//! support is compiled in through the default-on `charts` feature; with
//! the feature disabled every persona degrades to "no chart".

use serde::Serialize;

use crate::persona::PersonaKey;

/// One stage of a funnel chart, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStage {
    pub label: &'static str,
    pub value: u32,
}

/// One axis of a radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub label: &'static str,
    pub value: f64,
}

/// One named series of a grouped bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub name: &'static str,
    pub values: Vec<u32>,
}

/// How a waterfall step contributes to the running total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterfallMeasure {
    Relative,
    Total,
}

/// One step of a waterfall chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallStep {
    pub label: &'static str,
    pub measure: WaterfallMeasure,
    pub value: i32,
}

/// One labeled point of a scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: &'static str,
    pub effort: f64,
    pub impact: f64,
}

/// A declarative description of one persona-specific visualization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartDescriptor {
    Funnel {
        title: &'static str,
        stages: Vec<FunnelStage>,
    },
    Radar {
        title: &'static str,
        max_value: f64,
        axes: Vec<RadarAxis>,
    },
    GroupedBars {
        title: &'static str,
        categories: Vec<&'static str>,
        series: Vec<BarSeries>,
    },
    Waterfall {
        title: &'static str,
        steps: Vec<WaterfallStep>,
    },
    Scatter {
        title: &'static str,
        x_label: &'static str,
        y_label: &'static str,
        points: Vec<ScatterPoint>,
    },
}

/// Builds the chart descriptor for a persona.
///
/// Never fails: when chart support is compiled out the result is `None`
/// and the analytics panel shows the table alone.
#[cfg(feature = "charts")]
pub fn build_chart(key: PersonaKey) -> Option<ChartDescriptor> {
    use WaterfallMeasure::{Relative, Total};

    let chart = match key {
        PersonaKey::SalesExecutive => ChartDescriptor::Funnel {
            title: "💰 Sales Funnel Performance",
            stages: vec![
                FunnelStage { label: "Leads", value: 1000 },
                FunnelStage { label: "MQLs", value: 800 },
                FunnelStage { label: "SQLs", value: 400 },
                FunnelStage { label: "Opportunities", value: 200 },
                FunnelStage { label: "Closed Won", value: 80 },
            ],
        },
        PersonaKey::MarketResearcher => ChartDescriptor::Radar {
            title: "📊 Market Position Analysis",
            max_value: 100.0,
            axes: vec![
                RadarAxis { label: "Market Share", value: 25.0 },
                RadarAxis { label: "Growth Rate", value: 18.0 },
                RadarAxis { label: "Customer Sat", value: 82.0 },
                RadarAxis { label: "Brand Awareness", value: 65.0 },
            ],
        },
        PersonaKey::FinancialAnalyst => ChartDescriptor::GroupedBars {
            title: "💹 Financial Performance",
            categories: vec!["2022", "2023", "2024", "2025"],
            series: vec![
                BarSeries {
                    name: "Revenue ($M)",
                    values: vec![500, 650, 820, 1050],
                },
                BarSeries {
                    name: "Profit ($M)",
                    values: vec![75, 110, 160, 220],
                },
            ],
        },
        PersonaKey::StrategicPlanner => ChartDescriptor::Waterfall {
            title: "🛣️ Strategic Implementation Timeline",
            steps: vec![
                WaterfallStep { label: "Foundation", measure: Relative, value: 1 },
                WaterfallStep { label: "Growth", measure: Relative, value: 2 },
                WaterfallStep { label: "Expansion", measure: Relative, value: 2 },
                WaterfallStep { label: "Leadership", measure: Total, value: 1 },
            ],
        },
        PersonaKey::ProductManager => ChartDescriptor::Scatter {
            title: "🎯 Feature Impact vs Effort Analysis",
            x_label: "Implementation Effort",
            y_label: "Business Impact",
            points: vec![
                ScatterPoint { label: "Feature A", effort: 30.0, impact: 85.0 },
                ScatterPoint { label: "Feature B", effort: 50.0, impact: 70.0 },
                ScatterPoint { label: "Feature C", effort: 70.0, impact: 60.0 },
                ScatterPoint { label: "Feature D", effort: 40.0, impact: 45.0 },
            ],
        },
    };

    Some(chart)
}

/// Chart support compiled out: every persona degrades to "no chart".
#[cfg(not(feature = "charts"))]
pub fn build_chart(_key: PersonaKey) -> Option<ChartDescriptor> {
    None
}
