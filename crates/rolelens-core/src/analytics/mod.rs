//! Persona-specific analytics content.
//!
//! Pure, deterministic providers mapping a persona key to a chart
//! descriptor and a metrics table. Values are fixed demonstration data,
//! not computed from any live source; nothing here fails or performs IO.

pub mod chart;
pub mod table;

pub use chart::{build_chart, ChartDescriptor};
pub use table::{build_table, MetricTable};
