//! Read-only presentation of computed schedules

mod chart;
mod format;
mod table;

pub use chart::ChartSeries;
pub use format::format_amount;
pub use table::{render_comparison, render_summary, render_table, DISPLAY_COLUMNS};
