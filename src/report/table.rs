//! Fixed-width console rendering

use std::fmt::Write;

use super::format::format_amount;
use crate::schedule::{Schedule, ScheduleSummary};

/// Headers for on-screen display, same order as `COLUMNS`
pub const DISPLAY_COLUMNS: [&str; 6] = ["Period", "Date", "Description", "Expense", "Accumulated", "Book Value"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render every row of the schedule as an aligned text table
pub fn render_table(schedule: &Schedule) -> String {
    let mut out = String::new();
    let [period, date, description, expense, accumulated, book] = DISPLAY_COLUMNS;

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{:>6} {:<10} {:<13} {:>16} {:>16} {:>16}",
        period, date, description, expense, accumulated, book
    );
    let _ = writeln!(out, "{}", "-".repeat(82));

    for row in schedule.periods() {
        let _ = writeln!(
            out,
            "{:>6} {:<10} {:<13} {:>16} {:>16} {:>16}",
            row.period,
            row.date.format(DATE_FORMAT),
            row.description(),
            format_amount(row.expense),
            format_amount(row.accumulated),
            format_amount(row.book_value),
        );
    }
    out
}

/// Render the summary block printed under a table
pub fn render_summary(summary: &ScheduleSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary ({}):", summary.method);
    let _ = writeln!(out, "  Total Months: {}", summary.total_months);
    let _ = writeln!(out, "  Total Expense: {}", format_amount(summary.total_expense));
    let _ = writeln!(out, "  Largest Charge: {}", format_amount(summary.largest_charge));
    let _ = writeln!(out, "  Final Book Value: {}", format_amount(summary.final_book_value));
    match summary.fully_depreciated_period {
        Some(period) => {
            let _ = writeln!(out, "  Fully Depreciated: period {}", period);
        }
        None => {
            let _ = writeln!(out, "  Fully Depreciated: never");
        }
    }
    out
}

/// One line per method for side-by-side comparison
pub fn render_comparison(summaries: &[ScheduleSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<26} {:>16} {:>16} {:>10}",
        "Method", "First-Year", "Largest Charge", "Paid Off"
    );
    let _ = writeln!(out, "{}", "-".repeat(71));
    for s in summaries {
        let paid_off = s
            .fully_depreciated_period
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<26} {:>16} {:>16} {:>10}",
            s.method.label(),
            format_amount(s.first_year_expense),
            format_amount(s.largest_charge),
            paid_off,
        );
    }
    out
}
