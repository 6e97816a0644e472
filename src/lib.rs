//! Amortization Engine - exact-decimal depreciation schedules for fixed assets
//!
//! This library provides:
//! - Straight-line, double-declining-balance and sum-of-the-years'-digits schedules
//! - Calendar-month period sequencing with end-of-month clamping
//! - Parsing and validation of user-entered amounts and dates
//! - Console rendering, chart series, CSV and JSON export
//! - Side-by-side comparison of methods for one asset

pub mod config;
pub mod export;
pub mod input;
pub mod report;
pub mod runner;
pub mod schedule;

// Re-export commonly used types
pub use schedule::{
    compute_schedule, compute_schedule_by_name, Method, Period, PeriodKind, Schedule, ScheduleError,
    ScheduleRequest, ScheduleSummary,
};
pub use input::{InputError, ScheduleForm};
pub use runner::ScheduleRunner;
