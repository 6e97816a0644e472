//! Schedule output structures

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::request::ScheduleRequest;

/// Column names in the fixed order shared by the renderer and exporters
pub const COLUMNS: [&str; 6] = [
    "Period",
    "Date",
    "Description",
    "Amortization Expense",
    "Accumulated Amortization",
    "Book Value",
];

/// Whether a row is the opening balance or a monthly charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodKind {
    Initial,
    Amortization,
}

impl PeriodKind {
    pub fn description(&self) -> &'static str {
        match self {
            PeriodKind::Initial => "Initial Value",
            PeriodKind::Amortization => "Amortization",
        }
    }
}

/// A single row of the schedule.
///
/// Expenses are rounded half-up to cents, except in the final period, which
/// charges exactly what is left above salvage. When principal or salvage
/// carry sub-cent digits, that last expense carries them too so the schedule
/// still closes on salvage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// 0 for the opening row, then 1..=N
    pub period: u32,
    pub date: NaiveDate,
    pub kind: PeriodKind,
    pub expense: Decimal,
    pub accumulated: Decimal,
    pub book_value: Decimal,
}

impl Period {
    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

/// Complete schedule for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    request: ScheduleRequest,
    periods: Vec<Period>,
}

impl Schedule {
    pub(crate) fn new(request: ScheduleRequest, periods: Vec<Period>) -> Self {
        Self { request, periods }
    }

    /// The request this schedule was computed from
    pub fn request(&self) -> &ScheduleRequest {
        &self.request
    }

    /// Rows in period order, opening row first
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Number of amortization periods (rows minus the opening row)
    pub fn num_months(&self) -> u32 {
        self.periods.len().saturating_sub(1) as u32
    }

    pub fn final_book_value(&self) -> Decimal {
        self.periods.last().map(|p| p.book_value).unwrap_or(self.request.principal)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let charges = self.periods.iter().filter(|p| p.kind == PeriodKind::Amortization);

        let total_expense: Decimal = charges.clone().map(|p| p.expense).sum();
        let first_year_expense: Decimal = charges.clone().take(12).map(|p| p.expense).sum();
        let largest_charge = charges.clone().map(|p| p.expense).max().unwrap_or(Decimal::ZERO);
        let fully_depreciated_period = charges
            .clone()
            .find(|p| p.book_value <= self.request.salvage)
            .map(|p| p.period);

        let last = self.periods.last();

        ScheduleSummary {
            method: self.request.method,
            total_months: self.num_months(),
            total_expense,
            first_year_expense,
            final_accumulated: last.map(|p| p.accumulated).unwrap_or(Decimal::ZERO),
            final_book_value: self.final_book_value(),
            largest_charge,
            fully_depreciated_period,
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub method: super::Method,
    pub total_months: u32,
    pub total_expense: Decimal,
    /// Sum of the first twelve monthly charges
    pub first_year_expense: Decimal,
    pub final_accumulated: Decimal,
    pub final_book_value: Decimal,
    pub largest_charge: Decimal,
    /// First period whose closing book value sits on salvage
    pub fully_depreciated_period: Option<u32>,
}
