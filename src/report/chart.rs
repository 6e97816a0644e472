//! Plot-ready series for book value and accumulated expense over time

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::schedule::Schedule;

/// Parallel vectors, one point per schedule row
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub dates: Vec<NaiveDate>,
    pub book_value: Vec<f64>,
    pub accumulated: Vec<f64>,
}

impl ChartSeries {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let rows = schedule.periods();
        Self {
            dates: rows.iter().map(|p| p.date).collect(),
            book_value: rows.iter().map(|p| p.book_value.to_f64().unwrap_or_default()).collect(),
            accumulated: rows.iter().map(|p| p.accumulated.to_f64().unwrap_or_default()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Highest value on either series, for scaling the y axis
    pub fn y_max(&self) -> f64 {
        self.book_value
            .iter()
            .chain(self.accumulated.iter())
            .copied()
            .fold(0.0, f64::max)
    }
}
