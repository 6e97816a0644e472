//! JSON document output for API consumers

use std::io::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExportError;
use crate::schedule::{Method, Period, Schedule, ScheduleSummary, COLUMNS};

/// Self-describing export of one schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub asset_name: String,
    pub method: Method,
    pub method_label: String,
    pub principal: Decimal,
    pub salvage: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub columns: Vec<String>,
    pub summary: ScheduleSummary,
    pub periods: Vec<Period>,
}

impl ScheduleDocument {
    pub fn new(asset_name: &str, schedule: &Schedule) -> Self {
        let request = schedule.request();
        Self {
            asset_name: asset_name.to_string(),
            method: request.method,
            method_label: request.method.label().to_string(),
            principal: request.principal,
            salvage: request.salvage,
            start_date: request.start_date,
            end_date: request.end_date,
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            summary: schedule.summary(),
            periods: schedule.periods().to_vec(),
        }
    }
}

/// Pretty-printed JSON document for `schedule`
pub fn write_json<W: Write>(asset_name: &str, schedule: &Schedule, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, &ScheduleDocument::new(asset_name, schedule))?;
    Ok(())
}
