//! Asset entry form: raw text fields validated into a `ScheduleRequest`

use chrono::{Datelike, Local, Months, NaiveDate};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::parse::{parse_currency, parse_flexible_date};
use super::InputError;
use crate::schedule::{Method, ScheduleRequest};

pub const DEFAULT_ASSET_NAME: &str = "New Asset";

/// Text exactly as a user entered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleForm {
    pub asset_name: String,
    pub total_cost: String,
    pub salvage_value: String,
    pub start_date: String,
    pub end_date: String,
    pub method: String,
}

impl ScheduleForm {
    /// Blank form for an asset starting this month and running one year
    pub fn with_today(today: NaiveDate) -> Self {
        let (start, end) = default_dates(today);
        Self {
            asset_name: DEFAULT_ASSET_NAME.to_string(),
            total_cost: String::new(),
            salvage_value: "0".to_string(),
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            method: Method::StraightLine.label().to_string(),
        }
    }

    /// Parse and check every field.
    ///
    /// Amount and date checks run first and carry form wording; anything
    /// they let through is then held to the engine's own rules.
    pub fn validate(&self) -> Result<ScheduleRequest, InputError> {
        let total_cost = parse_currency(&self.total_cost)?;
        let salvage = parse_currency(&self.salvage_value)?;

        if total_cost <= Decimal::ZERO {
            return Err(InputError::NonPositiveCost);
        }
        if salvage < Decimal::ZERO {
            return Err(InputError::NegativeSalvage);
        }

        let start_date = parse_flexible_date(&self.start_date)?;
        let end_date = parse_flexible_date(&self.end_date)?;
        if end_date <= start_date {
            return Err(InputError::EndBeforeStart);
        }

        let method: Method = self.method.parse()?;
        let request = ScheduleRequest::new(total_cost, start_date, end_date, method).with_salvage(salvage);
        request.validate()?;

        debug!("Validated form for '{}': {:?}", self.asset_name, request);
        Ok(request)
    }
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self::with_today(Local::now().date_naive())
    }
}

/// First of the current month, and one year on from today less a day
pub fn default_dates(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let end = today
        .checked_add_months(Months::new(12))
        .and_then(|d| d.pred_opt())
        .unwrap_or(today);
    (start, end)
}
