//! Schedule input and its validation rules

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::dates::months_spanned;
use super::error::ScheduleError;
use super::method::Method;
use super::period::Schedule;

/// Everything needed to compute one schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Total cost of the asset
    pub principal: Decimal,

    /// Floor for book value; zero when salvage is not modeled
    #[serde(default)]
    pub salvage: Decimal,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub method: Method,
}

impl ScheduleRequest {
    /// Request without a salvage value
    pub fn new(principal: Decimal, start_date: NaiveDate, end_date: NaiveDate, method: Method) -> Self {
        Self {
            principal,
            salvage: Decimal::ZERO,
            start_date,
            end_date,
            method,
        }
    }

    pub fn with_salvage(mut self, salvage: Decimal) -> Self {
        self.salvage = salvage;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Check every input rule and return the month count on success
    pub fn validate(&self) -> Result<u32, ScheduleError> {
        if self.end_date <= self.start_date {
            return Err(ScheduleError::InvalidPeriod);
        }
        let num_months = months_spanned(self.start_date, self.end_date);
        if num_months <= 0 {
            return Err(ScheduleError::InvalidPeriod);
        }
        if self.principal <= Decimal::ZERO {
            return Err(ScheduleError::InvalidPrincipal);
        }
        if self.salvage < Decimal::ZERO {
            return Err(ScheduleError::NegativeSalvage);
        }
        if self.salvage >= self.principal {
            return Err(ScheduleError::InvalidSalvage);
        }
        u32::try_from(num_months).map_err(|_| ScheduleError::InvalidPeriod)
    }

    /// Run the engine on this request
    pub fn compute(&self) -> Result<Schedule, ScheduleError> {
        super::engine::build_schedule(self.clone())
    }
}
