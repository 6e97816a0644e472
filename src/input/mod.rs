//! User input handling: text fields in, validated requests out

mod form;
mod parse;

pub use form::{default_dates, ScheduleForm, DEFAULT_ASSET_NAME};
pub use parse::{parse_currency, parse_flexible_date, SUPPORTED_DATE_FORMATS};

use crate::schedule::ScheduleError;
use thiserror::Error;

/// Problems with user-entered values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid number format: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid date '{0}'. Use 'YYYY-MM-DD' or 'YYYYMMDD'.")]
    InvalidDate(String),

    #[error("Total Cost must be > 0.")]
    NonPositiveCost,

    #[error("Salvage Value cannot be negative.")]
    NegativeSalvage,

    #[error("End Date must be after Start Date.")]
    EndBeforeStart,

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
