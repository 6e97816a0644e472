//! Schedule engine: straight-line, double-declining-balance and
//! sum-of-the-years'-digits allocation over calendar months

mod dates;
mod engine;
mod error;
mod method;
mod money;
mod period;
mod request;

pub use dates::{months_spanned, period_date};
pub use engine::{compute_schedule, compute_schedule_by_name};
pub use error::ScheduleError;
pub use method::Method;
pub use money::{round2, MONEY_SCALE};
pub use period::{Period, PeriodKind, Schedule, ScheduleSummary, COLUMNS};
pub use request::ScheduleRequest;
