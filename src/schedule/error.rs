use thiserror::Error;

/// Reasons a schedule cannot be produced for a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Invalid lease period. The end date must be after the start date.")]
    InvalidPeriod,

    #[error("Salvage value cannot be greater than or equal to the total cost.")]
    InvalidSalvage,

    #[error("Total cost must be greater than zero.")]
    InvalidPrincipal,

    #[error("Salvage value cannot be negative.")]
    NegativeSalvage,

    #[error("Amount is too large to schedule.")]
    AmountOutOfRange,

    #[error("Unknown amortization method: {0}")]
    UnknownMethod(String),
}
