//! Core schedule engine: one fold over calendar months for every method

use chrono::NaiveDate;
use log::{debug, trace};
use rust_decimal::Decimal;

use super::dates::period_date;
use super::error::ScheduleError;
use super::method::{Basis, Method};
use super::money::to_money;
use super::period::{Period, PeriodKind, Schedule};
use super::request::ScheduleRequest;

/// Compute the schedule for an asset.
///
/// Pass `Decimal::ZERO` as `salvage` when the asset has no salvage value.
/// Validation happens before any row is produced; no partial schedule is
/// ever returned.
pub fn compute_schedule(
    principal: Decimal,
    salvage: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
    method: Method,
) -> Result<Schedule, ScheduleError> {
    let request = ScheduleRequest::new(principal, start_date, end_date, method).with_salvage(salvage);
    build_schedule(request)
}

/// Same as [`compute_schedule`] with the method given by label or short code.
///
/// Period and amount rules are checked before the method name.
pub fn compute_schedule_by_name(
    principal: Decimal,
    salvage: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
    method: &str,
) -> Result<Schedule, ScheduleError> {
    let mut request =
        ScheduleRequest::new(principal, start_date, end_date, Method::StraightLine).with_salvage(salvage);
    request.validate()?;
    request.method = method.parse()?;
    build_schedule(request)
}

pub(crate) fn build_schedule(request: ScheduleRequest) -> Result<Schedule, ScheduleError> {
    let num_months = request.validate()?;
    debug!(
        "Computing {} schedule: principal={} salvage={} months={}",
        request.method, request.principal, request.salvage, num_months
    );

    let basis = Basis::new(request.principal, request.salvage, num_months);
    let opening = Period {
        period: 0,
        date: request.start_date,
        kind: PeriodKind::Initial,
        expense: to_money(Decimal::ZERO),
        accumulated: to_money(Decimal::ZERO),
        book_value: to_money(request.principal),
    };

    let mut rows = Vec::with_capacity(num_months as usize + 1);
    rows.push(opening.clone());

    let (rows, last) = (1..=num_months).try_fold((rows, opening), |(mut rows, prior), period| {
        let row = next_period(&request, &basis, &prior, period)?;
        rows.push(row.clone());
        Ok::<_, ScheduleError>((rows, row))
    })?;

    debug!(
        "{} schedule complete: {} rows, final book value {}",
        request.method,
        rows.len(),
        last.book_value
    );

    Ok(Schedule::new(request, rows))
}

/// Derive row `period` from the row before it.
fn next_period(
    request: &ScheduleRequest,
    basis: &Basis,
    prior: &Period,
    period: u32,
) -> Result<Period, ScheduleError> {
    let date = period_date(request.start_date, period).ok_or(ScheduleError::InvalidPeriod)?;

    // Nothing may take book value below salvage
    let headroom = prior
        .book_value
        .checked_sub(basis.salvage)
        .ok_or(ScheduleError::AmountOutOfRange)?;
    let expense = to_money(if period == basis.num_months {
        headroom
    } else {
        request
            .method
            .tentative_charge(basis, period, prior.book_value)?
            .min(headroom)
            .max(Decimal::ZERO)
    });

    let row = Period {
        period,
        date,
        kind: PeriodKind::Amortization,
        expense,
        accumulated: prior
            .accumulated
            .checked_add(expense)
            .ok_or(ScheduleError::AmountOutOfRange)?,
        book_value: prior
            .book_value
            .checked_sub(expense)
            .ok_or(ScheduleError::AmountOutOfRange)?,
    };
    trace!(
        "period {} {}: expense={} accumulated={} book={}",
        row.period, row.date, row.expense, row.accumulated, row.book_value
    );
    Ok(row)
}
