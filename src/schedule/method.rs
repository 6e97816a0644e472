//! Allocation methods and their per-period charge rules

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;
use super::money::round2;

/// Accounting method used to spread the depreciable base over the asset's life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Equal charge every month
    StraightLine,
    /// 2/N of book value per month, switching to straight-line on the remainder
    DoubleDecliningBalance,
    /// Charge weighted by remaining life over the digit sum N(N+1)/2
    SumOfYearsDigits,
}

impl Method {
    /// Every supported method, in display order
    pub const ALL: [Method; 3] = [
        Method::StraightLine,
        Method::DoubleDecliningBalance,
        Method::SumOfYearsDigits,
    ];

    /// Label shown to users and accepted back by `FromStr`
    pub fn label(&self) -> &'static str {
        match self {
            Method::StraightLine => "Straight-Line",
            Method::DoubleDecliningBalance => "Double Declining Balance",
            Method::SumOfYearsDigits => "Sum-of-the-Years Digits",
        }
    }

    /// Short code used on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Method::StraightLine => "sl",
            Method::DoubleDecliningBalance => "ddb",
            Method::SumOfYearsDigits => "soyd",
        }
    }

    /// Tentative charge for a non-final period, before the salvage clamp.
    ///
    /// `period` is 1-indexed and always < `basis.num_months` here; the final
    /// period is closed by the engine.
    pub(crate) fn tentative_charge(
        &self,
        basis: &Basis,
        period: u32,
        book_value: Decimal,
    ) -> Result<Decimal, ScheduleError> {
        match self {
            Method::StraightLine => Ok(basis.straight_line_charge()),
            Method::DoubleDecliningBalance => declining_balance_charge(basis, period, book_value),
            Method::SumOfYearsDigits => sum_of_years_digits_charge(basis, period),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Method::ALL
            .into_iter()
            .find(|m| m.label() == trimmed || m.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ScheduleError::UnknownMethod(s.to_string()))
    }
}

/// Quantities shared by every period of one schedule
#[derive(Debug, Clone)]
pub(crate) struct Basis {
    pub salvage: Decimal,
    pub num_months: u32,
    /// principal - salvage
    pub depreciable: Decimal,
    /// round2(depreciable / N), constant across the straight-line schedule
    monthly_straight_line: Decimal,
    /// N(N+1)/2
    digit_sum: Decimal,
}

impl Basis {
    pub fn new(principal: Decimal, salvage: Decimal, num_months: u32) -> Self {
        let months = Decimal::from(num_months);
        let depreciable = principal - salvage;
        Self {
            salvage,
            num_months,
            depreciable,
            monthly_straight_line: round2(depreciable / months),
            digit_sum: Decimal::from(u64::from(num_months) * (u64::from(num_months) + 1) / 2),
        }
    }

    fn straight_line_charge(&self) -> Decimal {
        self.monthly_straight_line
    }

    fn remaining_life(&self, period: u32) -> u32 {
        self.num_months - period + 1
    }
}

/// Greater of round2(book_value * 2/N) and straight-line over the remaining life.
fn declining_balance_charge(basis: &Basis, period: u32, book_value: Decimal) -> Result<Decimal, ScheduleError> {
    if book_value <= basis.salvage {
        return Ok(Decimal::ZERO);
    }
    let months = Decimal::from(basis.num_months);
    let declining = book_value
        .checked_mul(Decimal::TWO)
        .and_then(|v| v.checked_div(months))
        .map(round2)
        .ok_or(ScheduleError::AmountOutOfRange)?;

    let remaining = Decimal::from(basis.remaining_life(period));
    let straight_line = book_value
        .checked_sub(basis.salvage)
        .and_then(|v| v.checked_div(remaining))
        .map(round2)
        .ok_or(ScheduleError::AmountOutOfRange)?;

    Ok(declining.max(straight_line))
}

fn sum_of_years_digits_charge(basis: &Basis, period: u32) -> Result<Decimal, ScheduleError> {
    let remaining = Decimal::from(basis.remaining_life(period));
    basis
        .depreciable
        .checked_mul(remaining)
        .and_then(|v| v.checked_div(basis.digit_sum))
        .map(round2)
        .ok_or(ScheduleError::AmountOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_labels_and_codes() {
        assert_eq!("Straight-Line".parse::<Method>().unwrap(), Method::StraightLine);
        assert_eq!("Double Declining Balance".parse::<Method>().unwrap(), Method::DoubleDecliningBalance);
        assert_eq!("Sum-of-the-Years Digits".parse::<Method>().unwrap(), Method::SumOfYearsDigits);
        assert_eq!("DDB".parse::<Method>().unwrap(), Method::DoubleDecliningBalance);
        assert_eq!(" soyd ".parse::<Method>().unwrap(), Method::SumOfYearsDigits);
    }

    #[test]
    fn test_unknown_method_names_offender() {
        let err = "Foo".parse::<Method>().unwrap_err();
        assert_eq!(err, ScheduleError::UnknownMethod("Foo".to_string()));
        assert!(err.to_string().contains("Foo"));
    }

    #[test]
    fn test_display_round_trips_through_label() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_ddb_first_charge_uses_double_rate() {
        let basis = Basis::new(dec!(1000), Decimal::ZERO, 3);
        let charge = Method::DoubleDecliningBalance.tentative_charge(&basis, 1, dec!(1000)).unwrap();
        assert_eq!(charge, dec!(666.67));
    }

    #[test]
    fn test_ddb_switches_to_straight_line_when_larger() {
        // 12 months, rate 1/6: on 100.00 with 2 periods left, DDB gives 16.67
        // but straight-line on the remainder gives 50.00
        let basis = Basis::new(dec!(1200), Decimal::ZERO, 12);
        let charge = Method::DoubleDecliningBalance.tentative_charge(&basis, 11, dec!(100)).unwrap();
        assert_eq!(charge, dec!(50.00));
    }

    #[test]
    fn test_ddb_stops_at_salvage() {
        let basis = Basis::new(dec!(1000), dec!(100), 6);
        let charge = Method::DoubleDecliningBalance.tentative_charge(&basis, 4, dec!(100)).unwrap();
        assert_eq!(charge, Decimal::ZERO);
    }

    #[test]
    fn test_soyd_weights() {
        let basis = Basis::new(dec!(1000), Decimal::ZERO, 4);
        let charges: Vec<_> = (1..=3)
            .map(|p| Method::SumOfYearsDigits.tentative_charge(&basis, p, dec!(1000)).unwrap())
            .collect();
        assert_eq!(charges, vec![dec!(400.00), dec!(300.00), dec!(200.00)]);
    }

    #[test]
    fn test_oversized_amounts_are_errors() {
        let basis = Basis::new(Decimal::MAX, Decimal::ZERO, 12);
        assert_eq!(
            Method::DoubleDecliningBalance.tentative_charge(&basis, 1, Decimal::MAX),
            Err(ScheduleError::AmountOutOfRange)
        );
        assert_eq!(
            Method::SumOfYearsDigits.tentative_charge(&basis, 1, Decimal::MAX),
            Err(ScheduleError::AmountOutOfRange)
        );
        assert!(Method::StraightLine.tentative_charge(&basis, 1, Decimal::MAX).is_ok());
    }
}
