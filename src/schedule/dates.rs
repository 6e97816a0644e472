//! Calendar-month period arithmetic

use chrono::{Datelike, Months, NaiveDate};

/// Inclusive count of calendar months touched by `[start, end]`.
///
/// Counts months, not elapsed days: Jan 15 to Mar 1 is 3.
pub fn months_spanned(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months + 1
}

/// Date of 1-indexed `period`: `start + (period - 1)` months, day clamped to
/// the end of a shorter month.
///
/// Returns `None` only past chrono's representable range.
pub fn period_date(start: NaiveDate, period: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(period.saturating_sub(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_spanned() {
        assert_eq!(months_spanned(date(2024, 1, 1), date(2024, 12, 31)), 12);
        assert_eq!(months_spanned(date(2024, 1, 15), date(2024, 3, 1)), 3);
        assert_eq!(months_spanned(date(2024, 5, 1), date(2024, 5, 20)), 1);
        assert_eq!(months_spanned(date(2023, 11, 30), date(2025, 2, 1)), 16);
        assert_eq!(months_spanned(date(2024, 3, 1), date(2024, 1, 1)), -1);
    }

    #[test]
    fn test_period_date_clamps_to_month_end() {
        let start = date(2024, 1, 31);
        assert_eq!(period_date(start, 1), Some(date(2024, 1, 31)));
        assert_eq!(period_date(start, 2), Some(date(2024, 2, 29)));
        assert_eq!(period_date(start, 3), Some(date(2024, 3, 31)));
        assert_eq!(period_date(start, 4), Some(date(2024, 4, 30)));
        assert_eq!(period_date(date(2023, 1, 31), 2), Some(date(2023, 2, 28)));
    }

    #[test]
    fn test_period_date_keeps_anniversary_day() {
        let start = date(2024, 1, 15);
        assert_eq!(period_date(start, 13), Some(date(2025, 1, 15)));
    }
}
