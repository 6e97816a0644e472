//! Free-text parsing for amounts and dates

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::InputError;

/// Date formats accepted from users, tried in order
pub const SUPPORTED_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parse `YYYY-MM-DD` or `YYYYMMDD`, ignoring surrounding whitespace
pub fn parse_flexible_date(text: &str) -> Result<NaiveDate, InputError> {
    let trimmed = text.trim();
    SUPPORTED_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| InputError::InvalidDate(trimmed.to_string()))
}

/// Parse a user-typed amount such as `Rp 1.250.000,50`, `$1,250,000.50` or `12,50`.
///
/// Everything except digits, separators and a minus sign is dropped. When
/// both `.` and `,` appear, whichever comes last is the decimal point. A lone
/// `,` followed by exactly two digits is a decimal comma; any other commas
/// are grouping. Blank input is zero.
pub fn parse_currency(text: &str) -> Result<Decimal, InputError> {
    let negative = text.trim_start().starts_with('-');
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    if cleaned.is_empty() {
        return if text.trim().is_empty() {
            Ok(Decimal::ZERO)
        } else {
            Err(InputError::InvalidNumber(text.trim().to_string()))
        };
    }

    let normalized = match (cleaned.rfind('.'), cleaned.rfind(',')) {
        (Some(dot), Some(comma)) if dot > comma => cleaned.replace(',', ""),
        (Some(_), Some(_)) => cleaned.replace('.', "").replace(',', "."),
        (None, Some(_)) => {
            let parts: Vec<&str> = cleaned.split(',').collect();
            if parts.len() == 2 && parts[1].len() == 2 {
                cleaned.replace(',', ".")
            } else {
                cleaned.replace(',', "")
            }
        }
        _ => cleaned,
    };

    let value = Decimal::from_str(&normalized).map_err(|_| InputError::InvalidNumber(text.trim().to_string()))?;
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(parse_flexible_date("2024-03-09").unwrap(), expected);
        assert_eq!(parse_flexible_date(" 20240309 ").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        for bad in ["03/09/2024", "2024-02-30", "", "yesterday"] {
            assert!(
                matches!(parse_flexible_date(bad), Err(InputError::InvalidDate(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_currency_separators() {
        assert_eq!(parse_currency("1,250,000.50").unwrap(), dec!(1250000.50));
        assert_eq!(parse_currency("Rp 1.250.000,50").unwrap(), dec!(1250000.50));
        assert_eq!(parse_currency("12,50").unwrap(), dec!(12.50));
        assert_eq!(parse_currency("1,250").unwrap(), dec!(1250));
        assert_eq!(parse_currency("1,250,000").unwrap(), dec!(1250000));
        assert_eq!(parse_currency("$ 99.9").unwrap(), dec!(99.9));
    }

    #[test]
    fn test_parse_currency_blank_is_zero() {
        assert_eq!(parse_currency("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_currency("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_currency_keeps_sign() {
        assert_eq!(parse_currency("-150.25").unwrap(), dec!(-150.25));
    }

    #[test]
    fn test_parse_currency_rejects_garbage() {
        assert!(matches!(parse_currency("abc"), Err(InputError::InvalidNumber(_))));
        assert!(matches!(parse_currency("1.2.3"), Err(InputError::InvalidNumber(_))));
    }
}
