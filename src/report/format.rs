use rust_decimal::Decimal;

use crate::schedule::round2;

/// Two fraction digits with comma thousands grouping: `1,234,567.89`
pub fn format_amount(value: Decimal) -> String {
    let fixed = format!("{:.2}", round2(value).abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && !round2(value).is_zero() { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(1000)), "1,000.00");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(999999.995)), "1,000,000.00");
        assert_eq!(format_amount(dec!(-12345.5)), "-12,345.50");
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
    }
}
