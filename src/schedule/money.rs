//! Monetary quantization

use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits carried by every charge
pub const MONEY_SCALE: u32 = 2;

/// Round half-up to cents, always carrying two fraction digits.
///
/// Charges are never negative, so away-from-zero is half-up here.
pub fn round2(value: Decimal) -> Decimal {
    to_money(value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero))
}

/// Rescale an exact amount to two fraction digits without changing its value
/// when it already fits; used for display-stable zero and principal columns.
pub(crate) fn to_money(value: Decimal) -> Decimal {
    let mut v = value;
    if v.scale() < MONEY_SCALE {
        v.rescale(MONEY_SCALE);
    }
    v
}
