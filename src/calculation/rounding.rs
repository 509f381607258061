//! Monetary rounding.
//!
//! Every monetary formula is evaluated exactly in [`Decimal`] and reduced to
//! whole currency units once, at the very end, by [`truncate`].

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Drops the fractional part of a monetary amount.
///
/// Rounds toward negative infinity. All amounts produced by the calculators
/// are non-negative, where this equals truncation toward zero. Returns `None`
/// when the value does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::truncate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(truncate(Decimal::new(12_999, 1)), Some(1_299));
/// assert_eq!(truncate(Decimal::new(1_000, 0)), Some(1_000));
/// assert_eq!(truncate(Decimal::MAX), None);
/// ```
pub fn truncate(value: Decimal) -> Option<i64> {
    value.floor().to_i64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_truncate_drops_fraction() {
        assert_eq!(truncate(dec("126000.999")), Some(126_000));
        assert_eq!(truncate(dec("0.5")), Some(0));
    }

    #[test]
    fn test_truncate_keeps_whole_values() {
        assert_eq!(truncate(dec("32000.0")), Some(32_000));
        assert_eq!(truncate(Decimal::ZERO), Some(0));
    }

    #[test]
    fn test_truncate_never_rounds_to_nearest() {
        assert_eq!(truncate(dec("2999.9999999")), Some(2_999));
    }

    #[test]
    fn test_truncate_floors_negative_values() {
        assert_eq!(truncate(dec("-0.5")), Some(-1));
    }

    #[test]
    fn test_truncate_out_of_range_is_none() {
        assert_eq!(truncate(dec("9223372036854775808")), None);
        assert_eq!(truncate(dec("9223372036854775807.5")), Some(i64::MAX));
    }
}
