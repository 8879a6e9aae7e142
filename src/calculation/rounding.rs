//! Monetary rounding.
//!
//! Every intermediate amount is rounded to cents straight after the operation
//! that produced it. Rounding once at the end gives different cent-level
//! results for some inputs, so callers must not defer it.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept on monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Rounds to 2 decimals, halves away from zero, always carrying scale 2.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round2(Decimal::from_str("3762.6").unwrap()).to_string(), "3762.60");
/// assert_eq!(round2(Decimal::from_str("0.0075").unwrap()).to_string(), "0.01");
/// assert_eq!(round2(Decimal::from_str("-0.125").unwrap()).to_string(), "-0.13");
/// ```
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_numbers_gain_two_decimals() {
        assert_eq!(round2(dec("480")).to_string(), "480.00");
        assert_eq!(round2(Decimal::ZERO).to_string(), "0.00");
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round2(dec("1.005")), dec("1.01"));
        assert_eq!(round2(dec("2.345")), dec("2.35"));
        assert_eq!(round2(dec("-2.345")), dec("-2.35"));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round2(dec("1.0049")), dec("1.00"));
        assert_eq!(round2(dec("137.5")), dec("137.50"));
    }
}
