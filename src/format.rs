//! Display formatting for monetary amounts.
//!
//! Formatting never feeds back into a calculation: results keep their full
//! stored precision and these helpers only produce text.

use rust_decimal::Decimal;

use crate::calculation::round2;

/// Groups the integer digits of `value` in thousands, keeping its fractional digits.
///
/// # Examples
///
/// ```
/// use paye_engine::format::group_thousands;
/// use rust_decimal::Decimal;
///
/// assert_eq!(group_thousands(Decimal::new(500_001, 0)), "500,001");
/// assert_eq!(group_thousands(Decimal::new(-123_456_789, 2)), "-1,234,567.89");
/// ```
pub fn group_thousands(value: Decimal) -> String {
    let digits = value.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if value.is_sign_negative() && !value.is_zero() {
        grouped.push('-');
    }
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Formats an amount with grouped thousands and exactly 2 decimals.
pub fn format_amount(value: Decimal) -> String {
    group_thousands(round2(value))
}

/// Formats an amount with a currency-code prefix, e.g. "KES 39,029.15".
pub fn format_currency(currency: &str, value: Decimal) -> String {
    format!("{currency} {}", format_amount(value))
}
