//! Input validation for salary fields.
//!
//! Raw field text is accepted when it is empty (the field is cleared) or a
//! plain non-negative decimal with at most 2 fractional digits and a value no
//! greater than 100,000,000. Anything else is rejected with
//! [`ValidationError::FieldFormat`] and an error is recorded against the field;
//! the previously accepted value is kept.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{FIELD_FORMAT_MESSAGE, ValidationError};
use crate::models::{FieldErrors, SalaryField, SalaryInputs};

/// The largest value any salary field accepts.
pub const MAX_FIELD_VALUE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Maximum number of fractional digits any salary field accepts.
pub const MAX_FIELD_DECIMALS: u32 = 2;

static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("amount pattern is a valid regex")
});

/// An accepted change to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Empty text: the field is cleared and counts as zero.
    Cleared,
    /// The text is a valid amount.
    Accepted(Decimal),
}

/// Validates raw text for `field`, updating `errors` for that field.
///
/// Accepting (or clearing) removes any error previously recorded for the
/// field; rejecting records [`FIELD_FORMAT_MESSAGE`] against it.
///
/// # Errors
///
/// Returns [`ValidationError::FieldFormat`] when the text is rejected.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::{validate_field, FieldUpdate};
/// use paye_engine::error::ValidationError;
/// use paye_engine::models::{FieldErrors, SalaryField};
/// use rust_decimal::Decimal;
///
/// let mut errors = FieldErrors::new();
///
/// let rejected = validate_field("12.345", &mut errors, SalaryField::Benefits);
/// assert!(matches!(rejected, Err(ValidationError::FieldFormat { .. })));
/// assert!(errors.contains_key(&SalaryField::Benefits));
///
/// let update = validate_field("12.34", &mut errors, SalaryField::Benefits);
/// assert_eq!(update, Ok(FieldUpdate::Accepted(Decimal::new(1234, 2))));
/// assert!(errors.is_empty());
/// ```
pub fn validate_field(
    raw: &str,
    errors: &mut FieldErrors,
    field: SalaryField,
) -> Result<FieldUpdate, ValidationError> {
    if raw.is_empty() {
        errors.remove(&field);
        return Ok(FieldUpdate::Cleared);
    }

    match parse_amount(raw) {
        Some(value) => {
            errors.remove(&field);
            Ok(FieldUpdate::Accepted(value))
        }
        None => {
            warn!(field = %field, value = raw, "Rejected salary field input");
            errors.insert(field, FIELD_FORMAT_MESSAGE.to_string());
            Err(ValidationError::FieldFormat {
                field,
                raw: raw.to_string(),
                message: FIELD_FORMAT_MESSAGE.to_string(),
            })
        }
    }
}

/// Checks a decimal supplied directly (not typed as text) against the same rules.
///
/// Returns the field error message when the value is negative, has more than
/// 2 fractional digits, or exceeds [`MAX_FIELD_VALUE`].
pub fn validate_amount(value: Decimal) -> Result<(), String> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(FIELD_FORMAT_MESSAGE.to_string());
    }
    if value.normalize().scale() > MAX_FIELD_DECIMALS {
        return Err(FIELD_FORMAT_MESSAGE.to_string());
    }
    if value > MAX_FIELD_VALUE {
        return Err(FIELD_FORMAT_MESSAGE.to_string());
    }
    Ok(())
}

/// Collects every outstanding problem with `inputs`.
///
/// This is the union of the errors recorded during entry and the errors of
/// any present value that fails [`validate_amount`].
pub fn collect_field_errors(inputs: &SalaryInputs) -> FieldErrors {
    let mut errors = inputs.field_errors.clone();
    for field in SalaryField::ALL {
        if let Some(value) = inputs.get(field) {
            if let Err(message) = validate_amount(value) {
                errors.entry(field).or_insert(message);
            }
        }
    }
    errors
}

fn parse_amount(raw: &str) -> Option<Decimal> {
    if !AMOUNT_PATTERN.is_match(raw) {
        return None;
    }
    let value = Decimal::from_str(raw).ok()?;
    (value <= MAX_FIELD_VALUE).then_some(value)
}
