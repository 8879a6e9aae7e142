//! Salary entry form state.
//!
//! [`SalaryForm`] is the state a presentation layer keeps while a user types:
//! the last accepted text per field and the current error per field. It
//! produces an immutable [`SalaryInputs`] snapshot for each computation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::calculation::{FieldUpdate, validate_field};
use crate::error::ValidationError;

use super::salary_inputs::{FieldErrors, SalaryField, SalaryInputs};

#[derive(Debug, Clone, PartialEq, Eq)]
struct AcceptedEntry {
    raw: String,
    value: Decimal,
}

/// Raw salary entries and their validation state.
///
/// # Example
///
/// ```
/// use paye_engine::models::{SalaryField, SalaryForm};
/// use rust_decimal::Decimal;
///
/// let mut form = SalaryForm::new();
/// form.enter(SalaryField::BasicSalary, "50000").unwrap();
/// assert!(form.enter(SalaryField::BasicSalary, "12.345").is_err());
///
/// // The rejected text did not overwrite the accepted value.
/// assert_eq!(form.value(SalaryField::BasicSalary), Some(Decimal::new(50_000, 0)));
/// assert!(form.error(SalaryField::BasicSalary).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalaryForm {
    entries: BTreeMap<SalaryField, AcceptedEntry>,
    errors: FieldErrors,
}

impl SalaryForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and, if acceptable, stores `raw` for `field`.
    ///
    /// Rejected text leaves the stored value unchanged and records an error,
    /// which stays on the form until the field is corrected or cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::FieldFormat`] when `raw` is rejected.
    pub fn enter(
        &mut self,
        field: SalaryField,
        raw: &str,
    ) -> Result<FieldUpdate, ValidationError> {
        let update = validate_field(raw, &mut self.errors, field)?;
        match update {
            FieldUpdate::Cleared => {
                self.entries.remove(&field);
            }
            FieldUpdate::Accepted(value) => {
                self.entries.insert(
                    field,
                    AcceptedEntry {
                        raw: raw.to_string(),
                        value,
                    },
                );
            }
        }
        Ok(update)
    }

    /// Returns the accepted value for `field`, if any.
    pub fn value(&self, field: SalaryField) -> Option<Decimal> {
        self.entries.get(&field).map(|entry| entry.value)
    }

    /// Returns the accepted text for `field`, if any.
    pub fn raw(&self, field: SalaryField) -> Option<&str> {
        self.entries.get(&field).map(|entry| entry.raw.as_str())
    }

    /// Returns the current error message for `field`, if any.
    pub fn error(&self, field: SalaryField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns all current field errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns true while any field holds an error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Clears every value and error.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.errors.clear();
    }

    /// Takes an immutable snapshot of the accepted values and current errors.
    pub fn snapshot(&self) -> SalaryInputs {
        SalaryInputs {
            basic_salary: self.value(SalaryField::BasicSalary),
            benefits: self.value(SalaryField::Benefits),
            pension_contribution: self.value(SalaryField::PensionContribution),
            mortgage_interest: self.value(SalaryField::MortgageInterest),
            medical_fund_contribution: self.value(SalaryField::MedicalFundContribution),
            field_errors: self.errors.clone(),
        }
    }
}
