//! Salary input models.
//!
//! This module defines the [`SalaryField`] identifiers and the immutable
//! [`SalaryInputs`] snapshot handed to the engine for each computation.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies one of the five salary input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryField {
    /// Basic monthly salary (required, strictly positive).
    BasicSalary,
    /// Benefits and allowances added to basic salary to form gross pay.
    Benefits,
    /// Voluntary pension contribution.
    PensionContribution,
    /// Mortgage interest paid.
    MortgageInterest,
    /// Contribution to a post-retirement medical fund.
    MedicalFundContribution,
}

impl SalaryField {
    /// All fields in form order.
    pub const ALL: [SalaryField; 5] = [
        SalaryField::BasicSalary,
        SalaryField::Benefits,
        SalaryField::PensionContribution,
        SalaryField::MortgageInterest,
        SalaryField::MedicalFundContribution,
    ];

    /// The machine name used in serialized output and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryField::BasicSalary => "basic_salary",
            SalaryField::Benefits => "benefits",
            SalaryField::PensionContribution => "pension_contribution",
            SalaryField::MortgageInterest => "mortgage_interest",
            SalaryField::MedicalFundContribution => "medical_fund_contribution",
        }
    }

    /// The human-readable label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            SalaryField::BasicSalary => "Basic Salary",
            SalaryField::Benefits => "Benefits/Allowances",
            SalaryField::PensionContribution => "Pension Contribution",
            SalaryField::MortgageInterest => "Mortgage Interest",
            SalaryField::MedicalFundContribution => "Medical Fund",
        }
    }
}

impl fmt::Display for SalaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages, keyed by field.
pub type FieldErrors = BTreeMap<SalaryField, String>;

/// An immutable snapshot of the salary inputs for one computation.
///
/// Absent optional fields count as zero. `basic_salary` must be present and
/// strictly positive for a computation to proceed. `field_errors` carries any
/// errors the validator recorded while the values were being entered; the
/// engine refuses to compute while it is non-empty.
///
/// # Example
///
/// ```
/// use paye_engine::models::SalaryInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = SalaryInputs::new(Decimal::new(50_000, 0))
///     .with_benefits(Decimal::new(5_000, 0))
///     .with_pension_contribution(Decimal::new(2_000, 0));
///
/// assert_eq!(inputs.gross(), Decimal::new(55_000, 0));
/// assert_eq!(inputs.mortgage_interest_or_zero(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInputs {
    /// Basic salary.
    #[serde(default)]
    pub basic_salary: Option<Decimal>,
    /// Benefits and allowances.
    #[serde(default)]
    pub benefits: Option<Decimal>,
    /// Voluntary pension contribution before capping.
    #[serde(default)]
    pub pension_contribution: Option<Decimal>,
    /// Mortgage interest before capping.
    #[serde(default)]
    pub mortgage_interest: Option<Decimal>,
    /// Medical fund contribution before capping.
    #[serde(default)]
    pub medical_fund_contribution: Option<Decimal>,
    /// Unresolved field errors recorded during entry.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: FieldErrors,
}

impl SalaryInputs {
    /// Creates inputs with the given basic salary and every other field absent.
    pub fn new(basic_salary: Decimal) -> Self {
        Self {
            basic_salary: Some(basic_salary),
            ..Self::default()
        }
    }

    /// Sets benefits and allowances.
    pub fn with_benefits(mut self, amount: Decimal) -> Self {
        self.benefits = Some(amount);
        self
    }

    /// Sets the voluntary pension contribution.
    pub fn with_pension_contribution(mut self, amount: Decimal) -> Self {
        self.pension_contribution = Some(amount);
        self
    }

    /// Sets the mortgage interest.
    pub fn with_mortgage_interest(mut self, amount: Decimal) -> Self {
        self.mortgage_interest = Some(amount);
        self
    }

    /// Sets the medical fund contribution.
    pub fn with_medical_fund_contribution(mut self, amount: Decimal) -> Self {
        self.medical_fund_contribution = Some(amount);
        self
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, field: SalaryField) -> Option<Decimal> {
        match field {
            SalaryField::BasicSalary => self.basic_salary,
            SalaryField::Benefits => self.benefits,
            SalaryField::PensionContribution => self.pension_contribution,
            SalaryField::MortgageInterest => self.mortgage_interest,
            SalaryField::MedicalFundContribution => self.medical_fund_contribution,
        }
    }

    /// Returns benefits, or zero when absent.
    pub fn benefits_or_zero(&self) -> Decimal {
        self.benefits.unwrap_or(Decimal::ZERO)
    }

    /// Returns the pension contribution, or zero when absent.
    pub fn pension_contribution_or_zero(&self) -> Decimal {
        self.pension_contribution.unwrap_or(Decimal::ZERO)
    }

    /// Returns the mortgage interest, or zero when absent.
    pub fn mortgage_interest_or_zero(&self) -> Decimal {
        self.mortgage_interest.unwrap_or(Decimal::ZERO)
    }

    /// Returns the medical fund contribution, or zero when absent.
    pub fn medical_fund_contribution_or_zero(&self) -> Decimal {
        self.medical_fund_contribution.unwrap_or(Decimal::ZERO)
    }

    /// Gross pay: basic salary plus benefits, absent values counting as zero.
    pub fn gross(&self) -> Decimal {
        self.basic_salary.unwrap_or(Decimal::ZERO) + self.benefits_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_absent_fields_default_to_zero() {
        let inputs = SalaryInputs::new(dec("5000"));
        assert_eq!(inputs.benefits_or_zero(), Decimal::ZERO);
        assert_eq!(inputs.pension_contribution_or_zero(), Decimal::ZERO);
        assert_eq!(inputs.mortgage_interest_or_zero(), Decimal::ZERO);
        assert_eq!(inputs.medical_fund_contribution_or_zero(), Decimal::ZERO);
        assert_eq!(inputs.gross(), dec("5000"));
    }

    #[test]
    fn test_get_returns_each_field() {
        let inputs = SalaryInputs::new(dec("1"))
            .with_benefits(dec("2"))
            .with_pension_contribution(dec("3"))
            .with_mortgage_interest(dec("4"))
            .with_medical_fund_contribution(dec("5"));

        let values: Vec<_> = SalaryField::ALL
            .iter()
            .map(|field| inputs.get(*field).unwrap())
            .collect();
        assert_eq!(values, vec![dec("1"), dec("2"), dec("3"), dec("4"), dec("5")]);
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let json = r#"{ "basic_salary": "50000.00", "benefits": "1500.50" }"#;
        let inputs: SalaryInputs = serde_json::from_str(json).unwrap();

        assert_eq!(inputs.basic_salary, Some(dec("50000.00")));
        assert_eq!(inputs.benefits, Some(dec("1500.50")));
        assert_eq!(inputs.pension_contribution, None);
        assert!(inputs.field_errors.is_empty());
    }

    #[test]
    fn test_field_names_and_labels() {
        assert_eq!(SalaryField::BasicSalary.to_string(), "basic_salary");
        assert_eq!(
            serde_json::to_string(&SalaryField::MedicalFundContribution).unwrap(),
            "\"medical_fund_contribution\""
        );
        assert_eq!(SalaryField::Benefits.label(), "Benefits/Allowances");
    }
}
