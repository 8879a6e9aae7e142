//! Taxable income derivation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::rounding::round2;

/// The statutory levies and applied voluntary deductions subtracted from gross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deductions {
    /// Pension-fund levy.
    pub pension_fund_levy: Decimal,
    /// Health-fund levy.
    pub health_fund_levy: Decimal,
    /// Housing levy.
    pub housing_levy: Decimal,
    /// Pension contribution after capping.
    pub pension_applied: Decimal,
    /// Mortgage interest after capping.
    pub mortgage_applied: Decimal,
    /// Medical fund contribution after capping.
    pub medical_applied: Decimal,
}

impl Deductions {
    /// Sum of all six deductions, unrounded.
    pub fn sum(&self) -> Decimal {
        self.pension_fund_levy
            + self.health_fund_levy
            + self.housing_levy
            + self.pension_applied
            + self.mortgage_applied
            + self.medical_applied
    }
}

/// The result of the taxable income calculation.
#[derive(Debug, Clone)]
pub struct TaxableIncomeResult {
    /// Gross minus every deduction, rounded. May be negative.
    pub taxable: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Derives taxable income as `round2(gross − deductions)`.
///
/// A negative figure is returned as is; the band calculator handles it.
pub fn calculate_taxable_income(
    gross: Decimal,
    deductions: &Deductions,
    step_number: u32,
) -> TaxableIncomeResult {
    let taxable = round2(gross - deductions.sum());

    let audit_step = AuditStep {
        step_number,
        rule_id: "taxable_income".to_string(),
        rule_name: "Taxable Income".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "pension_fund_levy": deductions.pension_fund_levy.to_string(),
            "health_fund_levy": deductions.health_fund_levy.to_string(),
            "housing_levy": deductions.housing_levy.to_string(),
            "pension_applied": deductions.pension_applied.to_string(),
            "mortgage_applied": deductions.mortgage_applied.to_string(),
            "medical_applied": deductions.medical_applied.to_string()
        }),
        output: serde_json::json!({
            "taxable": taxable.to_string(),
            "negative": taxable.is_sign_negative() && !taxable.is_zero()
        }),
        reasoning: format!(
            "KES {} − KES {} deductions = KES {}",
            gross.normalize(),
            deductions.sum().normalize(),
            taxable
        ),
    };

    TaxableIncomeResult {
        taxable,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn levies_only(pension: &str, health: &str, housing: &str) -> Deductions {
        Deductions {
            pension_fund_levy: dec(pension),
            health_fund_levy: dec(health),
            housing_levy: dec(housing),
            pension_applied: Decimal::ZERO,
            mortgage_applied: Decimal::ZERO,
            medical_applied: Decimal::ZERO,
        }
    }

    #[test]
    fn test_taxable_for_example_salary() {
        let result =
            calculate_taxable_income(dec("50000"), &levies_only("3000", "1375", "750"), 5);
        assert_eq!(result.taxable, dec("44875.00"));
        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(result.audit_step.output["negative"], false);
    }

    #[test]
    fn test_negative_taxable_is_not_clamped() {
        let deductions = Deductions {
            pension_applied: dec("30000"),
            mortgage_applied: dec("25000"),
            medical_applied: dec("15000"),
            ..levies_only("300", "300", "75")
        };
        let result = calculate_taxable_income(dec("5000"), &deductions, 1);
        assert_eq!(result.taxable, dec("-65675.00"));
        assert_eq!(result.audit_step.output["negative"], true);
    }
}
