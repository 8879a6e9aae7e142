//! Calculation result models for the PAYE engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures: the per-band tax breakdown and the audit trace recording how
//! each figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the progressive tax breakdown.
///
/// # Example
///
/// ```
/// use paye_engine::models::TaxBandEntry;
/// use rust_decimal::Decimal;
///
/// let entry = TaxBandEntry {
///     range_label: "Up to KES 24,000".to_string(),
///     amount_taxed_in_band: Decimal::new(24_000, 0),
///     rate: Decimal::new(10, 0),
///     tax_in_band: Decimal::new(240_000, 2),
/// };
/// assert_eq!(entry.rate_label(), "10%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBandEntry {
    /// Display label for the income range, e.g. "KES 24,001 - 32,333".
    pub range_label: String,
    /// The portion of taxable income taxed in this band (may be negative in band 1).
    pub amount_taxed_in_band: Decimal,
    /// The marginal rate, expressed as a percentage (e.g. 32.5).
    pub rate: Decimal,
    /// Tax attributable to this band, rounded to 2 decimals.
    pub tax_in_band: Decimal,
}

impl TaxBandEntry {
    /// Returns the rate formatted for display, e.g. "32.5%".
    pub fn rate_label(&self) -> String {
        format!("{}%", self.rate.normalize())
    }
}

/// The complete, itemized result of one net pay computation.
///
/// Produced atomically by the engine and never mutated afterwards. All
/// monetary fields are rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Basic salary plus benefits.
    pub gross: Decimal,
    /// Gross minus statutory levies and capped voluntary deductions (may be negative).
    pub taxable: Decimal,
    /// Income tax payable after personal relief, never negative.
    pub paye_tax: Decimal,
    /// Sum of the band taxes before personal relief (may be negative).
    pub tax_before_relief: Decimal,
    /// Pension-fund levy.
    pub pension_fund_levy: Decimal,
    /// Health-fund levy.
    pub health_fund_levy: Decimal,
    /// Housing levy.
    pub housing_levy: Decimal,
    /// Voluntary pension contribution after capping.
    pub pension_deduction_applied: Decimal,
    /// Mortgage interest after capping.
    pub mortgage_deduction_applied: Decimal,
    /// Medical fund contribution after capping.
    pub medical_deduction_applied: Decimal,
    /// Payable tax plus every levy and applied deduction.
    pub total_deductions: Decimal,
    /// Gross minus total deductions. Not floored at zero.
    pub net_pay: Decimal,
    /// The personal relief subtracted from the band tax.
    pub personal_relief: Decimal,
    /// Per-band breakdown, ascending.
    pub tax_band_breakdown: Vec<TaxBandEntry>,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered audit trace for one computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Returns the step recorded for a rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|step| step.rule_id == rule_id)
    }
}

/// A result together with the audit trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedCalculation {
    /// The computed result.
    pub result: CalculationResult,
    /// How each figure in the result was reached.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rate_label_drops_trailing_zeros() {
        let entry = TaxBandEntry {
            range_label: "KES 500,001 - 800,000".to_string(),
            amount_taxed_in_band: dec("1000.00"),
            rate: dec("32.500"),
            tax_in_band: dec("325.00"),
        };
        assert_eq!(entry.rate_label(), "32.5%");
    }

    #[test]
    fn test_band_entry_serializes_decimals_as_strings() {
        let entry = TaxBandEntry {
            range_label: "Up to KES 24,000".to_string(),
            amount_taxed_in_band: dec("4325.00"),
            rate: dec("10"),
            tax_in_band: dec("432.50"),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["amount_taxed_in_band"], "4325.00");
        assert_eq!(json["tax_in_band"], "432.50");
        assert_eq!(json["range_label"], "Up to KES 24,000");
    }

    #[test]
    fn test_audit_trace_finds_step_by_rule() {
        let trace = AuditTrace {
            steps: vec![AuditStep {
                step_number: 1,
                rule_id: "housing_levy".to_string(),
                rule_name: "Housing Levy".to_string(),
                input: serde_json::json!({}),
                output: serde_json::json!({}),
                reasoning: String::new(),
            }],
        };
        assert_eq!(trace.step("housing_levy").unwrap().step_number, 1);
        assert!(trace.step("net_pay").is_none());
    }
}
