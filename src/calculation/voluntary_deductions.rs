//! Voluntary deduction capping.
//!
//! Pension contributions, mortgage interest and medical fund contributions
//! reduce taxable income, each up to its own cap. Caps are independent: an
//! unused allowance under one cap does not carry to another.

use rust_decimal::Decimal;

use crate::config::VoluntaryCaps;
use crate::models::{AuditStep, SalaryInputs};

use super::rounding::round2;

/// The capped voluntary deductions.
#[derive(Debug, Clone)]
pub struct VoluntaryDeductionsResult {
    /// Pension contribution applied, `min(input, cap)`.
    pub pension_applied: Decimal,
    /// Mortgage interest applied, `min(input, cap)`.
    pub mortgage_applied: Decimal,
    /// Medical fund contribution applied, `min(input, cap)`.
    pub medical_applied: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the voluntary deduction caps to the inputs.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::apply_voluntary_caps;
/// use paye_engine::config::StatutorySchedule;
/// use paye_engine::models::SalaryInputs;
/// use rust_decimal::Decimal;
///
/// let schedule = StatutorySchedule::default();
/// let inputs = SalaryInputs::new(Decimal::new(200_000, 0))
///     .with_pension_contribution(Decimal::new(45_000, 0));
///
/// let result = apply_voluntary_caps(&inputs, &schedule.voluntary_caps, 1);
/// assert_eq!(result.pension_applied, Decimal::new(30_000, 0));
/// assert_eq!(result.mortgage_applied, Decimal::ZERO);
/// ```
pub fn apply_voluntary_caps(
    inputs: &SalaryInputs,
    caps: &VoluntaryCaps,
    step_number: u32,
) -> VoluntaryDeductionsResult {
    let pension = inputs.pension_contribution_or_zero();
    let mortgage = inputs.mortgage_interest_or_zero();
    let medical = inputs.medical_fund_contribution_or_zero();

    let pension_applied = round2(pension.min(caps.pension_contribution));
    let mortgage_applied = round2(mortgage.min(caps.mortgage_interest));
    let medical_applied = round2(medical.min(caps.medical_fund_contribution));
    let total_applied = round2(pension_applied + mortgage_applied + medical_applied);

    let capped: Vec<&str> = [
        ("pension", pension > caps.pension_contribution),
        ("mortgage", mortgage > caps.mortgage_interest),
        ("medical", medical > caps.medical_fund_contribution),
    ]
    .into_iter()
    .filter_map(|(name, hit)| hit.then_some(name))
    .collect();

    let reasoning = if capped.is_empty() {
        format!(
            "Pension KES {}, mortgage KES {}, medical KES {} all within caps, KES {} applied",
            pension_applied.normalize(),
            mortgage_applied.normalize(),
            medical_applied.normalize(),
            total_applied
        )
    } else {
        format!(
            "Pension KES {}, mortgage KES {}, medical KES {} (capped: {}), KES {} applied",
            pension_applied.normalize(),
            mortgage_applied.normalize(),
            medical_applied.normalize(),
            capped.join(", "),
            total_applied
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "voluntary_deductions".to_string(),
        rule_name: "Voluntary Deduction Caps".to_string(),
        input: serde_json::json!({
            "pension_contribution": pension.normalize().to_string(),
            "mortgage_interest": mortgage.normalize().to_string(),
            "medical_fund_contribution": medical.normalize().to_string(),
            "pension_cap": caps.pension_contribution.normalize().to_string(),
            "mortgage_cap": caps.mortgage_interest.normalize().to_string(),
            "medical_cap": caps.medical_fund_contribution.normalize().to_string()
        }),
        output: serde_json::json!({
            "pension_applied": pension_applied.normalize().to_string(),
            "mortgage_applied": mortgage_applied.normalize().to_string(),
            "medical_applied": medical_applied.normalize().to_string(),
            "total_applied": total_applied.to_string(),
            "capped": capped
        }),
        reasoning,
    };

    VoluntaryDeductionsResult {
        pension_applied,
        mortgage_applied,
        medical_applied,
        audit_step,
    }
}
