//! Personal relief application.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::rounding::round2;

/// The result of applying personal relief.
#[derive(Debug, Clone)]
pub struct PersonalReliefResult {
    /// Tax payable after relief, never negative.
    pub paye_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Subtracts the relief from band tax: `max(0, round2(tax − relief))`.
///
/// Relief can only reduce tax to zero; the unused part is not refundable.
pub fn apply_personal_relief(
    tax_before_relief: Decimal,
    relief: Decimal,
    step_number: u32,
) -> PersonalReliefResult {
    let net_of_relief = round2(tax_before_relief - relief);
    let clamped = net_of_relief < Decimal::ZERO;
    let paye_tax = if clamped {
        round2(Decimal::ZERO)
    } else {
        net_of_relief
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "personal_relief".to_string(),
        rule_name: "Personal Relief".to_string(),
        input: serde_json::json!({
            "tax_before_relief": tax_before_relief.to_string(),
            "personal_relief": relief.normalize().to_string()
        }),
        output: serde_json::json!({
            "paye_tax": paye_tax.to_string(),
            "clamped_to_zero": clamped
        }),
        reasoning: if clamped {
            format!(
                "KES {} − KES {} relief = KES {}, payable tax clamped to KES 0.00",
                tax_before_relief,
                relief.normalize(),
                net_of_relief
            )
        } else {
            format!(
                "KES {} − KES {} relief = KES {}",
                tax_before_relief,
                relief.normalize(),
                paye_tax
            )
        },
    };

    PersonalReliefResult {
        paye_tax,
        audit_step,
    }
}
