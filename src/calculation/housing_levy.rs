//! Housing levy calculation functionality.

use rust_decimal::Decimal;

use crate::config::HousingLevyConfig;
use crate::models::AuditStep;

use super::rounding::round2;

/// The result of the housing levy calculation.
#[derive(Debug, Clone)]
pub struct HousingLevyResult {
    /// The levy, rounded to 2 decimals.
    pub levy: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the housing levy: `round2(gross × rate)`, with no floor or cap.
pub fn calculate_housing_levy(
    gross: Decimal,
    config: &HousingLevyConfig,
    step_number: u32,
) -> HousingLevyResult {
    let levy = round2(gross * config.rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "housing_levy".to_string(),
        rule_name: "Housing Levy".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "rate": config.rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "levy": levy.to_string()
        }),
        reasoning: format!(
            "KES {} × {} = KES {}",
            gross.normalize(),
            config.rate.normalize(),
            levy
        ),
    };

    HousingLevyResult { levy, audit_step }
}
