//! Health-fund levy calculation functionality.
//!
//! A flat 2.75% of gross pay with a floor of 300.

use rust_decimal::Decimal;

use crate::config::HealthFundConfig;
use crate::models::AuditStep;

use super::rounding::round2;

/// The result of the health-fund levy calculation.
#[derive(Debug, Clone)]
pub struct HealthFundLevyResult {
    /// The levy, rounded to 2 decimals.
    pub levy: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the health-fund levy: `round2(max(gross × rate, minimum))`.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_health_fund_levy;
/// use paye_engine::config::StatutorySchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = StatutorySchedule::default();
/// let result = calculate_health_fund_levy(Decimal::new(5_000, 0), &schedule.health_fund, 1);
/// assert_eq!(result.levy, Decimal::new(300, 0));
/// ```
pub fn calculate_health_fund_levy(
    gross: Decimal,
    config: &HealthFundConfig,
    step_number: u32,
) -> HealthFundLevyResult {
    let proportional = gross * config.rate;
    let floor_applied = proportional < config.minimum;
    let levy = round2(proportional.max(config.minimum));

    let reasoning = if floor_applied {
        format!(
            "KES {} × {} = KES {} is below the minimum, levy is KES {}",
            gross.normalize(),
            config.rate.normalize(),
            proportional.normalize(),
            levy
        )
    } else {
        format!(
            "KES {} × {} = KES {}",
            gross.normalize(),
            config.rate.normalize(),
            levy
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "health_fund_levy".to_string(),
        rule_name: "Health Fund Levy".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "rate": config.rate.normalize().to_string(),
            "minimum": config.minimum.normalize().to_string()
        }),
        output: serde_json::json!({
            "proportional": proportional.normalize().to_string(),
            "floor_applied": floor_applied,
            "levy": levy.to_string()
        }),
        reasoning,
    };

    HealthFundLevyResult { levy, audit_step }
}
