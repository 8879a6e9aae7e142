//! Pension-fund levy calculation functionality.
//!
//! The levy is tiered against gross pay:
//!
//! - **Tier 1:** pay up to the lower earnings limit (8,000) at 6%, so at most 480.
//! - **Tier 2:** pay between the lower and upper earnings limit (72,000) at 6%.
//!
//! Pay above the upper earnings limit is not levied, which saturates the levy
//! at 4,320.

use rust_decimal::Decimal;

use crate::config::PensionFundConfig;
use crate::models::AuditStep;

use super::rounding::round2;

/// The result of the pension-fund levy calculation.
#[derive(Debug, Clone)]
pub struct PensionFundLevyResult {
    /// The levy, rounded to 2 decimals.
    pub levy: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the pension-fund levy on gross pay.
///
/// Below the lower earnings limit the levy is `round2(gross × rate)`. Above
/// it, tier 1 contributes `round2(lower limit × rate)` and tier 2 contributes
/// `round2((min(gross, upper limit) − lower limit) × rate)`; their sum is
/// rounded again.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_pension_fund_levy;
/// use paye_engine::config::StatutorySchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = StatutorySchedule::default();
/// let result = calculate_pension_fund_levy(Decimal::new(50_000, 0), &schedule.pension_fund, 1);
/// assert_eq!(result.levy, Decimal::new(3_000, 0));
/// ```
pub fn calculate_pension_fund_levy(
    gross: Decimal,
    config: &PensionFundConfig,
    step_number: u32,
) -> PensionFundLevyResult {
    let lower = config.lower_earnings_limit;
    let upper = config.upper_earnings_limit;

    let (levy, tier_1, tier_2, reasoning) = if gross <= lower {
        let levy = round2(gross * config.rate);
        let reasoning = format!(
            "Gross KES {} is within tier 1 (up to KES {}): KES {} × {} = KES {}",
            gross.normalize(),
            lower.normalize(),
            gross.normalize(),
            config.rate.normalize(),
            levy
        );
        (levy, levy, Decimal::ZERO, reasoning)
    } else {
        let tier_1 = round2(lower * config.rate);
        let pensionable = gross.min(upper) - lower;
        let tier_2 = round2(pensionable * config.rate);
        let levy = round2(tier_1 + tier_2);
        let reasoning = if gross > upper {
            format!(
                "Tier 1 KES {} + tier 2 KES {} × {} = KES {} (pay above KES {} not levied)",
                tier_1,
                pensionable.normalize(),
                config.rate.normalize(),
                levy,
                upper.normalize()
            )
        } else {
            format!(
                "Tier 1 KES {} + tier 2 KES {} × {} = KES {}",
                tier_1,
                pensionable.normalize(),
                config.rate.normalize(),
                levy
            )
        };
        (levy, tier_1, tier_2, reasoning)
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "pension_fund_levy".to_string(),
        rule_name: "Pension Fund Levy".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "rate": config.rate.normalize().to_string(),
            "lower_earnings_limit": lower.normalize().to_string(),
            "upper_earnings_limit": upper.normalize().to_string()
        }),
        output: serde_json::json!({
            "tier_1": tier_1.to_string(),
            "tier_2": tier_2.to_string(),
            "levy": levy.to_string(),
            "saturated": gross > upper
        }),
        reasoning,
    };

    PensionFundLevyResult { levy, audit_step }
}
