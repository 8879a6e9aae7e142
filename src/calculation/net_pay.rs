//! Net pay assembly.

use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::rounding::round2;
use super::taxable_income::Deductions;

/// The result of net pay assembly.
#[derive(Debug, Clone)]
pub struct NetPayResult {
    /// Payable tax plus every levy and applied deduction, rounded.
    pub total_deductions: Decimal,
    /// Gross minus total deductions, rounded. Not floored at zero.
    pub net_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Totals the deductions and derives net pay.
///
/// A negative net pay is reported as computed; extreme voluntary deductions
/// against a small gross can produce one.
pub fn calculate_net_pay(
    gross: Decimal,
    paye_tax: Decimal,
    deductions: &Deductions,
    step_number: u32,
) -> NetPayResult {
    let total_deductions = round2(paye_tax + deductions.sum());
    let net_pay = round2(gross - total_deductions);

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross": gross.normalize().to_string(),
            "paye_tax": paye_tax.to_string(),
            "other_deductions": deductions.sum().normalize().to_string()
        }),
        output: serde_json::json!({
            "total_deductions": total_deductions.to_string(),
            "net_pay": net_pay.to_string()
        }),
        reasoning: format!(
            "KES {} − KES {} total deductions = KES {}",
            gross.normalize(),
            total_deductions,
            net_pay
        ),
    };

    NetPayResult {
        total_deductions,
        net_pay,
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

    fn deductions(values: [&str; 6]) -> Deductions {
        Deductions {
            pension_fund_levy: dec(values[0]),
            health_fund_levy: dec(values[1]),
            housing_levy: dec(values[2]),
            pension_applied: dec(values[3]),
            mortgage_applied: dec(values[4]),
            medical_applied: dec(values[5]),
        }
    }

    #[test]
    fn test_reference_example() {
        let result = calculate_net_pay(
            dec("50000"),
            dec("5845.85"),
            &deductions(["3000", "1375", "750", "0", "0", "0"]),
            8,
        );
        assert_eq!(result.total_deductions, dec("10970.85"));
        assert_eq!(result.net_pay, dec("39029.15"));
        assert_eq!(result.audit_step.step_number, 8);
    }

    #[test]
    fn test_negative_net_pay_is_reported() {
        let result = calculate_net_pay(
            dec("5000"),
            dec("0"),
            &deductions(["300", "300", "75", "30000", "25000", "15000"]),
            1,
        );
        assert_eq!(result.total_deductions, dec("70675.00"));
        assert_eq!(result.net_pay, dec("-65675.00"));
    }
}
