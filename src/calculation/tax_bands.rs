//! Progressive income tax band calculation.
//!
//! Taxable income is walked through the band table in ascending order. Every
//! band below the one containing the income contributes its full width at its
//! own rate; the containing band contributes the remainder. Bands above it do
//! not appear in the breakdown.
//!
//! ## Rate Structure
//!
//! | Band | Cumulative ceiling | Rate  |
//! |------|--------------------|-------|
//! | 1    | 24,000             | 10%   |
//! | 2    | 32,333             | 25%   |
//! | 3    | 500,000            | 30%   |
//! | 4    | 800,000            | 32.5% |
//! | 5    | unbounded          | 35%   |

use rust_decimal::Decimal;

use crate::config::{IncomeTaxConfig, TaxBand};
use crate::format::group_thousands;
use crate::models::{AuditStep, TaxBandEntry};

use super::rounding::round2;

/// The result of the band calculation, before relief.
#[derive(Debug, Clone)]
pub struct BandTaxResult {
    /// One entry per band up to and including the one containing the income.
    pub breakdown: Vec<TaxBandEntry>,
    /// `round2` of the sum of the band taxes. May be negative.
    pub tax_before_relief: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates tax on taxable income band by band.
///
/// Each entry's tax is `round2(amount × rate)`, and the total is the rounded
/// sum of those entries. Income exactly at a ceiling belongs to that band.
/// Zero or negative income yields a single band 1 entry whose amount is the
/// income itself, so the tax can be zero or negative.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::calculate_band_tax;
/// use paye_engine::config::StatutorySchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = StatutorySchedule::default();
/// let result = calculate_band_tax(
///     Decimal::from_str("44875").unwrap(),
///     &schedule.income_tax,
///     &schedule.currency,
///     1,
/// );
///
/// assert_eq!(result.breakdown.len(), 3);
/// assert_eq!(result.breakdown[2].range_label, "KES 32,334 - 500,000");
/// assert_eq!(result.tax_before_relief, Decimal::from_str("8245.85").unwrap());
/// ```
pub fn calculate_band_tax(
    taxable: Decimal,
    config: &IncomeTaxConfig,
    currency: &str,
    step_number: u32,
) -> BandTaxResult {
    let mut breakdown = Vec::with_capacity(config.bands.len());
    let mut lower = Decimal::ZERO;

    for (index, band) in config.bands.iter().enumerate() {
        let (amount, contains_income) = match band.ceiling {
            Some(ceiling) if taxable > ceiling => (ceiling - lower, false),
            _ => (taxable - lower, true),
        };

        breakdown.push(TaxBandEntry {
            range_label: range_label(index, lower, band, currency),
            amount_taxed_in_band: amount,
            rate: (band.rate * Decimal::ONE_HUNDRED).normalize(),
            tax_in_band: round2(amount * band.rate),
        });

        if contains_income {
            break;
        }
        if let Some(ceiling) = band.ceiling {
            lower = ceiling;
        }
    }

    let tax_before_relief = round2(breakdown.iter().map(|entry| entry.tax_in_band).sum());

    let bands_json: Vec<serde_json::Value> = breakdown
        .iter()
        .map(|entry| {
            serde_json::json!({
                "range": entry.range_label,
                "amount": entry.amount_taxed_in_band.normalize().to_string(),
                "rate": entry.rate_label(),
                "tax": entry.tax_in_band.to_string()
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "progressive_tax".to_string(),
        rule_name: "Progressive Tax Bands".to_string(),
        input: serde_json::json!({
            "taxable": taxable.to_string(),
            "band_count": config.bands.len()
        }),
        output: serde_json::json!({
            "bands": bands_json,
            "tax_before_relief": tax_before_relief.to_string()
        }),
        reasoning: format!(
            "Taxable KES {} spans {} band(s): {} = KES {}",
            taxable,
            breakdown.len(),
            breakdown
                .iter()
                .map(|entry| format!("KES {} @ {}", entry.tax_in_band, entry.rate_label()))
                .collect::<Vec<_>>()
                .join(" + "),
            tax_before_relief
        ),
    };

    BandTaxResult {
        breakdown,
        tax_before_relief,
        audit_step,
    }
}

/// Builds the display label for band `index` starting above `lower`.
fn range_label(index: usize, lower: Decimal, band: &TaxBand, currency: &str) -> String {
    match (index, band.ceiling) {
        (0, Some(ceiling)) => format!("Up to {currency} {}", group_thousands(ceiling)),
        (0, None) => "All income".to_string(),
        (_, Some(ceiling)) => format!(
            "{currency} {} - {}",
            group_thousands(lower + Decimal::ONE),
            group_thousands(ceiling)
        ),
        (_, None) => format!("Above {currency} {}", group_thousands(lower)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StatutorySchedule;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn band_tax(taxable: &str) -> BandTaxResult {
        let schedule = StatutorySchedule::default();
        calculate_band_tax(dec(taxable), &schedule.income_tax, &schedule.currency, 1)
    }

    fn taxes(result: &BandTaxResult) -> Vec<Decimal> {
        result.breakdown.iter().map(|e| e.tax_in_band).collect()
    }

    /// TB-001: income inside band 1
    #[test]
    fn test_band_1_only() {
        let result = band_tax("4325");
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].range_label, "Up to KES 24,000");
        assert_eq!(result.breakdown[0].amount_taxed_in_band, dec("4325"));
        assert_eq!(result.breakdown[0].rate, dec("10"));
        assert_eq!(result.tax_before_relief, dec("432.50"));
    }

    /// TB-002: income exactly at the band 1 ceiling stays in band 1
    #[test]
    fn test_at_band_1_ceiling() {
        let result = band_tax("24000");
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.tax_before_relief, dec("2400.00"));
    }

    /// TB-003: income in band 2
    #[test]
    fn test_band_2() {
        let result = band_tax("30000");
        assert_eq!(result.breakdown.len(), 2);
        assert_eq!(result.breakdown[1].range_label, "KES 24,001 - 32,333");
        assert_eq!(result.breakdown[1].amount_taxed_in_band, dec("6000"));
        assert_eq!(taxes(&result), vec![dec("2400.00"), dec("1500.00")]);
        assert_eq!(result.tax_before_relief, dec("3900.00"));
    }

    /// TB-004: worked example from the reference payslip
    #[test]
    fn test_band_3_reference_example() {
        let result = band_tax("44875.00");
        assert_eq!(
            taxes(&result),
            vec![dec("2400.00"), dec("2083.25"), dec("3762.60")]
        );
        assert_eq!(result.breakdown[1].amount_taxed_in_band, dec("8333"));
        assert_eq!(result.breakdown[2].amount_taxed_in_band, dec("12542.00"));
        assert_eq!(result.tax_before_relief, dec("8245.85"));
    }

    /// TB-005: income in band 4
    #[test]
    fn test_band_4() {
        let result = band_tax("600000");
        assert_eq!(result.breakdown.len(), 4);
        assert_eq!(result.breakdown[3].range_label, "KES 500,001 - 800,000");
        assert_eq!(result.breakdown[3].rate, dec("32.5"));
        // 2400 + 2083.25 + 140300.10 + 32500
        assert_eq!(
            taxes(&result),
            vec![
                dec("2400.00"),
                dec("2083.25"),
                dec("140300.10"),
                dec("32500.00")
            ]
        );
        assert_eq!(result.tax_before_relief, dec("177283.35"));
    }

    /// TB-006: income in the unbounded top band
    #[test]
    fn test_band_5() {
        let result = band_tax("1000000");
        assert_eq!(result.breakdown.len(), 5);
        assert_eq!(result.breakdown[4].range_label, "Above KES 800,000");
        assert_eq!(result.breakdown[4].amount_taxed_in_band, dec("200000"));
        assert_eq!(result.breakdown[3].amount_taxed_in_band, dec("300000"));
        // 2400 + 2083.25 + 140300.10 + 97500 + 70000
        assert_eq!(result.tax_before_relief, dec("312283.35"));
    }

    /// TB-007: negative income stays in band 1 with negative tax
    #[test]
    fn test_negative_income() {
        let result = band_tax("-1234.56");
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.breakdown[0].amount_taxed_in_band, dec("-1234.56"));
        assert_eq!(result.tax_before_relief, dec("-123.46"));
    }

    #[test]
    fn test_zero_income() {
        let result = band_tax("0");
        assert_eq!(result.breakdown.len(), 1);
        assert_eq!(result.tax_before_relief, Decimal::ZERO);
    }

    #[test]
    fn test_each_band_tax_is_rounded_before_summing() {
        // Band 3 amount 0.05 × 0.30 = 0.015 rounds to 0.02 on its own.
        let result = band_tax("32333.05");
        assert_eq!(result.breakdown[2].tax_in_band, dec("0.02"));
        assert_eq!(result.tax_before_relief, dec("4483.27"));
    }

    #[test]
    fn test_audit_step_lists_bands() {
        let result = band_tax("44875");
        assert_eq!(result.audit_step.rule_id, "progressive_tax");
        assert_eq!(result.audit_step.output["bands"].as_array().unwrap().len(), 3);
        assert_eq!(result.audit_step.output["tax_before_relief"], "8245.85");
    }

    #[test]
    fn test_single_unbounded_band() {
        let config = IncomeTaxConfig {
            personal_relief: dec("0"),
            bands: vec![TaxBand {
                ceiling: None,
                rate: dec("0.2"),
            }],
        };
        let result = calculate_band_tax(dec("1000"), &config, "KES", 1);
        assert_eq!(result.breakdown[0].range_label, "All income");
        assert_eq!(result.tax_before_relief, dec("200.00"));
    }
}
