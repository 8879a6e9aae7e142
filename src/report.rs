//! Plain-text payslip rendering.
//!
//! The payslip is a read-only view of a [`CalculationResult`]; it performs no
//! arithmetic beyond formatting.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::format::format_currency;
use crate::models::{CalculationResult, SalaryField, SalaryInputs};

/// Title printed at the top of every payslip.
pub const REPORT_TITLE: &str = "Net Pay Calculator Report";

/// Closing line printed at the bottom of every payslip.
pub const DISCLAIMER: &str = "This tool is for informational purposes only.";

const LABEL_WIDTH: usize = 36;
const AMOUNT_WIDTH: usize = 20;
const BAND_LABEL_WIDTH: usize = 26;
const RATE_WIDTH: usize = 8;

/// Renders the printable payslip for one computation.
///
/// Voluntary deduction rows only appear under "Detailed Deductions" when the
/// applied amount is above zero.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use paye_engine::compute;
/// use paye_engine::models::SalaryInputs;
/// use paye_engine::report::render_payslip;
/// use rust_decimal::Decimal;
///
/// let inputs = SalaryInputs::new(Decimal::new(50_000, 0));
/// let result = compute(&inputs).unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let payslip = render_payslip(&inputs, &result, "KES", date);
/// assert!(payslip.contains("Generated: January 15, 2026"));
/// assert!(payslip.contains("KES 39,029.15"));
/// ```
pub fn render_payslip(
    inputs: &SalaryInputs,
    result: &CalculationResult,
    currency: &str,
    generated_on: NaiveDate,
) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        format!("Generated: {}", generated_on.format("%B %-d, %Y")),
    ];

    section(&mut lines, "Salary Inputs");
    for field in SalaryField::ALL {
        let value = inputs.get(field).unwrap_or(Decimal::ZERO);
        lines.push(row(field.label(), &format_currency(currency, value)));
    }

    section(&mut lines, "Salary Summary");
    let summary = [
        ("Gross Salary", result.gross),
        ("Taxable Income", result.taxable),
        ("Total Deductions", result.total_deductions),
        ("PAYE Tax", result.paye_tax),
        ("Net Pay", result.net_pay),
    ];
    for (label, amount) in summary {
        lines.push(row(label, &format_currency(currency, amount)));
    }

    section(&mut lines, "Detailed Deductions");
    lines.push(row("Description", "Amount"));
    let statutory = [
        ("PAYE Tax", result.paye_tax),
        ("Pension Fund Levy", result.pension_fund_levy),
        ("Health Fund Levy", result.health_fund_levy),
        ("Affordable Housing Levy", result.housing_levy),
    ];
    let voluntary = [
        (SalaryField::PensionContribution, result.pension_deduction_applied),
        (SalaryField::MortgageInterest, result.mortgage_deduction_applied),
        (SalaryField::MedicalFundContribution, result.medical_deduction_applied),
    ];
    for (label, amount) in statutory {
        lines.push(row(label, &format_currency(currency, amount)));
    }
    for (field, amount) in voluntary {
        if amount > Decimal::ZERO {
            lines.push(row(field.label(), &format_currency(currency, amount)));
        }
    }

    section(&mut lines, "Reliefs");
    lines.push(row("Description", "Amount"));
    lines.push(row(
        "Personal Tax Relief",
        &format_currency(currency, result.personal_relief),
    ));

    section(&mut lines, "PAYE Tax Breakdown");
    lines.push(band_row("Tax Band", "Amount", "Rate", "Tax"));
    for band in &result.tax_band_breakdown {
        lines.push(band_row(
            &band.range_label,
            &format_currency(currency, band.amount_taxed_in_band),
            &band.rate_label(),
            &format_currency(currency, band.tax_in_band),
        ));
    }

    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());

    let mut payslip = lines.join("\n");
    payslip.push('\n');
    payslip
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(title.to_string());
    lines.push("-".repeat(title.len()));
}

fn row(label: &str, amount: &str) -> String {
    format!("{label:<LABEL_WIDTH$}{amount:>AMOUNT_WIDTH$}")
}

fn band_row(label: &str, amount: &str, rate: &str, tax: &str) -> String {
    format!(
        "{label:<BAND_LABEL_WIDTH$}{amount:>AMOUNT_WIDTH$}{rate:>RATE_WIDTH$}{tax:>AMOUNT_WIDTH$}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn render(inputs: &SalaryInputs) -> String {
        let result = compute(inputs).unwrap();
        render_payslip(inputs, &result, "KES", date())
    }

    /// RP-001: header, sections and disclaimer appear in order
    #[test]
    fn test_sections_in_order() {
        let payslip = render(&SalaryInputs::new(dec("50000")));

        let headings = [
            REPORT_TITLE,
            "Generated: January 15, 2026",
            "Salary Inputs",
            "Salary Summary",
            "Detailed Deductions",
            "Reliefs",
            "PAYE Tax Breakdown",
            DISCLAIMER,
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|heading| payslip.find(heading).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(payslip.ends_with(&format!("{DISCLAIMER}\n")));
    }

    /// RP-002: reference figures are formatted with grouping and the currency code
    #[test]
    fn test_reference_figures() {
        let payslip = render(&SalaryInputs::new(dec("50000")));

        assert!(payslip.contains(&row("Basic Salary", "KES 50,000.00")));
        assert!(payslip.contains(&row("Benefits/Allowances", "KES 0.00")));
        assert!(payslip.contains(&row("Net Pay", "KES 39,029.15")));
        assert!(payslip.contains(&row("Total Deductions", "KES 10,970.85")));
        assert!(payslip.contains(&row("Personal Tax Relief", "KES 2,400.00")));
        assert!(payslip.contains(&band_row(
            "KES 32,334 - 500,000",
            "KES 12,542.00",
            "30%",
            "KES 3,762.60"
        )));
    }

    /// RP-003: voluntary rows only appear when applied
    #[test]
    fn test_voluntary_rows_only_when_applied() {
        let without = render(&SalaryInputs::new(dec("50000")));
        let deductions = &without[without.find("Detailed Deductions").unwrap()
            ..without.find("Reliefs").unwrap()];
        assert!(!deductions.contains("Pension Contribution"));
        assert!(!deductions.contains("Mortgage Interest"));

        let with = render(
            &SalaryInputs::new(dec("50000")).with_mortgage_interest(dec("40000")),
        );
        let deductions =
            &with[with.find("Detailed Deductions").unwrap()..with.find("Reliefs").unwrap()];
        assert!(deductions.contains(&row("Mortgage Interest", "KES 25,000.00")));
        assert!(!deductions.contains("Medical Fund"));
    }

    #[test]
    fn test_single_digit_day_is_not_padded() {
        let inputs = SalaryInputs::new(dec("5000"));
        let result = compute(&inputs).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();

        let payslip = render_payslip(&inputs, &result, "KES", date);

        assert!(payslip.contains("Generated: March 5, 2026"));
    }
}
