//! The net pay computation engine.
//!
//! [`TaxEngine`] chains the calculation steps in a fixed order:
//!
//! 1. validate the inputs
//! 2. gross pay, then the pension-fund, health-fund and housing levies on it
//! 3. voluntary deduction caps and taxable income
//! 4. band tax, personal relief and net pay
//!
//! Each step only reads the outputs of earlier steps. The engine holds nothing
//! but an immutable schedule, so one instance can serve any number of threads.

use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::calculation::{
    Deductions, apply_personal_relief, apply_voluntary_caps, calculate_band_tax,
    calculate_health_fund_levy, calculate_housing_levy, calculate_net_pay,
    calculate_pension_fund_levy, calculate_taxable_income, collect_field_errors, round2,
};
use crate::config::StatutorySchedule;
use crate::error::ValidationError;
use crate::models::{AuditTrace, AuditedCalculation, CalculationResult, SalaryField, SalaryInputs};

static DEFAULT_ENGINE: LazyLock<TaxEngine> = LazyLock::new(TaxEngine::default);

/// Computes net pay against the built-in statutory schedule.
///
/// # Examples
///
/// ```
/// use paye_engine::compute;
/// use paye_engine::models::SalaryInputs;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = compute(&SalaryInputs::new(Decimal::new(50_000, 0))).unwrap();
/// assert_eq!(result.paye_tax, Decimal::from_str("5845.85").unwrap());
/// assert_eq!(result.net_pay, Decimal::from_str("39029.15").unwrap());
/// ```
pub fn compute(inputs: &SalaryInputs) -> Result<CalculationResult, ValidationError> {
    DEFAULT_ENGINE.compute(inputs)
}

/// Computes itemized net pay results against a statutory schedule.
#[derive(Debug, Clone, Default)]
pub struct TaxEngine {
    schedule: StatutorySchedule,
}

impl TaxEngine {
    /// Creates an engine computing against `schedule`.
    ///
    /// The schedule is trusted as given; schedules read from disk should come
    /// through [`ConfigLoader`](crate::config::ConfigLoader), which checks them.
    pub fn new(schedule: StatutorySchedule) -> Self {
        Self { schedule }
    }

    /// Returns the schedule this engine computes against.
    pub fn schedule(&self) -> &StatutorySchedule {
        &self.schedule
    }

    /// Computes the itemized result for `inputs`.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingRequiredInput`] when basic salary is absent,
    ///   zero or negative.
    /// - [`ValidationError::StaleErrorState`] when any field carries an error
    ///   recorded during entry, or holds a value that is negative, has more
    ///   than 2 decimals, or exceeds the field maximum.
    pub fn compute(&self, inputs: &SalaryInputs) -> Result<CalculationResult, ValidationError> {
        self.compute_audited(inputs)
            .map(|calculation| calculation.result)
    }

    /// Computes the itemized result together with its audit trace.
    pub fn compute_audited(
        &self,
        inputs: &SalaryInputs,
    ) -> Result<AuditedCalculation, ValidationError> {
        check_inputs(inputs)?;

        let schedule = &self.schedule;
        let mut steps = Vec::with_capacity(8);
        let mut step_number: u32 = 1;

        let gross = round2(inputs.gross());

        let pension_fund = calculate_pension_fund_levy(gross, &schedule.pension_fund, step_number);
        steps.push(pension_fund.audit_step);
        step_number += 1;

        let health_fund = calculate_health_fund_levy(gross, &schedule.health_fund, step_number);
        steps.push(health_fund.audit_step);
        step_number += 1;

        let housing = calculate_housing_levy(gross, &schedule.housing_levy, step_number);
        steps.push(housing.audit_step);
        step_number += 1;

        let voluntary = apply_voluntary_caps(inputs, &schedule.voluntary_caps, step_number);
        steps.push(voluntary.audit_step);
        step_number += 1;

        let deductions = Deductions {
            pension_fund_levy: pension_fund.levy,
            health_fund_levy: health_fund.levy,
            housing_levy: housing.levy,
            pension_applied: voluntary.pension_applied,
            mortgage_applied: voluntary.mortgage_applied,
            medical_applied: voluntary.medical_applied,
        };

        let taxable = calculate_taxable_income(gross, &deductions, step_number);
        steps.push(taxable.audit_step);
        step_number += 1;

        let band_tax = calculate_band_tax(
            taxable.taxable,
            &schedule.income_tax,
            &schedule.currency,
            step_number,
        );
        steps.push(band_tax.audit_step);
        step_number += 1;

        let personal_relief = round2(schedule.income_tax.personal_relief);
        let relief = apply_personal_relief(band_tax.tax_before_relief, personal_relief, step_number);
        steps.push(relief.audit_step);
        step_number += 1;

        let net = calculate_net_pay(gross, relief.paye_tax, &deductions, step_number);
        steps.push(net.audit_step);

        let result = CalculationResult {
            gross,
            taxable: taxable.taxable,
            paye_tax: relief.paye_tax,
            tax_before_relief: band_tax.tax_before_relief,
            pension_fund_levy: pension_fund.levy,
            health_fund_levy: health_fund.levy,
            housing_levy: housing.levy,
            pension_deduction_applied: voluntary.pension_applied,
            mortgage_deduction_applied: voluntary.mortgage_applied,
            medical_deduction_applied: voluntary.medical_applied,
            total_deductions: net.total_deductions,
            net_pay: net.net_pay,
            personal_relief,
            tax_band_breakdown: band_tax.breakdown,
        };

        debug!(
            gross = %result.gross,
            taxable = %result.taxable,
            paye_tax = %result.paye_tax,
            net_pay = %result.net_pay,
            bands = result.tax_band_breakdown.len(),
            "Net pay computed"
        );

        Ok(AuditedCalculation {
            result,
            audit_trace: AuditTrace { steps },
        })
    }
}

/// Refuses inputs that cannot be computed, basic salary first.
fn check_inputs(inputs: &SalaryInputs) -> Result<(), ValidationError> {
    let field_errors = collect_field_errors(inputs);

    let basic_is_valid = inputs
        .basic_salary
        .is_some_and(|basic| basic.is_sign_positive() && !basic.is_zero());
    if !basic_is_valid {
        warn!(
            basic_salary = ?inputs.basic_salary,
            field_errors = field_errors.len(),
            "Computation refused: missing basic salary"
        );
        return Err(ValidationError::MissingRequiredInput { field_errors });
    }

    if !field_errors.is_empty() {
        let fields: Vec<&str> = field_errors.keys().map(SalaryField::as_str).collect();
        warn!(fields = ?fields, "Computation refused: unresolved field errors");
        return Err(ValidationError::StaleErrorState { field_errors });
    }

    Ok(())
}
