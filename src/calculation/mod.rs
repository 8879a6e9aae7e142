//! Calculation logic for the PAYE engine.
//!
//! This module contains one function per calculation step: input validation,
//! the pension-fund, health-fund and housing levies, voluntary deduction caps,
//! taxable income, progressive band tax, personal relief and net pay. Each
//! step returns its figures together with an audit step.

mod health_fund_levy;
mod housing_levy;
mod input_validation;
mod net_pay;
mod pension_fund_levy;
mod personal_relief;
mod rounding;
mod tax_bands;
mod taxable_income;
mod voluntary_deductions;

pub use health_fund_levy::{HealthFundLevyResult, calculate_health_fund_levy};
pub use housing_levy::{HousingLevyResult, calculate_housing_levy};
pub use input_validation::{
    FieldUpdate, MAX_FIELD_DECIMALS, MAX_FIELD_VALUE, collect_field_errors, validate_amount,
    validate_field,
};
pub use net_pay::{NetPayResult, calculate_net_pay};
pub use pension_fund_levy::{PensionFundLevyResult, calculate_pension_fund_levy};
pub use personal_relief::{PersonalReliefResult, apply_personal_relief};
pub use rounding::{MONEY_SCALE, round2};
pub use tax_bands::{BandTaxResult, calculate_band_tax};
pub use taxable_income::{Deductions, TaxableIncomeResult, calculate_taxable_income};
pub use voluntary_deductions::{VoluntaryDeductionsResult, apply_voluntary_caps};
