//! Core data models for the PAYE engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod salary_form;
mod salary_inputs;

pub use calculation_result::{
    AuditStep, AuditTrace, AuditedCalculation, CalculationResult, TaxBandEntry,
};
pub use salary_form::SalaryForm;
pub use salary_inputs::{FieldErrors, SalaryField, SalaryInputs};
