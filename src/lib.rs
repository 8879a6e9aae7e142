//! PAYE Net Pay Engine
//!
//! This crate computes a monthly Kenyan payslip from a salary and optional
//! voluntary deductions: the pension-fund, health-fund and housing levies,
//! capped voluntary deductions, progressive income tax with personal relief,
//! and the resulting net pay, itemized per tax band.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod models;
pub mod report;
pub mod telemetry;

pub use engine::{TaxEngine, compute};
