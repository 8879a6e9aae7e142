//! Configuration loading and management for the PAYE engine.
//!
//! This module provides the statutory schedule (levy rates, earnings limits,
//! deduction caps, tax bands and relief). The built-in snapshot is
//! [`StatutorySchedule::default`]; a schedule of the same shape can be loaded
//! from YAML.
//!
//! # Example
//!
//! ```no_run
//! use paye_engine::config::ConfigLoader;
//!
//! let schedule = ConfigLoader::load("./config/statutory.yaml").unwrap().into_schedule();
//! println!("Top band rate: {}", schedule.income_tax.bands.last().unwrap().rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BAND_1_CEILING, BAND_1_RATE, BAND_2_CEILING, BAND_2_RATE, BAND_3_CEILING, BAND_3_RATE,
    BAND_4_CEILING, BAND_4_RATE, BAND_5_RATE, CURRENCY_CODE, HEALTH_FUND_MINIMUM,
    HEALTH_FUND_RATE, HOUSING_LEVY_RATE, HealthFundConfig, HousingLevyConfig, IncomeTaxConfig,
    MEDICAL_FUND_CAP, MORTGAGE_INTEREST_CAP, PENSION_CONTRIBUTION_CAP, PENSION_FUND_LOWER_EARNINGS_LIMIT,
    PENSION_FUND_RATE, PENSION_FUND_UPPER_EARNINGS_LIMIT, PERSONAL_RELIEF, PensionFundConfig,
    StatutorySchedule, TaxBand, VoluntaryCaps,
};
