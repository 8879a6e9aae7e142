//! Configuration types for the statutory schedule.
//!
//! This module contains the strongly-typed schedule structures deserialized
//! from YAML, together with the built-in snapshot the engine uses by default.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Currency code prefixed to displayed amounts.
pub const CURRENCY_CODE: &str = "KES";

/// Pension-fund levy rate applied to both tiers (6%).
pub const PENSION_FUND_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);
/// Upper bound of tier 1 pensionable earnings.
pub const PENSION_FUND_LOWER_EARNINGS_LIMIT: Decimal = Decimal::from_parts(8_000, 0, 0, false, 0);
/// Upper bound of tier 2 pensionable earnings; pay above it is not levied.
pub const PENSION_FUND_UPPER_EARNINGS_LIMIT: Decimal =
    Decimal::from_parts(72_000, 0, 0, false, 0);

/// Health-fund levy rate (2.75%).
pub const HEALTH_FUND_RATE: Decimal = Decimal::from_parts(275, 0, 0, false, 4);
/// Minimum health-fund levy.
pub const HEALTH_FUND_MINIMUM: Decimal = Decimal::from_parts(300, 0, 0, false, 0);

/// Housing levy rate (1.5%).
pub const HOUSING_LEVY_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 3);

/// Cap on the deductible voluntary pension contribution.
pub const PENSION_CONTRIBUTION_CAP: Decimal = Decimal::from_parts(30_000, 0, 0, false, 0);
/// Cap on deductible mortgage interest.
pub const MORTGAGE_INTEREST_CAP: Decimal = Decimal::from_parts(25_000, 0, 0, false, 0);
/// Cap on the deductible medical fund contribution.
pub const MEDICAL_FUND_CAP: Decimal = Decimal::from_parts(15_000, 0, 0, false, 0);

/// Fixed personal relief subtracted from band tax.
pub const PERSONAL_RELIEF: Decimal = Decimal::from_parts(2_400, 0, 0, false, 0);

/// Cumulative ceiling of band 1.
pub const BAND_1_CEILING: Decimal = Decimal::from_parts(24_000, 0, 0, false, 0);
/// Cumulative ceiling of band 2.
pub const BAND_2_CEILING: Decimal = Decimal::from_parts(32_333, 0, 0, false, 0);
/// Cumulative ceiling of band 3.
pub const BAND_3_CEILING: Decimal = Decimal::from_parts(500_000, 0, 0, false, 0);
/// Cumulative ceiling of band 4; band 5 is unbounded.
pub const BAND_4_CEILING: Decimal = Decimal::from_parts(800_000, 0, 0, false, 0);

/// Band 1 rate (10%).
pub const BAND_1_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
/// Band 2 rate (25%).
pub const BAND_2_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
/// Band 3 rate (30%).
pub const BAND_3_RATE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);
/// Band 4 rate (32.5%).
pub const BAND_4_RATE: Decimal = Decimal::from_parts(325, 0, 0, false, 3);
/// Band 5 rate (35%).
pub const BAND_5_RATE: Decimal = Decimal::from_parts(35, 0, 0, false, 2);

/// Two-tier pension-fund levy parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionFundConfig {
    /// Rate applied to pensionable earnings in both tiers.
    pub rate: Decimal,
    /// Tier 1 ceiling.
    pub lower_earnings_limit: Decimal,
    /// Tier 2 ceiling.
    pub upper_earnings_limit: Decimal,
}

/// Flat-rate health-fund levy with a floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthFundConfig {
    /// Rate applied to gross pay.
    pub rate: Decimal,
    /// Minimum levy.
    pub minimum: Decimal,
}

/// Flat-rate housing levy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingLevyConfig {
    /// Rate applied to gross pay.
    pub rate: Decimal,
}

/// Caps on voluntary deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoluntaryCaps {
    /// Maximum deductible pension contribution.
    pub pension_contribution: Decimal,
    /// Maximum deductible mortgage interest.
    pub mortgage_interest: Decimal,
    /// Maximum deductible medical fund contribution.
    pub medical_fund_contribution: Decimal,
}

/// One progressive band: everything up to `ceiling` not taxed by a lower band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    /// Cumulative ceiling; `None` for the unbounded top band.
    pub ceiling: Option<Decimal>,
    /// Marginal rate as a fraction (0.325 for 32.5%).
    pub rate: Decimal,
}

/// Income tax parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeTaxConfig {
    /// Personal relief subtracted from band tax.
    pub personal_relief: Decimal,
    /// Bands in ascending order; the last one is unbounded.
    pub bands: Vec<TaxBand>,
}

/// The complete statutory schedule the engine computes against.
///
/// `StatutorySchedule::default()` is the built-in snapshot. A schedule of the
/// same shape can be loaded from YAML with
/// [`ConfigLoader`](super::ConfigLoader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutorySchedule {
    /// Currency code used in band labels and reports.
    pub currency: String,
    /// Pension-fund levy.
    pub pension_fund: PensionFundConfig,
    /// Health-fund levy.
    pub health_fund: HealthFundConfig,
    /// Housing levy.
    pub housing_levy: HousingLevyConfig,
    /// Voluntary deduction caps.
    pub voluntary_caps: VoluntaryCaps,
    /// Income tax bands and relief.
    pub income_tax: IncomeTaxConfig,
}

impl Default for StatutorySchedule {
    fn default() -> Self {
        Self {
            currency: CURRENCY_CODE.to_string(),
            pension_fund: PensionFundConfig {
                rate: PENSION_FUND_RATE,
                lower_earnings_limit: PENSION_FUND_LOWER_EARNINGS_LIMIT,
                upper_earnings_limit: PENSION_FUND_UPPER_EARNINGS_LIMIT,
            },
            health_fund: HealthFundConfig {
                rate: HEALTH_FUND_RATE,
                minimum: HEALTH_FUND_MINIMUM,
            },
            housing_levy: HousingLevyConfig {
                rate: HOUSING_LEVY_RATE,
            },
            voluntary_caps: VoluntaryCaps {
                pension_contribution: PENSION_CONTRIBUTION_CAP,
                mortgage_interest: MORTGAGE_INTEREST_CAP,
                medical_fund_contribution: MEDICAL_FUND_CAP,
            },
            income_tax: IncomeTaxConfig {
                personal_relief: PERSONAL_RELIEF,
                bands: vec![
                    TaxBand {
                        ceiling: Some(BAND_1_CEILING),
                        rate: BAND_1_RATE,
                    },
                    TaxBand {
                        ceiling: Some(BAND_2_CEILING),
                        rate: BAND_2_RATE,
                    },
                    TaxBand {
                        ceiling: Some(BAND_3_CEILING),
                        rate: BAND_3_RATE,
                    },
                    TaxBand {
                        ceiling: Some(BAND_4_CEILING),
                        rate: BAND_4_RATE,
                    },
                    TaxBand {
                        ceiling: None,
                        rate: BAND_5_RATE,
                    },
                ],
            },
        }
    }
}

impl StatutorySchedule {
    /// Checks that the schedule can be computed against.
    ///
    /// Returns [`EngineError::InvalidSchedule`] describing the first problem
    /// found: empty or unordered bands, a bounded top band, an unbounded band
    /// that is not last, rates outside `[0, 1]`, negative limits or caps, or
    /// inverted earnings limits.
    pub fn check(&self) -> EngineResult<()> {
        let rates = [
            ("pension_fund.rate", self.pension_fund.rate),
            ("health_fund.rate", self.health_fund.rate),
            ("housing_levy.rate", self.housing_levy.rate),
        ];
        for (name, rate) in rates {
            check_rate(name, rate)?;
        }

        let amounts = [
            ("pension_fund.lower_earnings_limit", self.pension_fund.lower_earnings_limit),
            ("pension_fund.upper_earnings_limit", self.pension_fund.upper_earnings_limit),
            ("health_fund.minimum", self.health_fund.minimum),
            ("voluntary_caps.pension_contribution", self.voluntary_caps.pension_contribution),
            ("voluntary_caps.mortgage_interest", self.voluntary_caps.mortgage_interest),
            (
                "voluntary_caps.medical_fund_contribution",
                self.voluntary_caps.medical_fund_contribution,
            ),
            ("income_tax.personal_relief", self.income_tax.personal_relief),
        ];
        for (name, amount) in amounts {
            if amount.is_sign_negative() {
                return Err(invalid(format!("{name} must not be negative (got {amount})")));
            }
        }

        if self.pension_fund.upper_earnings_limit < self.pension_fund.lower_earnings_limit {
            return Err(invalid(
                "pension_fund.upper_earnings_limit is below lower_earnings_limit",
            ));
        }

        let bands = &self.income_tax.bands;
        if bands.is_empty() {
            return Err(invalid("income_tax.bands is empty"));
        }

        let mut previous = Decimal::ZERO;
        for (index, band) in bands.iter().enumerate() {
            check_rate(&format!("income_tax.bands[{index}].rate"), band.rate)?;
            let is_last = index + 1 == bands.len();
            match band.ceiling {
                Some(ceiling) if is_last => {
                    return Err(invalid(format!(
                        "the top band must be unbounded (band {} has ceiling {ceiling})",
                        index + 1
                    )));
                }
                Some(ceiling) if ceiling <= previous => {
                    return Err(invalid(format!(
                        "band {} ceiling {ceiling} is not above the previous ceiling {previous}",
                        index + 1
                    )));
                }
                Some(ceiling) => previous = ceiling,
                None if !is_last => {
                    return Err(invalid(format!("band {} is unbounded but not last", index + 1)));
                }
                None => {}
            }
        }

        Ok(())
    }
}

fn check_rate(name: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(invalid(format!("{name} must be between 0 and 1 (got {rate})")));
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidSchedule {
        message: message.into(),
    }
}
