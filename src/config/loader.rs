//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a statutory
//! schedule from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::StatutorySchedule;

/// Loads and validates a statutory schedule.
///
/// The file has the same shape as `config/statutory.yaml`, which ships the
/// built-in snapshot:
///
/// ```text
/// currency: KES
/// pension_fund:   { rate, lower_earnings_limit, upper_earnings_limit }
/// health_fund:    { rate, minimum }
/// housing_levy:   { rate }
/// voluntary_caps: { pension_contribution, mortgage_interest, medical_fund_contribution }
/// income_tax:
///   personal_relief: ...
///   bands: [ { ceiling, rate }, ..., { ceiling: null, rate } ]
/// ```
///
/// # Example
///
/// ```no_run
/// use paye_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory.yaml")?;
/// println!("Currency: {}", loader.schedule().currency);
/// # Ok::<(), paye_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: StatutorySchedule,
}

impl ConfigLoader {
    /// Loads a schedule from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file is not valid YAML or is missing required fields
    /// - The schedule fails [`StatutorySchedule::check`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let schedule = Self::parse(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(path = %path_str, bands = schedule.income_tax.bands.len(), "Loaded statutory schedule");
        Ok(Self { schedule })
    }

    /// Parses and validates a schedule from YAML text.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Ok(Self {
            schedule: Self::parse(content)?,
        })
    }

    fn parse(content: &str) -> EngineResult<StatutorySchedule> {
        let schedule: StatutorySchedule =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        schedule.check()?;

        Ok(schedule)
    }

    /// Returns the loaded schedule.
    pub fn schedule(&self) -> &StatutorySchedule {
        &self.schedule
    }

    /// Consumes the loader, returning the schedule.
    pub fn into_schedule(self) -> StatutorySchedule {
        self.schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_shipped_schedule_matches_built_in_snapshot() {
        let loader = ConfigLoader::load("./config/statutory.yaml").unwrap();
        assert_eq!(loader.schedule(), &StatutorySchedule::default());
    }

    #[test]
    fn test_missing_file_returns_config_not_found() {
        let err = ConfigLoader::load("./config/does-not-exist.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
        assert!(err.to_string().contains("does-not-exist.yaml"));
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let err = ConfigLoader::from_yaml_str("currency: [unclosed").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParseError { .. }));
    }

    #[test]
    fn test_missing_section_returns_parse_error() {
        let err = ConfigLoader::from_yaml_str("currency: KES\n").unwrap_err();
        match err {
            EngineError::ConfigParseError { message, .. } => {
                assert!(message.contains("missing field"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unordered_bands_return_invalid_schedule() {
        let yaml = r#"
currency: KES
pension_fund: { rate: "0.06", lower_earnings_limit: "8000", upper_earnings_limit: "72000" }
health_fund: { rate: "0.0275", minimum: "300" }
housing_levy: { rate: "0.015" }
voluntary_caps: { pension_contribution: "30000", mortgage_interest: "25000", medical_fund_contribution: "15000" }
income_tax:
  personal_relief: "2400"
  bands:
    - { ceiling: "32333", rate: "0.25" }
    - { ceiling: "24000", rate: "0.10" }
    - { ceiling: null, rate: "0.35" }
"#;
        let err = ConfigLoader::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSchedule { .. }));
    }

    #[test]
    fn test_custom_schedule_round_trips_values() {
        let yaml = r#"
currency: KES
pension_fund: { rate: "0.06", lower_earnings_limit: "7000", upper_earnings_limit: "36000" }
health_fund: { rate: "0.0275", minimum: "300" }
housing_levy: { rate: "0.015" }
voluntary_caps: { pension_contribution: "20000", mortgage_interest: "25000", medical_fund_contribution: "15000" }
income_tax:
  personal_relief: "2400"
  bands:
    - { ceiling: "24000", rate: "0.10" }
    - { ceiling: null, rate: "0.30" }
"#;
        let schedule = ConfigLoader::from_yaml_str(yaml).unwrap().into_schedule();
        assert_eq!(schedule.pension_fund.lower_earnings_limit, dec("7000"));
        assert_eq!(schedule.voluntary_caps.pension_contribution, dec("20000"));
        assert_eq!(schedule.income_tax.bands.len(), 2);
        assert_eq!(schedule.income_tax.bands[1].ceiling, None);
    }
}
