//! Error types for the PAYE engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! [`ValidationError`] is what a computation can fail with; [`EngineError`]
//! covers everything else the crate does (loading a schedule, for example)
//! and wraps validation failures so callers can use a single error type.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{FieldErrors, SalaryField};

/// Message recorded against a field whose text was rejected.
pub const FIELD_FORMAT_MESSAGE: &str =
    "Enter a positive number up to 100,000,000 with at most 2 decimals";

/// Global message when the basic salary is missing or not positive.
pub const MISSING_BASIC_SALARY_MESSAGE: &str = "Please enter a valid Basic Salary";

/// Global message when fields still hold unresolved errors.
pub const UNRESOLVED_FIELDS_MESSAGE: &str = "Please fix input errors";

/// Why a set of salary inputs could not be computed.
///
/// Every variant is recoverable by the caller: correct the input and try
/// again. The same input always produces the same error.
///
/// # Example
///
/// ```
/// use paye_engine::error::ValidationError;
///
/// let error = ValidationError::MissingRequiredInput {
///     field_errors: Default::default(),
/// };
/// assert_eq!(error.to_string(), "Please enter a valid Basic Salary");
/// assert_eq!(error.global_message(), Some("Please enter a valid Basic Salary"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Raw text for one field failed the numeric pattern, precision or maximum.
    #[error("Invalid {field}: {message}")]
    FieldFormat {
        /// The field whose text was rejected.
        field: SalaryField,
        /// The rejected text.
        raw: String,
        /// The message recorded against the field.
        message: String,
    },

    /// Basic salary is absent, zero or negative.
    #[error("{}", MISSING_BASIC_SALARY_MESSAGE)]
    MissingRequiredInput {
        /// Field errors outstanding at the time of the attempt (may be empty).
        field_errors: FieldErrors,
    },

    /// One or more fields are still marked invalid.
    #[error("{}", UNRESOLVED_FIELDS_MESSAGE)]
    StaleErrorState {
        /// The outstanding field errors (never empty).
        field_errors: FieldErrors,
    },
}

impl ValidationError {
    /// Returns the per-field messages carried by this error.
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            ValidationError::FieldFormat { field, message, .. } => {
                BTreeMap::from([(*field, message.clone())])
            }
            ValidationError::MissingRequiredInput { field_errors }
            | ValidationError::StaleErrorState { field_errors } => field_errors.clone(),
        }
    }

    /// Returns the form-level message, if this error has one.
    ///
    /// Field format errors are scoped to their field and carry no global message.
    pub fn global_message(&self) -> Option<&'static str> {
        match self {
            ValidationError::FieldFormat { .. } => None,
            ValidationError::MissingRequiredInput { .. } => Some(MISSING_BASIC_SALARY_MESSAGE),
            ValidationError::StaleErrorState { .. } => Some(UNRESOLVED_FIELDS_MESSAGE),
        }
    }
}

/// The main error type for the PAYE engine.
///
/// # Example
///
/// ```
/// use paye_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/statutory.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/statutory.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A statutory schedule parsed but is not usable.
    #[error("Invalid statutory schedule: {message}")]
    InvalidSchedule {
        /// What is wrong with the schedule.
        message: String,
    },

    /// Salary inputs were rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_schedule_displays_message() {
        let error = EngineError::InvalidSchedule {
            message: "no tax bands".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid statutory schedule: no tax bands");
    }

    #[test]
    fn test_field_format_displays_field_and_message() {
        let error = ValidationError::FieldFormat {
            field: SalaryField::Benefits,
            raw: "12.345".to_string(),
            message: FIELD_FORMAT_MESSAGE.to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid benefits: Enter a positive number up to 100,000,000 with at most 2 decimals"
        );
        assert_eq!(error.global_message(), None);
        assert_eq!(
            error.field_errors().get(&SalaryField::Benefits).map(String::as_str),
            Some(FIELD_FORMAT_MESSAGE)
        );
    }

    #[test]
    fn test_stale_error_state_carries_field_errors() {
        let field_errors = BTreeMap::from([(
            SalaryField::MortgageInterest,
            FIELD_FORMAT_MESSAGE.to_string(),
        )]);
        let error = ValidationError::StaleErrorState {
            field_errors: field_errors.clone(),
        };
        assert_eq!(error.to_string(), "Please fix input errors");
        assert_eq!(error.global_message(), Some("Please fix input errors"));
        assert_eq!(error.field_errors(), field_errors);
    }

    #[test]
    fn test_validation_error_converts_into_engine_error() {
        fn fails() -> EngineResult<()> {
            Err(ValidationError::MissingRequiredInput {
                field_errors: FieldErrors::new(),
            })?;
            Ok(())
        }

        let error = fails().unwrap_err();
        assert!(matches!(error, EngineError::Validation(_)));
        assert_eq!(error.to_string(), "Please enter a valid Basic Salary");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
        assert_error::<ValidationError>();
    }
}
