//! Error types for the salary breakup engine.
//!
//! Missing inputs never fail a calculation; they degrade to zero. Errors
//! arise when configuration is loaded or checked, and when an amount grows
//! past what a `Decimal` can represent.

use thiserror::Error;

/// The main error type for the salary breakup engine.
///
/// # Example
///
/// ```
/// use salary_breakup::error::SalaryError;
///
/// let error = SalaryError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum SalaryError {
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

    /// A configuration value was parsed but is not usable.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The configuration key that was rejected.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// An intermediate amount could not be represented.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl SalaryError {
    /// Builds the error for an arithmetic overflow while computing `what`.
    pub fn overflow(what: &str) -> Self {
        SalaryError::CalculationError {
            message: format!("{} exceeds the representable range", what),
        }
    }
}

/// A type alias for Results that return SalaryError.
pub type SalaryResult<T> = Result<T, SalaryError>;
