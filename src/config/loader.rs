//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{SalaryError, SalaryResult};

use super::types::PayrollConfig;

/// Loads and validates payroll configuration.
///
/// A configuration document is a flat YAML mapping. Every key is optional;
/// missing keys take the defaults of [`PayrollConfig::default`].
///
/// ```text
/// pfPercentageEmployee: 12
/// pfPercentageEmployer: 12
/// esicPercentageEmployee: 0.75
/// esicPercentageEmployer: 3.25
/// pfEmployeeLimit: 15000
/// esicEmployeeLimit: 21000
/// pfCapAmount: 1800
/// currencySymbol: "₹"
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_breakup::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default.yaml").unwrap();
/// println!("PF ceiling: {}", loader.config().pf_employee_limit);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or ill-typed values
    /// - A rate, limit or cap is negative, or the currency symbol is blank
    pub fn load<P: AsRef<Path>>(path: P) -> SalaryResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SalaryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_breakup::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("pfCapAmount: 2000")?;
    /// assert_eq!(loader.config().pf_cap_amount, Decimal::from(2000));
    /// # Ok::<(), salary_breakup::error::SalaryError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> SalaryResult<Self> {
        Self::parse(content, "<inline>")
    }

    /// Loads configuration from `path` when given, otherwise uses the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> SalaryResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::from_config(PayrollConfig::default()),
        }
    }

    /// Wraps an already constructed configuration after validating it.
    pub fn from_config(config: PayrollConfig) -> SalaryResult<Self> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn parse(content: &str, origin: &str) -> SalaryResult<Self> {
        // An empty document is a null node; treat it as "all defaults".
        let config = if content.trim().is_empty() {
            PayrollConfig::default()
        } else {
            serde_yaml::from_str::<PayrollConfig>(content).map_err(|e| {
                SalaryError::ConfigParseError {
                    path: origin.to_string(),
                    message: e.to_string(),
                }
            })?
        };

        Self::from_config(config)
    }

    fn validate(config: &PayrollConfig) -> SalaryResult<()> {
        for (field, value) in config.numeric_fields() {
            if value < Decimal::ZERO {
                return Err(SalaryError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        if config.currency_symbol.trim().is_empty() {
            return Err(SalaryError::InvalidConfig {
                field: "currencySymbol".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
