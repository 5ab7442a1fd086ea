//! Configuration loading and management for the salary breakup engine.
//!
//! This module provides the statutory PF/ESIC configuration record and a
//! loader that reads it from YAML.
//!
//! # Example
//!
//! ```no_run
//! use salary_breakup::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default.yaml").unwrap();
//! println!("ESIC ceiling: {}", config.config().esic_employee_limit);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_CURRENCY_SYMBOL, DEFAULT_ESIC_EMPLOYEE_LIMIT, DEFAULT_ESIC_PERCENTAGE_EMPLOYEE,
    DEFAULT_ESIC_PERCENTAGE_EMPLOYER, DEFAULT_PF_CAP_AMOUNT, DEFAULT_PF_EMPLOYEE_LIMIT,
    DEFAULT_PF_PERCENTAGE_EMPLOYEE, DEFAULT_PF_PERCENTAGE_EMPLOYER, PayrollConfig,
};
