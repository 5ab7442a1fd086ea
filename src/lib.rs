//! Salary Breakup Engine
//!
//! This crate splits a gross monthly salary into Basic Pay, HRA and Other
//! Allowance, derives Provident Fund and ESIC deductions for employee and
//! employer, and produces the monthly/yearly breakdown, chart series and
//! summary labels a salary calculator displays.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
