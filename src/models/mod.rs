//! Core data models for the salary breakup engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allocation;
mod calculation_result;
mod contribution;
mod salary_input;

pub use allocation::{Allocation, AllocationStatus};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, BreakdownRow, ChartSlice, MONTHS_PER_YEAR,
    SalaryBreakdown, SalaryTotals,
};
pub use contribution::{Contribution, StatutoryContributions};
pub use salary_input::SalaryInput;
