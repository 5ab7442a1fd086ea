//! Calculation logic for the salary breakup engine.
//!
//! The pipeline has three stages, always run in this order: allocation of
//! the gross amount into Basic/HRA/Other, statutory PF and ESIC on that
//! allocation, and aggregation into totals, rows, chart series and labels.

mod aggregation;
mod allocation;
mod calculator;
mod esic;
mod percentage;
mod provident_fund;

pub use aggregation::{
    breakdown_rows, calculate_totals, chart_series, format_currency, summary_labels,
};
pub use allocation::{ALLOCATION_HELD_WARNING, AllocationResult, calculate_allocation};
pub use calculator::{SalaryCalculator, calculate_breakdown};
pub use esic::{EsicResult, calculate_esic};
pub use percentage::{CURRENCY_DECIMAL_PLACES, amount_from_percentage, non_zero, round_currency};
pub use provident_fund::{ProvidentFundResult, calculate_provident_fund};
