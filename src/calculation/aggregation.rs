//! Totals and presentation rows.
//!
//! Nothing here decides anything: these functions sum and label the
//! outputs of the allocation and statutory stages.

use rust_decimal::Decimal;

use crate::error::{SalaryError, SalaryResult};
use crate::models::{Allocation, BreakdownRow, ChartSlice, SalaryTotals, StatutoryContributions};

/// Computes gross, deductions, employer contributions and net payment.
///
/// `net_payment` is gross monthly minus the employee-side deductions only;
/// employer contributions do not reduce it.
pub fn calculate_totals(
    allocation: &Allocation,
    contributions: &StatutoryContributions,
) -> SalaryResult<SalaryTotals> {
    let gross_monthly = allocation.gross_monthly()?;
    let total_deductions = contributions.total_deductions()?;
    let net_payment = gross_monthly
        .checked_sub(total_deductions)
        .ok_or_else(|| SalaryError::overflow("net payment"))?;

    Ok(SalaryTotals {
        gross_monthly,
        total_deductions,
        total_employer_contributions: contributions.total_employer_contributions()?,
        net_payment,
    })
}

/// Builds the five table rows: Basic Pay, HRA, Other Allowance, PF
/// Employee and ESIC Employee.
pub fn breakdown_rows(
    allocation: &Allocation,
    contributions: &StatutoryContributions,
) -> SalaryResult<Vec<BreakdownRow>> {
    [
        ("Basic Pay", allocation.basic),
        ("HRA", allocation.hra),
        ("Other Allowance", allocation.other_allowance),
        ("PF Employee", contributions.pf_employee.amount),
        ("ESIC Employee", contributions.esic_employee.amount),
    ]
    .into_iter()
    .map(|(description, amount)| BreakdownRow::monthly(description, amount))
    .collect()
}

/// Builds the four chart slices: Basic, HRA, Other Allowance and total
/// deductions.
pub fn chart_series(allocation: &Allocation, totals: &SalaryTotals) -> Vec<ChartSlice> {
    [
        ("Basic", allocation.basic),
        ("HRA", allocation.hra),
        ("Other Allowance", allocation.other_allowance),
        ("Deductions", totals.total_deductions),
    ]
    .into_iter()
    .map(|(label, value)| ChartSlice {
        label: label.to_string(),
        value,
    })
    .collect()
}

/// Formats an amount with the currency symbol and two decimal places.
///
/// # Examples
///
/// ```
/// use salary_breakup::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency("₹", Decimal::from(1800)), "₹1800.00");
/// ```
pub fn format_currency(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Builds the three summary labels shown under the table.
pub fn summary_labels(totals: &SalaryTotals, currency_symbol: &str) -> Vec<String> {
    vec![
        format!(
            "Total Deductions: {}",
            format_currency(currency_symbol, totals.total_deductions)
        ),
        format!(
            "Total Employer Contributions: {}",
            format_currency(currency_symbol, totals.total_employer_contributions)
        ),
        format!(
            "Net Payment: {}",
            format_currency(currency_symbol, totals.net_payment)
        ),
    ]
}
