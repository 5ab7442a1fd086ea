//! ESIC calculation functionality.
//!
//! ESIC is charged on the full gross monthly amount, but only while that
//! amount stays at or below the configured wage ceiling.

use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::SalaryResult;
use crate::models::{Allocation, AuditStep, Contribution};

use super::percentage::amount_from_percentage;

/// The result of an ESIC calculation.
#[derive(Debug, Clone)]
pub struct EsicResult {
    /// Employee ESIC deduction.
    pub employee: Contribution,
    /// Employer ESIC contribution.
    pub employer: Contribution,
    /// Whether gross monthly was within the ESIC ceiling.
    pub applicable: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates employee and employer ESIC for an allocation.
///
/// Above `esic_employee_limit` both lines are zero amount at zero percent.
/// At or below it, each side is its configured percentage of
/// `basic + hra + other_allowance`.
///
/// # Examples
///
/// ```
/// use salary_breakup::calculation::calculate_esic;
/// use salary_breakup::config::PayrollConfig;
/// use salary_breakup::models::Allocation;
/// use rust_decimal::Decimal;
///
/// let allocation = Allocation {
///     basic: Decimal::from(10000),
///     hra: Decimal::from(4000),
///     other_allowance: Decimal::from(6000),
/// };
/// let result = calculate_esic(&allocation, &PayrollConfig::default(), 3).unwrap();
///
/// assert!(result.applicable);
/// assert_eq!(result.employee.amount, Decimal::from(150));
/// assert_eq!(result.employer.amount, Decimal::from(650));
/// ```
pub fn calculate_esic(
    allocation: &Allocation,
    config: &PayrollConfig,
    step_number: u32,
) -> SalaryResult<EsicResult> {
    let gross_monthly = allocation.gross_monthly()?;
    let applicable = gross_monthly <= config.esic_employee_limit;

    let (employee, employer, reasoning) = if applicable {
        let employee = Contribution::new(
            amount_from_percentage(config.esic_percentage_employee, gross_monthly)?,
            config.esic_percentage_employee,
        );
        let employer = Contribution::new(
            amount_from_percentage(config.esic_percentage_employer, gross_monthly)?,
            config.esic_percentage_employer,
        );
        let reasoning = format!(
            "Gross monthly ₹{} within ceiling ₹{} - employee {}% = ₹{}, employer {}% = ₹{}",
            gross_monthly,
            config.esic_employee_limit.normalize(),
            config.esic_percentage_employee.normalize(),
            employee.amount,
            config.esic_percentage_employer.normalize(),
            employer.amount
        );
        (employee, employer, reasoning)
    } else {
        let reasoning = format!(
            "Gross monthly ₹{} exceeds ceiling ₹{} - ESIC not applicable",
            gross_monthly,
            config.esic_employee_limit.normalize()
        );
        (Contribution::ZERO, Contribution::ZERO, reasoning)
    };

    debug!(%gross_monthly, applicable, employee = %employee.amount, employer = %employer.amount, "esic calculated");

    let audit_step = AuditStep {
        step_number,
        rule_id: "esic".to_string(),
        rule_name: "Employees' State Insurance".to_string(),
        input: serde_json::json!({
            "gross_monthly": gross_monthly.to_string(),
            "esic_employee_limit": config.esic_employee_limit.normalize().to_string()
        }),
        output: serde_json::json!({
            "applicable": applicable,
            "employee_amount": employee.amount.to_string(),
            "employer_amount": employer.amount.to_string()
        }),
        reasoning,
    };

    Ok(EsicResult {
        employee,
        employer,
        applicable,
        audit_step,
    })
}
