//! Provident Fund calculation functionality.
//!
//! PF is charged on Basic + Other Allowance (HRA is excluded). Once those
//! earnings exceed the configured ceiling, both sides pay a fixed cap
//! amount instead of a percentage.

use tracing::debug;

use crate::config::PayrollConfig;
use crate::error::SalaryResult;
use crate::models::{Allocation, AuditStep, Contribution};

use super::percentage::amount_from_percentage;

/// The result of a Provident Fund calculation.
#[derive(Debug, Clone)]
pub struct ProvidentFundResult {
    /// Employee PF deduction.
    pub employee: Contribution,
    /// Employer PF contribution.
    pub employer: Contribution,
    /// Whether the earnings exceeded the PF ceiling.
    pub capped: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates employee and employer Provident Fund for an allocation.
///
/// When `basic + other_allowance` is strictly greater than
/// `pf_employee_limit`, each side's amount is `pf_cap_amount`. Otherwise each
/// side is its configured percentage of those earnings. The recorded
/// percentage is always the configured one, capped or not.
///
/// # Examples
///
/// ```
/// use salary_breakup::calculation::calculate_provident_fund;
/// use salary_breakup::config::PayrollConfig;
/// use salary_breakup::models::Allocation;
/// use rust_decimal::Decimal;
///
/// let allocation = Allocation {
///     basic: Decimal::from(25000),
///     hra: Decimal::from(10000),
///     other_allowance: Decimal::from(5000),
/// };
/// let result = calculate_provident_fund(&allocation, &PayrollConfig::default(), 2).unwrap();
///
/// assert!(result.capped);
/// assert_eq!(result.employee.amount, Decimal::from(1800));
/// assert_eq!(result.employee.percentage, Decimal::from(12));
/// ```
pub fn calculate_provident_fund(
    allocation: &Allocation,
    config: &PayrollConfig,
    step_number: u32,
) -> SalaryResult<ProvidentFundResult> {
    let earnings = allocation.earnings_for_pf()?;
    let capped = earnings > config.pf_employee_limit;

    let (employee_amount, employer_amount) = if capped {
        (config.pf_cap_amount, config.pf_cap_amount)
    } else {
        (
            amount_from_percentage(config.pf_percentage_employee, earnings)?,
            amount_from_percentage(config.pf_percentage_employer, earnings)?,
        )
    };

    let employee = Contribution::new(employee_amount, config.pf_percentage_employee);
    let employer = Contribution::new(employer_amount, config.pf_percentage_employer);

    debug!(%earnings, capped, employee = %employee.amount, employer = %employer.amount, "provident fund calculated");

    let reasoning = if capped {
        format!(
            "PF earnings ₹{} exceed limit ₹{} - both sides capped at ₹{}",
            earnings,
            config.pf_employee_limit.normalize(),
            config.pf_cap_amount.normalize()
        )
    } else {
        format!(
            "PF earnings ₹{} within limit ₹{} - employee {}% = ₹{}, employer {}% = ₹{}",
            earnings,
            config.pf_employee_limit.normalize(),
            config.pf_percentage_employee.normalize(),
            employee.amount,
            config.pf_percentage_employer.normalize(),
            employer.amount
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "provident_fund".to_string(),
        rule_name: "Provident Fund".to_string(),
        input: serde_json::json!({
            "basic": allocation.basic.to_string(),
            "other_allowance": allocation.other_allowance.to_string(),
            "earnings_for_pf": earnings.to_string(),
            "pf_employee_limit": config.pf_employee_limit.normalize().to_string()
        }),
        output: serde_json::json!({
            "capped": capped,
            "employee_amount": employee.amount.to_string(),
            "employer_amount": employer.amount.to_string()
        }),
        reasoning,
    };

    Ok(ProvidentFundResult {
        employee,
        employer,
        capped,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn allocation(basic: &str, hra: &str, other: &str) -> Allocation {
        Allocation {
            basic: dec(basic),
            hra: dec(hra),
            other_allowance: dec(other),
        }
    }

    #[test]
    fn test_pf_capped_above_limit() {
        let result = calculate_provident_fund(
            &allocation("25000.00", "10000.00", "5000.00"),
            &PayrollConfig::default(),
            1,
        )
        .unwrap();

        assert!(result.capped);
        assert_eq!(result.employee, Contribution::new(dec("1800"), dec("12")));
        assert_eq!(result.employer, Contribution::new(dec("1800"), dec("12")));
        assert!(result.audit_step.output["capped"].as_bool().unwrap());
    }

    #[test]
    fn test_pf_percentage_below_limit() {
        let result = calculate_provident_fund(
            &allocation("6000.00", "2400.00", "2000.00"),
            &PayrollConfig::default(),
            1,
        )
        .unwrap();

        assert!(!result.capped);
        assert_eq!(result.employee.amount, dec("960.00"));
        assert_eq!(result.employer.amount, dec("960.00"));
        assert_eq!(result.employee.percentage, dec("12"));
    }

    #[test]
    fn test_pf_ignores_hra() {
        // HRA alone would push earnings over the limit if it counted
        let result = calculate_provident_fund(
            &allocation("10000.00", "50000.00", "5000.00"),
            &PayrollConfig::default(),
            1,
        )
        .unwrap();

        assert!(!result.capped);
        assert_eq!(result.employee.amount, dec("1800.00"));
    }

    #[test]
    fn test_pf_at_exact_limit_is_not_capped() {
        let result = calculate_provident_fund(
            &allocation("10000.00", "0", "5000.00"),
            &PayrollConfig::default(),
            1,
        )
        .unwrap();

        assert!(!result.capped);
        assert_eq!(result.employee.amount, dec("1800.00"));
    }

    #[test]
    fn test_pf_just_above_limit_is_capped() {
        let result = calculate_provident_fund(
            &allocation("10000.01", "0", "5000.00"),
            &PayrollConfig::default(),
            1,
        )
        .unwrap();

        assert!(result.capped);
        assert_eq!(result.employee.amount, dec("1800"));
    }

    #[test]
    fn test_pf_uses_separate_side_percentages() {
        let config = PayrollConfig {
            pf_percentage_employer: dec("13"),
            ..PayrollConfig::default()
        };
        let result =
            calculate_provident_fund(&allocation("8000.00", "0", "2000.00"), &config, 1).unwrap();

        assert_eq!(result.employee, Contribution::new(dec("1200.00"), dec("12")));
        assert_eq!(result.employer, Contribution::new(dec("1300.00"), dec("13")));
    }

    #[test]
    fn test_pf_zero_allocation_is_zero_amount_with_configured_percentage() {
        let result =
            calculate_provident_fund(&Allocation::ZERO, &PayrollConfig::default(), 1).unwrap();

        assert_eq!(result.employee.amount, Decimal::ZERO);
        assert_eq!(result.employer.amount, Decimal::ZERO);
        assert_eq!(result.employee.percentage, dec("12"));
    }

    #[test]
    fn test_pf_uses_configured_cap_amount() {
        let config = PayrollConfig {
            pf_cap_amount: dec("2000"),
            ..PayrollConfig::default()
        };
        let result =
            calculate_provident_fund(&allocation("30000.00", "0", "0"), &config, 1).unwrap();

        assert_eq!(result.employee.amount, dec("2000"));
        assert_eq!(result.employer.amount, dec("2000"));
    }

    #[test]
    fn test_pf_earnings_overflow_is_an_error() {
        let result = calculate_provident_fund(
            &allocation(
                "50000000000000000000000000000",
                "0",
                "50000000000000000000000000000",
            ),
            &PayrollConfig::default(),
            1,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_pf_audit_reasoning() {
        let result = calculate_provident_fund(
            &allocation("25000.00", "10000.00", "5000.00"),
            &PayrollConfig::default(),
            4,
        )
        .unwrap();

        assert_eq!(result.audit_step.step_number, 4);
        assert_eq!(result.audit_step.rule_id, "provident_fund");
        assert!(result.audit_step.reasoning.contains("capped at ₹1800"));
        assert_eq!(
            result.audit_step.input["earnings_for_pf"].as_str().unwrap(),
            "30000.00"
        );
    }
}
