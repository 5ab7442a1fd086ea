//! The recompute pipeline.
//!
//! [`SalaryCalculator`] shares the configuration for a session and owns the
//! last allocation it produced. Each call to [`SalaryCalculator::recompute`]
//! runs allocation, then PF and ESIC on the fresh allocation, then the
//! aggregates, in that order.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::SalaryResult;
use crate::models::{
    Allocation, AuditTrace, SalaryBreakdown, SalaryInput, StatutoryContributions,
};

use super::aggregation::{breakdown_rows, calculate_totals, chart_series, summary_labels};
use super::allocation::calculate_allocation;
use super::esic::calculate_esic;
use super::provident_fund::calculate_provident_fund;

/// A calculation session.
///
/// The only state carried between recomputations is the previous
/// allocation, which is returned unchanged when the gross amount is present
/// but a percentage is not. The configuration sits behind an [`Arc`], so
/// sessions built from shared server state do not copy it.
///
/// # Example
///
/// ```
/// use salary_breakup::calculation::SalaryCalculator;
/// use salary_breakup::config::PayrollConfig;
/// use salary_breakup::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let mut calculator = SalaryCalculator::new(PayrollConfig::default());
/// let breakdown = calculator
///     .recompute(&SalaryInput::new(
///         Decimal::from(50000),
///         Decimal::from(50),
///         Decimal::from(40),
///         Decimal::from(10),
///     ))
///     .unwrap();
///
/// assert_eq!(breakdown.totals.total_deductions, Decimal::from(1800));
/// assert_eq!(breakdown.totals.net_payment, Decimal::from(38200));
/// ```
#[derive(Debug, Clone)]
pub struct SalaryCalculator {
    config: Arc<PayrollConfig>,
    allocation: Allocation,
}

impl SalaryCalculator {
    /// Starts a session with the given configuration and a zero allocation.
    ///
    /// Accepts an owned [`PayrollConfig`] or an `Arc` shared with others.
    pub fn new(config: impl Into<Arc<PayrollConfig>>) -> Self {
        Self::with_allocation(config, Allocation::ZERO)
    }

    /// Starts a session that resumes from an earlier allocation.
    pub fn with_allocation(
        config: impl Into<Arc<PayrollConfig>>,
        allocation: Allocation,
    ) -> Self {
        Self {
            config: config.into(),
            allocation,
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the allocation produced by the latest recomputation.
    pub fn allocation(&self) -> &Allocation {
        &self.allocation
    }

    /// Recomputes the full breakdown from the current inputs.
    ///
    /// Fails only when an amount overflows a `Decimal`. The session then
    /// keeps its previous allocation.
    pub fn recompute(&mut self, input: &SalaryInput) -> SalaryResult<SalaryBreakdown> {
        let start_time = Instant::now();
        let mut audit_trace = AuditTrace::default();
        let mut step_number: u32 = 1;

        let allocation_result = calculate_allocation(input, &self.allocation, step_number)?;
        let allocation = allocation_result.allocation;
        audit_trace.steps.push(allocation_result.audit_step);
        audit_trace.warnings.extend(allocation_result.warning);
        step_number += 1;

        let pf = calculate_provident_fund(&allocation, &self.config, step_number)?;
        audit_trace.steps.push(pf.audit_step);
        step_number += 1;

        let esic = calculate_esic(&allocation, &self.config, step_number)?;
        audit_trace.steps.push(esic.audit_step);

        let contributions = StatutoryContributions {
            pf_employee: pf.employee,
            pf_employer: pf.employer,
            esic_employee: esic.employee,
            esic_employer: esic.employer,
        };

        let totals = calculate_totals(&allocation, &contributions)?;
        let rows = breakdown_rows(&allocation, &contributions)?;
        let chart = chart_series(&allocation, &totals);
        let summary = summary_labels(&totals, &self.config.currency_symbol);

        self.allocation = allocation;

        audit_trace.duration_us = start_time.elapsed().as_micros() as u64;

        debug!(
            status = allocation_result.status.as_str(),
            gross_monthly = %totals.gross_monthly,
            net_payment = %totals.net_payment,
            "salary breakdown recomputed"
        );

        Ok(SalaryBreakdown {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            input: input.clone(),
            allocation_status: allocation_result.status,
            allocation: self.allocation,
            contributions,
            rows,
            chart,
            totals,
            summary,
            audit_trace,
        })
    }
}

impl Default for SalaryCalculator {
    fn default() -> Self {
        Self::new(PayrollConfig::default())
    }
}

/// Computes a breakdown in a fresh session.
///
/// Equivalent to a new [`SalaryCalculator`] with a zero previous
/// allocation, so an input with a missing percentage yields zeros.
pub fn calculate_breakdown(
    config: impl Into<Arc<PayrollConfig>>,
    input: &SalaryInput,
) -> SalaryResult<SalaryBreakdown> {
    SalaryCalculator::new(config).recompute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SalaryError;
    use crate::models::{AllocationStatus, Contribution};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(gross: &str, basic: &str, hra: &str, other: &str) -> SalaryInput {
        SalaryInput::new(dec(gross), dec(basic), dec(hra), dec(other))
    }

    #[test]
    fn test_high_salary_caps_pf_and_skips_esic() {
        let mut calculator = SalaryCalculator::default();
        let breakdown = calculator.recompute(&input("50000", "50", "40", "10")).unwrap();

        assert_eq!(breakdown.allocation_status, AllocationStatus::Computed);
        assert_eq!(breakdown.allocation.basic, dec("25000.00"));
        assert_eq!(
            breakdown.contributions.pf_employee,
            Contribution::new(dec("1800"), dec("12"))
        );
        assert_eq!(breakdown.contributions.esic_employee, Contribution::ZERO);
        assert_eq!(breakdown.contributions.esic_employer, Contribution::ZERO);
        assert_eq!(breakdown.totals.gross_monthly, dec("40000.00"));
        assert_eq!(breakdown.totals.total_deductions, dec("1800"));
        assert_eq!(breakdown.totals.total_employer_contributions, dec("1800"));
        assert_eq!(breakdown.totals.net_payment, dec("38200.00"));
    }

    #[test]
    fn test_low_salary_pays_pf_percentage_and_esic() {
        // basic 6000, hra 2400, other 2000 -> PF on 8000, ESIC on 10400
        let mut calculator = SalaryCalculator::default();
        let breakdown = calculator.recompute(&input("20000", "30", "40", "10")).unwrap();

        assert_eq!(breakdown.contributions.pf_employee.amount, dec("960.00"));
        assert_eq!(breakdown.contributions.esic_employee.amount, dec("78.00"));
        assert_eq!(breakdown.contributions.esic_employer.amount, dec("338.00"));
        assert_eq!(breakdown.totals.total_deductions, dec("1038.00"));
        assert_eq!(breakdown.totals.net_payment, dec("9362.00"));
    }

    #[test]
    fn test_stages_run_in_order_with_step_numbers() {
        let mut calculator = SalaryCalculator::default();
        let breakdown = calculator.recompute(&input("50000", "50", "40", "10")).unwrap();

        let rule_ids: Vec<&str> = breakdown
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(rule_ids, vec!["allocation", "provident_fund", "esic"]);

        let step_numbers: Vec<u32> = breakdown
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(step_numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_deductions_use_fresh_allocation() {
        let mut calculator = SalaryCalculator::default();
        calculator.recompute(&input("50000", "50", "40", "10")).unwrap();

        // Second run falls under both ceilings; PF/ESIC must follow it
        let breakdown = calculator.recompute(&input("10000", "50", "40", "10")).unwrap();

        assert_eq!(breakdown.allocation.basic, dec("5000.00"));
        assert_eq!(breakdown.contributions.pf_employee.amount, dec("720.00"));
        assert!(breakdown.contributions.esic_employee.amount > Decimal::ZERO);
    }

    #[test]
    fn test_missing_percentage_holds_previous_allocation() {
        let mut calculator = SalaryCalculator::default();
        let first = calculator.recompute(&input("50000", "50", "40", "10")).unwrap();

        let partial = SalaryInput {
            other_percentage: None,
            ..input("90000", "50", "40", "10")
        };
        let second = calculator.recompute(&partial).unwrap();

        assert_eq!(second.allocation_status, AllocationStatus::Held);
        assert_eq!(second.allocation, first.allocation);
        assert_eq!(second.totals, first.totals);
        assert_eq!(second.audit_trace.warnings.len(), 1);
        assert_eq!(calculator.allocation(), &first.allocation);
    }

    #[test]
    fn test_missing_gross_resets_everything() {
        let mut calculator = SalaryCalculator::default();
        calculator.recompute(&input("50000", "50", "40", "10")).unwrap();

        let cleared = SalaryInput {
            gross_amount: None,
            ..input("1", "50", "40", "10")
        };
        let breakdown = calculator.recompute(&cleared).unwrap();

        assert_eq!(breakdown.allocation_status, AllocationStatus::Reset);
        assert_eq!(breakdown.allocation, Allocation::ZERO);
        assert_eq!(breakdown.contributions.pf_employee.amount, Decimal::ZERO);
        assert_eq!(breakdown.contributions.pf_employer.amount, Decimal::ZERO);
        assert_eq!(breakdown.contributions.esic_employee.amount, Decimal::ZERO);
        assert_eq!(breakdown.contributions.esic_employer.amount, Decimal::ZERO);
        assert_eq!(breakdown.totals.net_payment, Decimal::ZERO);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut calculator = SalaryCalculator::default();
        let first = calculator.recompute(&input("27500", "45", "35", "15")).unwrap();
        let second = calculator.recompute(&input("27500", "45", "35", "15")).unwrap();

        assert_eq!(first.allocation, second.allocation);
        assert_eq!(first.contributions, second.contributions);
        assert_eq!(first.rows, second.rows);
        assert_eq!(first.chart, second.chart);
        assert_eq!(first.totals, second.totals);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_summary_uses_configured_currency_symbol() {
        let config = PayrollConfig {
            currency_symbol: "Rs. ".to_string(),
            ..PayrollConfig::default()
        };
        let breakdown = calculate_breakdown(config, &input("50000", "50", "40", "10")).unwrap();

        assert_eq!(breakdown.summary[0], "Total Deductions: Rs. 1800.00");
        assert_eq!(breakdown.summary[2], "Net Payment: Rs. 38200.00");
    }

    #[test]
    fn test_calculate_breakdown_starts_from_zero() {
        let partial = SalaryInput {
            basic_percentage: None,
            ..input("50000", "50", "40", "10")
        };
        let breakdown = calculate_breakdown(PayrollConfig::default(), &partial).unwrap();

        assert_eq!(breakdown.allocation_status, AllocationStatus::Held);
        assert_eq!(breakdown.allocation, Allocation::ZERO);
    }

    #[test]
    fn test_with_allocation_resumes_session() {
        let previous = Allocation {
            basic: dec("6000.00"),
            hra: dec("2400.00"),
            other_allowance: dec("2000.00"),
        };
        let mut calculator =
            SalaryCalculator::with_allocation(PayrollConfig::default(), previous);
        let breakdown = calculator
            .recompute(&SalaryInput {
                gross_amount: Some(dec("20000")),
                ..SalaryInput::default()
            })
            .unwrap();

        assert_eq!(breakdown.allocation, previous);
        assert_eq!(breakdown.contributions.pf_employee.amount, dec("960.00"));
    }

    #[test]
    fn test_sessions_share_one_configuration() {
        let config = Arc::new(PayrollConfig::default());
        let first = SalaryCalculator::new(Arc::clone(&config));
        let second = SalaryCalculator::with_allocation(Arc::clone(&config), Allocation::ZERO);

        assert!(std::ptr::eq(first.config(), second.config()));
        assert_eq!(Arc::strong_count(&config), 3);
    }

    #[test]
    fn test_gross_past_decimal_range_fails_instead_of_panicking() {
        // 100% of each 5e28 component sums past Decimal::MAX
        let result = calculate_breakdown(
            PayrollConfig::default(),
            &input("50000000000000000000000000000", "100", "100", "100"),
        );

        assert!(matches!(result, Err(SalaryError::CalculationError { .. })));
    }

    #[test]
    fn test_yearly_overflow_fails_instead_of_panicking() {
        // Monthly amounts fit; twelve months of 1e28 do not
        let result = calculate_breakdown(
            PayrollConfig::default(),
            &input("10000000000000000000000000000", "100", "10", "10"),
        );

        let error = result.unwrap_err();
        assert!(error.to_string().contains("yearly Basic Pay"));
    }

    #[test]
    fn test_failed_recompute_keeps_previous_allocation() {
        let mut calculator = SalaryCalculator::default();
        let first = calculator.recompute(&input("50000", "50", "40", "10")).unwrap();

        let result =
            calculator.recompute(&input("10000000000000000000000000000", "100", "10", "10"));

        assert!(result.is_err());
        assert_eq!(calculator.allocation(), &first.allocation);
    }
}
