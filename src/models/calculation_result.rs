//! Calculation result models for the salary breakup engine.
//!
//! This module contains the [`SalaryBreakdown`] type and its associated
//! structures: table rows, chart slices, totals and the audit trace that
//! records every decision taken while computing them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Allocation, AllocationStatus, SalaryInput, StatutoryContributions};
use crate::error::{SalaryError, SalaryResult};

/// Number of months used to annualise a monthly amount.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// One line of the monthly/yearly breakdown table.
///
/// # Example
///
/// ```
/// use salary_breakup::models::BreakdownRow;
/// use rust_decimal::Decimal;
///
/// let row = BreakdownRow::monthly("Basic Pay", Decimal::from(25000)).unwrap();
/// assert_eq!(row.yearly_amount, Decimal::from(300000));
///
/// assert!(BreakdownRow::monthly("Basic Pay", Decimal::MAX).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownRow {
    /// The component name shown to the user.
    pub description: String,
    /// The monthly amount.
    pub monthly_amount: Decimal,
    /// The monthly amount times twelve.
    pub yearly_amount: Decimal,
}

impl BreakdownRow {
    /// Creates a row from a monthly amount, deriving the yearly amount.
    ///
    /// Fails when twelve months of the amount overflow a `Decimal`.
    pub fn monthly(description: impl Into<String>, monthly_amount: Decimal) -> SalaryResult<Self> {
        let description = description.into();
        let yearly_amount = monthly_amount
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or_else(|| SalaryError::overflow(&format!("yearly {}", description)))?;

        Ok(Self {
            description,
            monthly_amount,
            yearly_amount,
        })
    }
}

/// One slice of the monthly breakdown chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    /// The slice label.
    pub label: String,
    /// The slice magnitude.
    pub value: Decimal,
}

/// Aggregated totals for a salary breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTotals {
    /// Basic + HRA + Other Allowance.
    pub gross_monthly: Decimal,
    /// PF employee + ESIC employee.
    pub total_deductions: Decimal,
    /// PF employer + ESIC employer.
    pub total_employer_contributions: Decimal,
    /// Gross monthly minus total deductions.
    pub net_payment: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate results that are valid but may surprise the caller,
/// such as an allocation carried over from earlier inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of one recomputation.
///
/// Carries the inputs it was computed from, every intermediate stage, the
/// presentation-ready rows, chart series and summary labels, and an audit
/// trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The inputs the breakdown was computed from.
    pub input: SalaryInput,
    /// How the allocation was produced.
    pub allocation_status: AllocationStatus,
    /// Basic, HRA and Other Allowance.
    pub allocation: Allocation,
    /// PF and ESIC lines for both sides.
    pub contributions: StatutoryContributions,
    /// Monthly/yearly table rows.
    pub rows: Vec<BreakdownRow>,
    /// Chart-ready monthly magnitudes.
    pub chart: Vec<ChartSlice>,
    /// Aggregated totals.
    pub totals: SalaryTotals,
    /// Currency-prefixed summary labels.
    pub summary: Vec<String>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl fmt::Display for SalaryBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<20} {:>16} {:>16}",
            "Description", "Monthly Amount", "Yearly Amount"
        )?;
        writeln!(f, "{}", "-".repeat(54))?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<20} {:>16.2} {:>16.2}",
                row.description, row.monthly_amount, row.yearly_amount
            )?;
        }
        writeln!(f)?;
        for line in &self.summary {
            writeln!(f, "{}", line)?;
        }
        for warning in &self.audit_trace.warnings {
            writeln!(f, "warning [{}]: {}", warning.code, warning.message)?;
        }
        Ok(())
    }
}
