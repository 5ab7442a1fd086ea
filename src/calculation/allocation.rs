//! Salary allocation functionality.
//!
//! This module splits a gross monthly amount into Basic Pay, HRA and Other
//! Allowance. Basic and Other are percentages of gross; HRA is a percentage
//! of Basic.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::SalaryResult;
use crate::models::{Allocation, AllocationStatus, AuditStep, AuditWarning, SalaryInput};

use super::percentage::{amount_from_percentage, non_zero};

/// Warning code recorded when a previous allocation is carried forward.
pub const ALLOCATION_HELD_WARNING: &str = "ALLOCATION_HELD";

/// The result of an allocation, including how it was produced.
#[derive(Debug, Clone)]
pub struct AllocationResult {
    /// The allocation to use for the downstream stages.
    pub allocation: Allocation,
    /// Whether the allocation was reset, recomputed or held.
    pub status: AllocationStatus,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
    /// Set when the previous allocation was held.
    pub warning: Option<AuditWarning>,
}

/// Allocates the gross amount across Basic, HRA and Other Allowance.
///
/// The rules, applied in order:
///
/// 1. Gross absent or zero: every component is reset to zero, whatever the
///    percentages are.
/// 2. Gross present but any percentage absent or zero: nothing is
///    recomputed and `previous` is returned unchanged.
/// 3. Otherwise `basic = basic% of gross`, `hra = hra% of basic`,
///    `other = other% of gross`, each rounded to two places.
///
/// Rule 2 means a missing gross clears the outputs while a missing
/// percentage leaves them stale. A held result carries an
/// [`ALLOCATION_HELD_WARNING`] warning. A component too large for a
/// `Decimal` fails the allocation with a calculation error.
///
/// # Examples
///
/// ```
/// use salary_breakup::calculation::calculate_allocation;
/// use salary_breakup::models::{Allocation, AllocationStatus, SalaryInput};
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(
///     Decimal::from(50000),
///     Decimal::from(50),
///     Decimal::from(40),
///     Decimal::from(10),
/// );
/// let result = calculate_allocation(&input, &Allocation::ZERO, 1).unwrap();
///
/// assert_eq!(result.status, AllocationStatus::Computed);
/// assert_eq!(result.allocation.basic, Decimal::from(25000));
/// assert_eq!(result.allocation.hra, Decimal::from(10000));
/// assert_eq!(result.allocation.other_allowance, Decimal::from(5000));
/// ```
pub fn calculate_allocation(
    input: &SalaryInput,
    previous: &Allocation,
    step_number: u32,
) -> SalaryResult<AllocationResult> {
    let Some(gross) = non_zero(input.gross_amount) else {
        debug!("gross amount absent, resetting allocation");
        return Ok(build_result(
            input,
            Allocation::ZERO,
            AllocationStatus::Reset,
            step_number,
            "Gross amount is absent or zero - all components reset to zero".to_string(),
        ));
    };

    let percentages = (
        non_zero(input.basic_percentage),
        non_zero(input.hra_percentage),
        non_zero(input.other_percentage),
    );

    let (Some(basic_pct), Some(hra_pct), Some(other_pct)) = percentages else {
        let missing = missing_percentages(input).join(", ");
        warn!(missing = %missing, "percentage absent, holding previous allocation");
        let mut result = build_result(
            input,
            *previous,
            AllocationStatus::Held,
            step_number,
            format!(
                "Gross is ₹{} but {} not provided - previous allocation kept",
                gross.normalize(),
                missing
            ),
        );
        result.warning = Some(AuditWarning {
            code: ALLOCATION_HELD_WARNING.to_string(),
            message: format!(
                "Allocation not recomputed: {} not provided; showing previous values",
                missing
            ),
            severity: "low".to_string(),
        });
        return Ok(result);
    };

    let basic = amount_from_percentage(basic_pct, gross)?;
    let hra = amount_from_percentage(hra_pct, basic)?;
    let other_allowance = amount_from_percentage(other_pct, gross)?;

    debug!(%basic, %hra, %other_allowance, "allocation computed");

    Ok(build_result(
        input,
        Allocation {
            basic,
            hra,
            other_allowance,
        },
        AllocationStatus::Computed,
        step_number,
        format!(
            "Basic {}% of ₹{} = ₹{}; HRA {}% of basic = ₹{}; Other {}% of ₹{} = ₹{}",
            basic_pct.normalize(),
            gross.normalize(),
            basic,
            hra_pct.normalize(),
            hra,
            other_pct.normalize(),
            gross.normalize(),
            other_allowance
        ),
    ))
}

fn missing_percentages(input: &SalaryInput) -> Vec<&'static str> {
    [
        ("basic_percentage", input.basic_percentage),
        ("hra_percentage", input.hra_percentage),
        ("other_percentage", input.other_percentage),
    ]
    .into_iter()
    .filter(|(_, value)| non_zero(*value).is_none())
    .map(|(name, _)| name)
    .collect()
}

fn optional_to_json(value: Option<Decimal>) -> serde_json::Value {
    match value {
        Some(v) => serde_json::Value::String(v.normalize().to_string()),
        None => serde_json::Value::Null,
    }
}

fn build_result(
    input: &SalaryInput,
    allocation: Allocation,
    status: AllocationStatus,
    step_number: u32,
    reasoning: String,
) -> AllocationResult {
    let audit_step = AuditStep {
        step_number,
        rule_id: "allocation".to_string(),
        rule_name: "Salary Allocation".to_string(),
        input: serde_json::json!({
            "gross_amount": optional_to_json(input.gross_amount),
            "basic_percentage": optional_to_json(input.basic_percentage),
            "hra_percentage": optional_to_json(input.hra_percentage),
            "other_percentage": optional_to_json(input.other_percentage)
        }),
        output: serde_json::json!({
            "status": status.as_str(),
            "basic": allocation.basic.to_string(),
            "hra": allocation.hra.to_string(),
            "other_allowance": allocation.other_allowance.to_string()
        }),
        reasoning,
    };

    AllocationResult {
        allocation,
        status,
        audit_step,
        warning: None,
    }
}
