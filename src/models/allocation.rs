//! Salary allocation models.
//!
//! An [`Allocation`] splits the gross amount into Basic Pay, HRA and Other
//! Allowance. The [`AllocationStatus`] records how the allocation was
//! arrived at on the latest recomputation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SalaryError, SalaryResult};

/// The monthly salary components derived from the gross amount.
///
/// # Example
///
/// ```
/// use salary_breakup::models::Allocation;
/// use rust_decimal::Decimal;
///
/// let allocation = Allocation {
///     basic: Decimal::from(25000),
///     hra: Decimal::from(10000),
///     other_allowance: Decimal::from(5000),
/// };
/// assert_eq!(allocation.gross_monthly().unwrap(), Decimal::from(40000));
/// assert_eq!(allocation.earnings_for_pf().unwrap(), Decimal::from(30000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Basic Pay.
    pub basic: Decimal,
    /// House Rent Allowance, a percentage of Basic Pay.
    pub hra: Decimal,
    /// Other Allowance.
    pub other_allowance: Decimal,
}

impl Allocation {
    /// An allocation with every component at zero.
    pub const ZERO: Allocation = Allocation {
        basic: Decimal::ZERO,
        hra: Decimal::ZERO,
        other_allowance: Decimal::ZERO,
    };

    /// Sum of all three components.
    pub fn gross_monthly(&self) -> SalaryResult<Decimal> {
        self.basic
            .checked_add(self.hra)
            .and_then(|sum| sum.checked_add(self.other_allowance))
            .ok_or_else(|| SalaryError::overflow("gross monthly"))
    }

    /// Earnings that attract Provident Fund: everything except HRA.
    pub fn earnings_for_pf(&self) -> SalaryResult<Decimal> {
        self.basic
            .checked_add(self.other_allowance)
            .ok_or_else(|| SalaryError::overflow("PF earnings"))
    }
}

/// How an allocation was produced from the current inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    /// Gross amount was absent or zero; every component was reset to zero.
    Reset,
    /// All inputs were present; components were recomputed.
    Computed,
    /// Gross was present but a percentage was absent; the previous
    /// components were kept unchanged.
    Held,
}

impl AllocationStatus {
    /// Returns the snake_case name used in audit records.
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationStatus::Reset => "reset",
            AllocationStatus::Computed => "computed",
            AllocationStatus::Held => "held",
        }
    }
}
