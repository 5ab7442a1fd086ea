//! Statutory contribution models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SalaryError, SalaryResult};

/// One statutory deduction or contribution line.
///
/// `percentage` is the rate that was applied, as configured. For a capped
/// PF line it is still the configured rate even though `amount` is fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// The monetary amount.
    pub amount: Decimal,
    /// The percentage the amount was derived from.
    pub percentage: Decimal,
}

impl Contribution {
    /// A contribution of zero at zero percent.
    pub const ZERO: Contribution = Contribution {
        amount: Decimal::ZERO,
        percentage: Decimal::ZERO,
    };

    /// Creates a contribution line.
    pub fn new(amount: Decimal, percentage: Decimal) -> Self {
        Self { amount, percentage }
    }
}

/// The four statutory lines for one allocation.
///
/// # Example
///
/// ```
/// use salary_breakup::models::{Contribution, StatutoryContributions};
/// use rust_decimal::Decimal;
///
/// let contributions = StatutoryContributions {
///     pf_employee: Contribution::new(Decimal::from(1800), Decimal::from(12)),
///     pf_employer: Contribution::new(Decimal::from(1800), Decimal::from(12)),
///     esic_employee: Contribution::ZERO,
///     esic_employer: Contribution::ZERO,
/// };
/// assert_eq!(contributions.total_deductions().unwrap(), Decimal::from(1800));
/// assert_eq!(contributions.total_employer_contributions().unwrap(), Decimal::from(1800));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryContributions {
    /// Employee Provident Fund deduction.
    pub pf_employee: Contribution,
    /// Employer Provident Fund contribution.
    pub pf_employer: Contribution,
    /// Employee ESIC deduction.
    pub esic_employee: Contribution,
    /// Employer ESIC contribution.
    pub esic_employer: Contribution,
}

impl StatutoryContributions {
    /// Amounts withheld from the employee's pay.
    pub fn total_deductions(&self) -> SalaryResult<Decimal> {
        self.pf_employee
            .amount
            .checked_add(self.esic_employee.amount)
            .ok_or_else(|| SalaryError::overflow("total deductions"))
    }

    /// Amounts paid by the employer on top of gross pay.
    pub fn total_employer_contributions(&self) -> SalaryResult<Decimal> {
        self.pf_employer
            .amount
            .checked_add(self.esic_employer.amount)
            .ok_or_else(|| SalaryError::overflow("total employer contributions"))
    }
}
