//! Configuration types for salary breakup calculations.
//!
//! This module contains the statutory rates and ceilings that drive the
//! Provident Fund and ESIC calculations. The keys mirror the camelCase
//! mapping used by browser clients, so the same document can be shared.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default employee Provident Fund percentage.
pub const DEFAULT_PF_PERCENTAGE_EMPLOYEE: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
/// Default employer Provident Fund percentage.
pub const DEFAULT_PF_PERCENTAGE_EMPLOYER: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
/// Default employee ESIC percentage (0.75%).
pub const DEFAULT_ESIC_PERCENTAGE_EMPLOYEE: Decimal = Decimal::from_parts(75, 0, 0, false, 2);
/// Default employer ESIC percentage (3.25%).
pub const DEFAULT_ESIC_PERCENTAGE_EMPLOYER: Decimal = Decimal::from_parts(325, 0, 0, false, 2);
/// Default monthly PF wage ceiling above which PF is capped.
pub const DEFAULT_PF_EMPLOYEE_LIMIT: Decimal = Decimal::from_parts(15000, 0, 0, false, 0);
/// Default monthly gross ceiling above which ESIC no longer applies.
pub const DEFAULT_ESIC_EMPLOYEE_LIMIT: Decimal = Decimal::from_parts(21000, 0, 0, false, 0);
/// Default fixed PF amount per side once earnings exceed the ceiling.
pub const DEFAULT_PF_CAP_AMOUNT: Decimal = Decimal::from_parts(1800, 0, 0, false, 0);
/// Default currency symbol for summary labels.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Statutory rates, ceilings and display settings for a calculation session.
///
/// The configuration is immutable once a [`SalaryCalculator`] has been
/// constructed with it. Keys missing from a configuration document fall
/// back to the values of [`PayrollConfig::default`].
///
/// [`SalaryCalculator`]: crate::calculation::SalaryCalculator
///
/// # Example
///
/// ```
/// use salary_breakup::config::PayrollConfig;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.pf_percentage_employee, Decimal::from(12));
/// assert_eq!(config.esic_employee_limit, Decimal::from(21000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayrollConfig {
    /// Employee share of Provident Fund, as a percentage.
    pub pf_percentage_employee: Decimal,
    /// Employer share of Provident Fund, as a percentage.
    pub pf_percentage_employer: Decimal,
    /// Employee share of ESIC, as a percentage.
    pub esic_percentage_employee: Decimal,
    /// Employer share of ESIC, as a percentage.
    pub esic_percentage_employer: Decimal,
    /// PF-eligible earnings above this amount pay the capped PF amount.
    pub pf_employee_limit: Decimal,
    /// Gross monthly amounts above this ceiling are exempt from ESIC.
    pub esic_employee_limit: Decimal,
    /// The PF amount charged to each side when earnings exceed the limit.
    pub pf_cap_amount: Decimal,
    /// Symbol prefixed to monetary summary labels.
    pub currency_symbol: String,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            pf_percentage_employee: DEFAULT_PF_PERCENTAGE_EMPLOYEE,
            pf_percentage_employer: DEFAULT_PF_PERCENTAGE_EMPLOYER,
            esic_percentage_employee: DEFAULT_ESIC_PERCENTAGE_EMPLOYEE,
            esic_percentage_employer: DEFAULT_ESIC_PERCENTAGE_EMPLOYER,
            pf_employee_limit: DEFAULT_PF_EMPLOYEE_LIMIT,
            esic_employee_limit: DEFAULT_ESIC_EMPLOYEE_LIMIT,
            pf_cap_amount: DEFAULT_PF_CAP_AMOUNT,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl PayrollConfig {
    /// Returns every numeric field, rates and amounts alike, keyed by its
    /// document name.
    pub(crate) fn numeric_fields(&self) -> [(&'static str, Decimal); 7] {
        [
            ("pfPercentageEmployee", self.pf_percentage_employee),
            ("pfPercentageEmployer", self.pf_percentage_employer),
            ("esicPercentageEmployee", self.esic_percentage_employee),
            ("esicPercentageEmployer", self.esic_percentage_employer),
            ("pfEmployeeLimit", self.pf_employee_limit),
            ("esicEmployeeLimit", self.esic_employee_limit),
            ("pfCapAmount", self.pf_cap_amount),
        ]
    }
}
