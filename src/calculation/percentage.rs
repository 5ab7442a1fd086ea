//! Percentage-of-amount arithmetic.
//!
//! Every monetary figure in the engine is derived through
//! [`amount_from_percentage`], which treats missing operands as zero,
//! rounds to whole paise and reports overflow instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{SalaryError, SalaryResult};

/// Decimal places kept on every derived monetary amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary amount to two decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use salary_breakup::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("1.005").unwrap()), Decimal::from_str("1.01").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("1.004").unwrap()), Decimal::from_str("1.00").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Returns the value when present and non-zero.
///
/// A blank form field and a field holding zero mean the same thing to the
/// calculation.
pub fn non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

/// Computes `percentage` percent of `base`, rounded to two decimal places.
///
/// Either operand may be absent. An absent or zero operand yields zero.
/// Negative or out-of-range percentages are applied as given. A product too
/// large for a `Decimal` is a [`SalaryError::CalculationError`].
///
/// # Examples
///
/// ```
/// use salary_breakup::calculation::amount_from_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let pf = amount_from_percentage(Decimal::from(12), Decimal::from(10000)).unwrap();
/// assert_eq!(pf, Decimal::from(1200));
///
/// let esic = amount_from_percentage(Decimal::from_str("0.75").unwrap(), Decimal::from(21000)).unwrap();
/// assert_eq!(esic, Decimal::from_str("157.50").unwrap());
///
/// assert_eq!(amount_from_percentage(None, Decimal::from(10000)).unwrap(), Decimal::ZERO);
/// assert!(amount_from_percentage(Decimal::from(1000), Decimal::MAX).is_err());
/// ```
pub fn amount_from_percentage(
    percentage: impl Into<Option<Decimal>>,
    base: impl Into<Option<Decimal>>,
) -> SalaryResult<Decimal> {
    match (non_zero(percentage.into()), non_zero(base.into())) {
        (Some(percentage), Some(base)) => percentage
            .checked_div(Decimal::ONE_HUNDRED)
            .and_then(|rate| rate.checked_mul(base))
            .map(round_currency)
            .ok_or_else(|| {
                SalaryError::overflow(&format!("{}% of {}", percentage.normalize(), base.normalize()))
            }),
        _ => Ok(Decimal::ZERO),
    }
}
