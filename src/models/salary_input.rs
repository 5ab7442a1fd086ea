//! Salary input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The raw inputs a caller supplies for one recomputation.
///
/// Each field is optional because form inputs may be blank. A blank field
/// and a zero field are treated identically by the calculation. Ranges are
/// not checked: a percentage above 100 or below 0 is used as given.
///
/// Browser clients may send the camelCase names (`grossAmount`,
/// `basicPercentage`, ...) instead of the snake_case ones.
///
/// # Example
///
/// ```
/// use salary_breakup::models::SalaryInput;
/// use rust_decimal::Decimal;
///
/// let input = SalaryInput::new(
///     Decimal::from(50000),
///     Decimal::from(50),
///     Decimal::from(40),
///     Decimal::from(10),
/// );
/// assert_eq!(input.gross_amount, Some(Decimal::from(50000)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    /// Gross monthly amount.
    #[serde(default, alias = "grossAmount")]
    pub gross_amount: Option<Decimal>,
    /// Share of gross paid as Basic Pay, as a percentage.
    #[serde(default, alias = "basicPercentage")]
    pub basic_percentage: Option<Decimal>,
    /// HRA as a percentage of Basic Pay.
    #[serde(default, alias = "hraPercentage")]
    pub hra_percentage: Option<Decimal>,
    /// Share of gross paid as Other Allowance, as a percentage.
    #[serde(default, alias = "otherPercentage")]
    pub other_percentage: Option<Decimal>,
}

impl SalaryInput {
    /// Creates an input with every field present.
    pub fn new(
        gross_amount: Decimal,
        basic_percentage: Decimal,
        hra_percentage: Decimal,
        other_percentage: Decimal,
    ) -> Self {
        Self {
            gross_amount: Some(gross_amount),
            basic_percentage: Some(basic_percentage),
            hra_percentage: Some(hra_percentage),
            other_percentage: Some(other_percentage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_absent() {
        let input = SalaryInput::default();
        assert!(input.gross_amount.is_none());
        assert!(input.basic_percentage.is_none());
        assert!(input.hra_percentage.is_none());
        assert!(input.other_percentage.is_none());
    }

    #[test]
    fn test_deserialize_with_missing_and_null_fields() {
        let json = r#"{"gross_amount": 50000, "basic_percentage": null}"#;
        let input: SalaryInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.gross_amount, Some(Decimal::from(50000)));
        assert!(input.basic_percentage.is_none());
        assert!(input.hra_percentage.is_none());
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let json = r#"{
            "grossAmount": 30000,
            "basicPercentage": 50,
            "hraPercentage": 40,
            "otherPercentage": 10
        }"#;
        let input: SalaryInput = serde_json::from_str(json).unwrap();

        assert_eq!(
            input,
            SalaryInput::new(
                Decimal::from(30000),
                Decimal::from(50),
                Decimal::from(40),
                Decimal::from(10)
            )
        );
    }
}
