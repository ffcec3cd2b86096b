// 🧮 Ratio Calculators
// Pure functions computing the two financial ratios used by the filters

use crate::error::QualifierError;

/// Monthly debt-to-income ratio: `debt / income`.
///
/// No rounding is applied here; two-decimal rounding is a display concern.
/// A zero income makes the ratio undefined and fails the run.
pub fn monthly_debt_ratio(debt: f64, income: f64) -> Result<f64, QualifierError> {
    if income == 0.0 {
        return Err(QualifierError::DivisionByZero {
            ratio: "monthly debt-to-income ratio",
        });
    }
    Ok(debt / income)
}

/// Loan-to-value ratio: `loan_amount / home_value`.
///
/// Same zero-denominator contract as `monthly_debt_ratio`. Sign validation
/// is the input collector's responsibility, not this function's.
pub fn loan_to_value_ratio(loan_amount: f64, home_value: f64) -> Result<f64, QualifierError> {
    if home_value == 0.0 {
        return Err(QualifierError::DivisionByZero {
            ratio: "loan-to-value ratio",
        });
    }
    Ok(loan_amount / home_value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_debt_ratio() {
        let ratio = monthly_debt_ratio(2000.0, 8000.0).unwrap();
        assert_eq!(ratio, 0.25);
    }

    #[test]
    fn test_loan_to_value_ratio() {
        let ratio = loan_to_value_ratio(400000.0, 500000.0).unwrap();
        assert_eq!(ratio, 0.8);
    }

    #[test]
    fn test_ratios_are_not_clamped() {
        // Debt above income is unusual but the value is passed through as-is
        let ratio = monthly_debt_ratio(9000.0, 3000.0).unwrap();
        assert_eq!(ratio, 3.0);
    }

    #[test]
    fn test_zero_income_is_division_by_zero() {
        let err = monthly_debt_ratio(2000.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            QualifierError::DivisionByZero {
                ratio: "monthly debt-to-income ratio"
            }
        );
    }

    #[test]
    fn test_zero_home_value_is_division_by_zero() {
        let err = loan_to_value_ratio(400000.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            QualifierError::DivisionByZero {
                ratio: "loan-to-value ratio"
            }
        );
    }

    #[test]
    fn test_calculators_are_deterministic() {
        let first = monthly_debt_ratio(1234.56, 7890.12).unwrap();
        let second = monthly_debt_ratio(1234.56, 7890.12).unwrap();
        assert_eq!(first, second);
    }
}
