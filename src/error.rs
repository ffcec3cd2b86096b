// ⚠️ Error Types - Structured errors for the qualification core
// The core surfaces these to its caller; exit messages live in the CLI

use std::fmt;

// ============================================================================
// ERROR TAXONOMY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualifierError {
    /// A required numeric field could not be parsed (applicant answer or
    /// rate-sheet field). The run aborts before any filtering happens.
    InputFormat { field: String, value: String },

    /// A ratio denominator (income or home value) was zero. The calculators
    /// never substitute a default value.
    DivisionByZero { ratio: &'static str },
}

impl QualifierError {
    /// Shorthand for an InputFormat error
    pub fn input_format(field: &str, value: &str) -> Self {
        QualifierError::InputFormat {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for QualifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualifierError::InputFormat { field, value } => {
                write!(f, "invalid numeric value for {}: \"{}\"", field, value)
            }
            QualifierError::DivisionByZero { ratio } => {
                write!(f, "cannot compute {}: division by zero", ratio)
            }
        }
    }
}

impl std::error::Error for QualifierError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_format_display() {
        let err = QualifierError::input_format("credit score", "seven hundred");
        assert_eq!(
            err.to_string(),
            "invalid numeric value for credit score: \"seven hundred\""
        );
    }

    #[test]
    fn test_division_by_zero_display() {
        let err = QualifierError::DivisionByZero {
            ratio: "monthly debt-to-income ratio",
        };
        assert_eq!(
            err.to_string(),
            "cannot compute monthly debt-to-income ratio: division by zero"
        );
    }
}
