// ============================================================================
// Calculator Errors
// Failures surfaced by operation selection and evaluation
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors returned by the calculator core.
///
/// None of these are recovered from internally; each one terminates the
/// current evaluation and is handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// Symbol is not one of `+`, `-`, `*`, `/`
    UnknownOperation(String),
    /// Second operand of a division is zero
    DivisionByZero,
    /// Result is negative while the sign policy forbids it
    NegativeResultNotAllowed,
    /// Result is outside the representable decimal range
    Overflow,
    /// `calculate` was called before any `set_input`
    NoPendingInput,
    /// Configuration options are missing or out of range
    InvalidConfiguration(String),
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::UnknownOperation(symbol) => {
                write!(f, "Unknown operation: {}", symbol)
            },
            CalculatorError::DivisionByZero => write!(f, "Cannot divide by zero."),
            CalculatorError::NegativeResultNotAllowed => {
                write!(f, "Negative results are not allowed.")
            },
            CalculatorError::Overflow => write!(f, "Result is out of range."),
            CalculatorError::NoPendingInput => {
                write!(f, "No first operand and operation have been set.")
            },
            CalculatorError::InvalidConfiguration(reason) => {
                write!(f, "Invalid configuration: {}", reason)
            },
        }
    }
}

impl std::error::Error for CalculatorError {}

impl From<NumericError> for CalculatorError {
    fn from(err: NumericError) -> Self {
        match err {
            NumericError::Overflow => CalculatorError::Overflow,
            other => CalculatorError::InvalidConfiguration(other.to_string()),
        }
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CalculatorError::UnknownOperation("%".to_string()).to_string(),
            "Unknown operation: %"
        );
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "Cannot divide by zero."
        );
        assert_eq!(
            CalculatorError::NegativeResultNotAllowed.to_string(),
            "Negative results are not allowed."
        );
    }

    #[test]
    fn test_from_numeric_error() {
        assert_eq!(
            CalculatorError::from(NumericError::Overflow),
            CalculatorError::Overflow
        );
        assert!(matches!(
            CalculatorError::from(NumericError::PrecisionOutOfRange),
            CalculatorError::InvalidConfiguration(_)
        ));
    }
}
