// ============================================================================
// Numeric Errors
// Error types for operand parsing and decimal rounding
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or rounding decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value is outside the representable decimal range
    Overflow,
    /// Input string is not a number
    InvalidInput,
    /// Requested rounding precision exceeds the decimal scale limit
    PrecisionOutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value outside decimal range")
            },
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::PrecisionOutOfRange => write!(
                f,
                "precision out of range: at most {} decimal places are supported",
                super::MAX_PRECISION
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
