// ============================================================================
// Operator Kind
// The closed set of binary operators the calculator understands
// ============================================================================

use crate::domain::{CalculatorError, CalculatorResult};
use crate::numeric::Operand;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperatorKind {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
}

impl OperatorKind {
    /// All operators, in prompt order
    pub const ALL: [OperatorKind; 4] = [
        OperatorKind::Add,
        OperatorKind::Subtract,
        OperatorKind::Multiply,
        OperatorKind::Divide,
    ];

    /// Look up an operator by its exact symbol
    ///
    /// # Errors
    /// Returns `UnknownOperation` for anything other than `+ - * /`.
    pub fn from_symbol(symbol: &str) -> CalculatorResult<Self> {
        match symbol {
            "+" => Ok(OperatorKind::Add),
            "-" => Ok(OperatorKind::Subtract),
            "*" => Ok(OperatorKind::Multiply),
            "/" => Ok(OperatorKind::Divide),
            other => Err(CalculatorError::UnknownOperation(other.to_string())),
        }
    }

    /// The operator's symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Add => "+",
            OperatorKind::Subtract => "-",
            OperatorKind::Multiply => "*",
            OperatorKind::Divide => "/",
        }
    }

    /// Human readable name for logging
    pub const fn name(self) -> &'static str {
        match self {
            OperatorKind::Add => "add",
            OperatorKind::Subtract => "subtract",
            OperatorKind::Multiply => "multiply",
            OperatorKind::Divide => "divide",
        }
    }

    /// Apply the operator without any rounding or sign policy.
    ///
    /// # Errors
    /// - `DivisionByZero` if dividing by zero (checked before the quotient)
    /// - `Overflow` if the result is not finite
    pub fn apply(self, a: Operand, b: Operand) -> CalculatorResult<Operand> {
        let raw = match self {
            OperatorKind::Add => a + b,
            OperatorKind::Subtract => a - b,
            OperatorKind::Multiply => a * b,
            OperatorKind::Divide => {
                if b == 0.0 {
                    return Err(CalculatorError::DivisionByZero);
                }
                a / b
            },
        };

        if raw.is_finite() {
            Ok(raw)
        } else {
            Err(CalculatorError::Overflow)
        }
    }
}

impl FromStr for OperatorKind {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
