// ============================================================================
// Configured Operation
// An operator bound to the shared rounding and sign policy
// ============================================================================

use crate::domain::{CalculatorConfig, CalculatorError, CalculatorResult, OperatorKind};
use crate::interfaces::BinaryOperation;
use crate::numeric::{round_half_up, Operand};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Binary operation evaluated under a [`CalculatorConfig`]
#[derive(Debug, Clone)]
pub struct Operation {
    kind: OperatorKind,
    config: Arc<CalculatorConfig>,
}

impl Operation {
    /// Create an operation for `kind` that follows `config`
    pub fn new(kind: OperatorKind, config: Arc<CalculatorConfig>) -> Self {
        Self { kind, config }
    }

    /// The configuration this operation evaluates under
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl BinaryOperation for Operation {
    /// Evaluation order:
    /// 1. raw result (division checks for a zero divisor first)
    /// 2. sign policy, on the unrounded value
    /// 3. round-half-up to the configured precision
    fn execute(&self, a: Operand, b: Operand) -> CalculatorResult<Decimal> {
        let raw = self.kind.apply(a, b)?;

        if !self.config.allow_negative_results() && raw < 0.0 {
            tracing::trace!(operation = self.kind.name(), a, b, raw, "Negative result rejected");
            return Err(CalculatorError::NegativeResultNotAllowed);
        }

        let result = round_half_up(raw, self.config.precision())?;

        tracing::trace!(
            operation = self.kind.name(),
            a,
            b,
            %result,
            "Operation evaluated"
        );

        Ok(result)
    }

    fn kind(&self) -> OperatorKind {
        self.kind
    }
}
