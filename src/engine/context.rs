// ============================================================================
// Evaluation Context
// Holds the pending first operand and operation until the second arrives
// ============================================================================

use crate::domain::{CalculatorError, CalculatorResult};
use crate::interfaces::{BinaryOperation, ResultObserver};
use crate::numeric::Operand;
use rust_decimal::Decimal;
use std::sync::Arc;

/// First operand and operation waiting for a second operand
struct PendingInput {
    operand: Operand,
    operation: Arc<dyn BinaryOperation>,
}

/// Two-step calculation driver.
///
/// `set_input` arms the context with a first operand and an operation;
/// `calculate` evaluates against a second operand. The context stays armed
/// after `calculate`, so calling it again without a new `set_input` reuses
/// the previous first operand. Use [`EvaluationContext::reset`] to disarm.
///
/// No internal locking: callers sharing a context across threads must
/// serialize `set_input`/`calculate` pairs themselves.
pub struct EvaluationContext {
    pending: Option<PendingInput>,
    observer: Arc<dyn ResultObserver>,
}

impl EvaluationContext {
    /// Create an empty context that publishes results to `observer`
    pub fn new(observer: Arc<dyn ResultObserver>) -> Self {
        Self {
            pending: None,
            observer,
        }
    }

    /// Arm the context, replacing any pending operand and operation
    pub fn set_input(&mut self, operand: Operand, operation: Arc<dyn BinaryOperation>) {
        tracing::debug!(
            operand,
            operation = operation.name(),
            replaced = self.pending.is_some(),
            "Evaluation context armed"
        );

        self.pending = Some(PendingInput { operand, operation });
    }

    /// Evaluate the pending operation against `operand`.
    ///
    /// On success the result is returned and published to the observer
    /// exactly once. Failures are returned only; the observer never sees
    /// them.
    ///
    /// # Errors
    /// - `NoPendingInput` if `set_input` has not been called
    /// - any error produced by the pending operation
    pub fn calculate(&mut self, operand: Operand) -> CalculatorResult<Decimal> {
        let pending = self.pending.as_ref().ok_or(CalculatorError::NoPendingInput)?;

        let result = pending.operation.execute(pending.operand, operand)?;
        self.observer.update_result(result);

        Ok(result)
    }

    /// Whether a first operand and operation are pending
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending first operand, if armed
    pub fn pending_operand(&self) -> Option<Operand> {
        self.pending.as_ref().map(|pending| pending.operand)
    }

    /// Return to the empty state
    pub fn reset(&mut self) {
        self.pending = None;
    }
}
