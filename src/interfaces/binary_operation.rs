// ============================================================================
// Binary Operation Interface
// Defines the contract for a configured two-operand calculation
// ============================================================================

use crate::domain::{CalculatorResult, OperatorKind};
use crate::numeric::Operand;
use rust_decimal::Decimal;

/// Strategy interface for binary numeric operations
/// Implementations apply the operator plus the configured numeric policy
pub trait BinaryOperation: Send + Sync {
    /// Evaluate the operation on two operands
    ///
    /// # Arguments
    /// * `a` - The first (left) operand
    /// * `b` - The second (right) operand
    ///
    /// # Returns
    /// The rounded result, or the policy violation that rejected it
    fn execute(&self, a: Operand, b: Operand) -> CalculatorResult<Decimal>;

    /// The operator this operation evaluates
    fn kind(&self) -> OperatorKind;

    /// Get the operation name for logging
    fn name(&self) -> &str {
        self.kind().name()
    }
}
