// ============================================================================
// Operation Factory
// Selects configured operations by operator symbol
// ============================================================================

use crate::domain::{CalculatorConfig, CalculatorResult, OperatorKind};
use crate::engine::Operation;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an operation factory from configuration
///
/// # Arguments
/// * `config` - Calculator configuration shared by every operation
///
/// # Returns
/// * `CalculatorResult<OperationFactory>` - Factory or configuration error
///
/// # Example
/// ```
/// use decimal_calculator::prelude::*;
///
/// let config = CalculatorConfig::strict(2).unwrap();
/// let factory = create_from_config(config).unwrap();
/// let add = factory.create_operation("+").unwrap();
/// assert_eq!(add.kind(), OperatorKind::Add);
/// ```
pub fn create_from_config(config: CalculatorConfig) -> CalculatorResult<OperationFactory> {
    config.validate()?;
    Ok(OperationFactory::new(Arc::new(config)))
}

// ============================================================================
// Operation Factory
// ============================================================================

/// Maps operator symbols to cached, configured operations.
///
/// All four operations are built once at construction; selecting a symbol
/// hands out a shared reference to the cached instance.
#[derive(Debug, Clone)]
pub struct OperationFactory {
    config: Arc<CalculatorConfig>,
    // Indexed by `OperatorKind as usize`, in `OperatorKind::ALL` order
    operations: [Arc<Operation>; 4],
}

impl OperationFactory {
    /// Build the operation table for `config`
    pub fn new(config: Arc<CalculatorConfig>) -> Self {
        let operations =
            OperatorKind::ALL.map(|kind| Arc::new(Operation::new(kind, Arc::clone(&config))));

        tracing::debug!(
            precision = config.precision(),
            allow_negative_results = config.allow_negative_results(),
            "Operation factory created"
        );

        Self { config, operations }
    }

    /// Select the operation for an operator symbol
    ///
    /// # Errors
    /// Returns `UnknownOperation` if `symbol` is not exactly one of
    /// `+`, `-`, `*`, `/`.
    pub fn create_operation(&self, symbol: &str) -> CalculatorResult<Arc<Operation>> {
        let kind = OperatorKind::from_symbol(symbol)?;
        Ok(self.operation(kind))
    }

    /// The cached operation for a known operator
    pub fn operation(&self, kind: OperatorKind) -> Arc<Operation> {
        Arc::clone(&self.operations[kind as usize])
    }

    /// The configuration every operation shares
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CalculatorError;
    use crate::interfaces::BinaryOperation;
    use rust_decimal::Decimal;

    fn factory(precision: u32, allow_negative: bool) -> OperationFactory {
        create_from_config(CalculatorConfig::new(precision, allow_negative).unwrap()).unwrap()
    }

    #[test]
    fn test_create_every_operation() {
        let factory = factory(2, true);
        for kind in OperatorKind::ALL {
            let operation = factory.create_operation(kind.symbol()).unwrap();
            assert_eq!(operation.kind(), kind);
        }
    }

    #[test]
    fn test_unknown_operation() {
        let factory = factory(2, true);
        assert_eq!(
            factory.create_operation("%").unwrap_err(),
            CalculatorError::UnknownOperation("%".to_string())
        );
        assert!(factory.create_operation("exit").is_err());
        assert!(factory.create_operation("").is_err());
    }

    #[test]
    fn test_same_symbol_yields_cached_instance() {
        let factory = factory(2, true);
        let first = factory.create_operation("*").unwrap();
        let second = factory.create_operation("*").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_operation_table_matches_kind() {
        let factory = factory(1, true);
        for kind in OperatorKind::ALL {
            assert_eq!(factory.operation(kind).kind(), kind);
            assert!(Arc::ptr_eq(
                &factory.operation(kind),
                &factory.create_operation(kind.symbol()).unwrap()
            ));
        }
    }

    #[test]
    fn test_operations_share_config() {
        let factory = factory(3, false);
        for kind in OperatorKind::ALL {
            let operation = factory.operation(kind);
            assert_eq!(operation.config(), factory.config());
        }
    }

    #[test]
    fn test_selected_operation_evaluates() {
        let factory = factory(0, true);
        let subtract = factory.create_operation("-").unwrap();
        assert_eq!(
            subtract.execute(2.0, 5.0).unwrap(),
            Decimal::from(-3)
        );
    }
}
