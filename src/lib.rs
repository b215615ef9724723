// ============================================================================
// Decimal Calculator Library
// Binary arithmetic with configurable half-up rounding and sign policy
// ============================================================================

//! # Decimal Calculator
//!
//! A small calculator core: two operands, one of four operators, and a
//! configuration that controls rounding precision and whether negative
//! results are allowed.
//!
//! ## Features
//!
//! - **Closed operator set** (`+`, `-`, `*`, `/`) selected by symbol
//! - **Round-half-up in base 10**: results are exact `rust_decimal` values
//! - **Sign policy** enforced on the unrounded result
//! - **Observer notification** of successful results only
//! - **Interactive console session** with input validation and re-prompting
//!
//! ## Example
//!
//! ```rust
//! use decimal_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let config = CalculatorConfig::strict(2).unwrap();
//! let factory = create_from_config(config).unwrap();
//!
//! let observer = Arc::new(RecordingObserver::new());
//! let mut context = EvaluationContext::new(observer.clone());
//!
//! context.set_input(3.001, factory.create_operation("+").unwrap());
//! let result = context.calculate(4.004).unwrap();
//!
//! assert_eq!(result.to_string(), "7.00");
//! assert_eq!(observer.last(), Some(result));
//! ```

pub mod console;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculatorConfig, CalculatorConfigBuilder, CalculatorError, CalculatorResult, OperatorKind,
    };
    pub use crate::engine::{create_from_config, EvaluationContext, Operation, OperationFactory};
    pub use crate::interfaces::{
        BinaryOperation, LoggingObserver, NoOpObserver, RecordingObserver, ResultObserver,
    };
    pub use crate::numeric::{parse_operand, round_half_up, NumericError, Operand};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Arc;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_end_to_end_calculation() {
        let config = CalculatorConfig::builder()
            .result_precision(2)
            .allow_negative_results(false)
            .build()
            .unwrap();
        let factory = create_from_config(config).unwrap();
        let observer = Arc::new(RecordingObserver::new());
        let mut context = EvaluationContext::new(observer.clone());

        // Typed input goes through the same parser the console uses
        let first = parse_operand("3,001").unwrap();
        let second = parse_operand("4.004").unwrap();

        context.set_input(first, factory.create_operation("+").unwrap());
        assert_eq!(context.calculate(second).unwrap(), dec("7.00"));

        context.set_input(10.0, factory.create_operation("/").unwrap());
        assert_eq!(
            context.calculate(0.0),
            Err(CalculatorError::DivisionByZero)
        );

        context.set_input(2.0, factory.create_operation("-").unwrap());
        assert_eq!(
            context.calculate(5.0),
            Err(CalculatorError::NegativeResultNotAllowed)
        );

        assert_eq!(observer.results(), vec![dec("7.00")]);
    }

    #[test]
    fn test_unknown_operation_never_reaches_context() {
        let factory = create_from_config(CalculatorConfig::permissive(2).unwrap()).unwrap();
        assert_eq!(
            factory.create_operation("%").unwrap_err(),
            CalculatorError::UnknownOperation("%".to_string())
        );
    }

    #[test]
    fn test_permissive_negative_result() {
        let factory = create_from_config(CalculatorConfig::permissive(0).unwrap()).unwrap();
        let mut context = EvaluationContext::new(Arc::new(NoOpObserver));

        context.set_input(2.0, factory.create_operation("-").unwrap());
        assert_eq!(context.calculate(5.0).unwrap(), dec("-3"));
    }

    #[test]
    fn test_rearming_uses_latest_operation() {
        let factory = create_from_config(CalculatorConfig::permissive(2).unwrap()).unwrap();
        let mut context = EvaluationContext::new(Arc::new(LoggingObserver));

        context.set_input(5.0, factory.create_operation("+").unwrap());
        context.set_input(10.0, factory.create_operation("*").unwrap());

        assert_eq!(context.calculate(2.0).unwrap(), dec("20"));
    }

    #[test]
    fn test_half_up_in_both_directions() {
        let factory = create_from_config(CalculatorConfig::permissive(2).unwrap()).unwrap();
        let multiply = factory.create_operation("*").unwrap();

        assert_eq!(multiply.execute(2.345, 1.0).unwrap(), dec("2.35"));
        assert_eq!(multiply.execute(-2.345, 1.0).unwrap(), dec("-2.35"));

        let factory = create_from_config(CalculatorConfig::strict(2).unwrap()).unwrap();
        let multiply = factory.create_operation("*").unwrap();
        assert_eq!(
            multiply.execute(-2.345, 1.0),
            Err(CalculatorError::NegativeResultNotAllowed)
        );
    }
}
