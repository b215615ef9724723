// ============================================================================
// Domain Models Module
// Contains the calculator's value objects and error types
// ============================================================================

pub mod config;
pub mod error;
pub mod operator;

pub use config::{CalculatorConfig, CalculatorConfigBuilder};
pub use error::{CalculatorError, CalculatorResult};
pub use operator::OperatorKind;
