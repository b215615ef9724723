// ============================================================================
// Engine Module
// Contains the operation selection and evaluation logic
// ============================================================================

mod context;
mod operation;

pub mod factory;

pub use context::EvaluationContext;
pub use factory::{create_from_config, OperationFactory};
pub use operation::Operation;
