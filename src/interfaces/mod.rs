// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod binary_operation;
mod result_observer;

pub use binary_operation::BinaryOperation;
pub use result_observer::{LoggingObserver, NoOpObserver, RecordingObserver, ResultObserver};
