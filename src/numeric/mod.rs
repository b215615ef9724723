// ============================================================================
// Numeric Module
// Operand parsing and exact decimal rounding of results
// ============================================================================
//
// This module provides:
// - Operand: the input type every operation works on
// - round_half_up: base-10 rounding of a result, ties away from zero,
//   yielding an exact rust_decimal::Decimal
// - parse_operand: token parsing with '.' or ',' decimal separators
// - NumericError: error types for parsing and rounding
//
// Design principles:
// - No floating-point rounding: results are rounded on their decimal digits
// - All fallible paths return Result (no panics)

mod errors;
mod parse;
mod rounding;

pub use errors::{NumericError, NumericResult};
pub use parse::parse_operand;
pub use rounding::round_half_up;

/// Operand type for all calculator operations
pub type Operand = f64;

/// Largest number of decimal places a result can be rounded to
pub const MAX_PRECISION: u32 = 28;
