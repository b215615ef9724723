// ============================================================================
// Operand Parsing
// Converts user-typed tokens into finite operands
// ============================================================================

use super::{NumericError, NumericResult, Operand};

/// Parse an operand token.
///
/// Accepts `.` or `,` as the decimal separator (`"2,5"` parses as `2.5`),
/// an optional sign and scientific notation (`"1e3"`). Surrounding
/// whitespace is ignored.
///
/// # Errors
/// Returns `InvalidInput` for anything that is not a finite number,
/// including `NaN` and `inf`.
pub fn parse_operand(token: &str) -> NumericResult<Operand> {
    let token = token.trim();

    let value = match token.parse::<Operand>() {
        Ok(value) => value,
        Err(_) if token.contains(',') => token
            .replace(',', ".")
            .parse::<Operand>()
            .map_err(|_| NumericError::InvalidInput)?,
        Err(_) => return Err(NumericError::InvalidInput),
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(NumericError::InvalidInput)
    }
}
