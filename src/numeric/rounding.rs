// ============================================================================
// Decimal Rounding
// Round-half-up in base-10 semantics, producing exact rust_decimal results
// ============================================================================

use rust_decimal::Decimal;

use super::{NumericError, NumericResult, Operand, MAX_PRECISION};

/// Round `value` to `precision` decimal places, ties away from zero.
///
/// The value is read as its shortest round-trip decimal representation (the
/// digits Rust prints for it), and rounding happens on those base-10 digits
/// with scaled-integer arithmetic. `2.345` is therefore an exact tie and
/// rounds to `2.35`, and `-2.345` rounds to `-2.35`.
///
/// The returned decimal carries `precision` as its scale when it fits, so
/// `7` rounded to two places displays as `7.00`. A result that rounds to
/// zero is returned as positive zero.
///
/// # Errors
/// - `PrecisionOutOfRange` if `precision` exceeds [`MAX_PRECISION`]
/// - `Overflow` if `value` is not finite or does not fit a `Decimal`
pub fn round_half_up(value: Operand, precision: u32) -> NumericResult<Decimal> {
    if precision > MAX_PRECISION {
        return Err(NumericError::PrecisionOutOfRange);
    }
    if !value.is_finite() {
        return Err(NumericError::Overflow);
    }

    let (digits, scale) = shortest_digits(value.abs())?;
    let target = precision as i32;

    // Magnitude as `units * 10^-working_scale`
    let (units, working_scale) = if scale <= target {
        // Already exact at `precision` places; trailing zeros are added on conversion
        let own = scale.max(0);
        let units = 10u128
            .checked_pow((own - scale) as u32)
            .and_then(|factor| digits.checked_mul(factor))
            .ok_or(NumericError::Overflow)?;
        (units, own as u32)
    } else {
        let units = match 10u128.checked_pow((scale - target) as u32) {
            Some(divisor) => {
                let quotient = digits / divisor;
                let remainder = digits % divisor;
                if remainder >= divisor - remainder {
                    quotient + 1
                } else {
                    quotient
                }
            },
            // divisor beyond u128: the 17 significant digits sit far below half a unit
            None => 0,
        };
        (units, precision)
    };

    to_decimal(units, value.is_sign_negative(), working_scale, precision)
}

/// Shortest round-trip digits of a finite non-negative value as
/// `(digits, scale)`, meaning `digits * 10^-scale`.
fn shortest_digits(value: f64) -> NumericResult<(u128, i32)> {
    let repr = format!("{:e}", value);
    let (mantissa, exponent) = repr.split_once('e').ok_or(NumericError::InvalidInput)?;
    let exponent: i32 = exponent.parse().map_err(|_| NumericError::InvalidInput)?;
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits: u128 = format!("{}{}", integer, fraction)
        .parse()
        .map_err(|_| NumericError::InvalidInput)?;

    Ok((digits, fraction.len() as i32 - exponent))
}

/// Build a decimal from `units * 10^-scale`, padding the scale with trailing
/// zeros up to `precision` as far as the 96-bit mantissa allows.
fn to_decimal(units: u128, negative: bool, scale: u32, precision: u32) -> NumericResult<Decimal> {
    let magnitude = i128::try_from(units).map_err(|_| NumericError::Overflow)?;
    let signed = if negative && units != 0 { -magnitude } else { magnitude };

    (scale..=precision)
        .rev()
        .find_map(|padded| {
            let factor = 10i128.checked_pow(padded - scale)?;
            Decimal::try_from_i128_with_scale(signed.checked_mul(factor)?, padded).ok()
        })
        .ok_or(NumericError::Overflow)
}
