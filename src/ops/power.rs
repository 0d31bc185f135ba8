// ============================================================================
// Integer Power
// Repeated multiplication for integer-valued exponents
// ============================================================================

use crate::numeric::{CalcError, CalcResult};

/// Raise `base` to an integer-valued `exponent`.
///
/// - `exponent == 0` gives `1.0` for every base, including `0` and NaN.
/// - `exponent > 0` multiplies `base` by itself `exponent` times.
/// - `exponent < 0` computes the product for `|exponent|` and returns its
///   reciprocal. `pow(0.0, -n)` is therefore `+inf` (or `-inf` for `-0.0`
///   and odd `n`), not an error.
///
/// # Errors
/// Returns `NonIntegerExponent` if `exponent % 1.0 != 0.0`, which also
/// covers NaN and infinite exponents.
pub fn pow(base: f64, exponent: f64) -> CalcResult<f64> {
    if exponent % 1.0 != 0.0 {
        tracing::debug!(base, exponent, "rejected non-integer exponent");
        return Err(CalcError::NonIntegerExponent);
    }

    if exponent == 0.0 {
        return Ok(1.0);
    }

    let product = repeated_product(base, exponent.abs());
    if exponent > 0.0 {
        Ok(product)
    } else {
        Ok(1.0 / product)
    }
}

/// `base` multiplied by itself until `count` factors have been used.
///
/// `count` is integer-valued and at least 1. Once one more factor leaves the
/// magnitude of the running product unchanged (zero, infinity, a unit base,
/// or a subnormal that rounds back to itself), every later factor does too
/// and can only flip the sign. The loop then stops and applies the sign of
/// the remaining factors directly. The result is bit-identical to the full
/// loop.
fn repeated_product(base: f64, count: f64) -> f64 {
    let count_is_odd = count % 2.0 == 1.0;

    let mut product = base;
    let mut used: u64 = 1;
    while (used as f64) < count {
        let next = product * base;
        if product.is_nan() || next.abs() == product.abs() {
            let remaining_is_odd = count_is_odd != (used % 2 == 1);
            return if remaining_is_odd && base.is_sign_negative() {
                -product
            } else {
                product
            };
        }
        product = next;
        used += 1;
    }
    product
}

// ============================================================================
// Tests
// ============================================================================
