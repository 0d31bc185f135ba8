// ============================================================================
// Arithmetic
// Addition, subtraction, multiplication and checked division over f64
// ============================================================================

use crate::numeric::{CalcError, CalcResult};

/// Sum of `a` and `b`.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Difference `a - b`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of `a` and `b`.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Quotient `a / b`.
///
/// # Errors
/// Returns `DivisionByZero` if `b` is `0.0` or `-0.0`. A NaN divisor is not
/// zero and propagates into the result.
#[inline]
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        tracing::debug!(dividend = a, "rejected division by zero");
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
