// ============================================================================
// Square Root
// Newton-Raphson iteration with a configurable stopping rule
// ============================================================================

use crate::config::CalculatorConfig;
use crate::numeric::{CalcError, CalcResult};

/// Square root of `number` using the default [`CalculatorConfig`].
///
/// # Errors
/// Returns `NegativeInput` if `number < 0`.
#[inline]
pub fn sqrt(number: f64) -> CalcResult<f64> {
    sqrt_with(number, &CalculatorConfig::default())
}

/// Square root of `number` by Newton-Raphson iteration.
///
/// Starts from `x0 = number` and repeats `x = 0.5 * (x + number / x)` until
/// `config.sqrt_convergence` accepts the last step, or
/// `config.sqrt_max_iterations` steps have run. Zero returns `0.0`
/// unchanged; `+inf` and NaN are returned as-is.
///
/// `config` must pass [`CalculatorConfig::validate`]; debug builds assert it.
/// [`Calculator::with_config`](crate::calculator::Calculator::with_config)
/// validates once up front.
///
/// # Errors
/// Returns `NegativeInput` if `number < 0`. `-0.0` is not negative.
pub fn sqrt_with(number: f64, config: &CalculatorConfig) -> CalcResult<f64> {
    debug_assert!(
        config.validate().is_ok(),
        "sqrt_with called with an invalid configuration"
    );

    if number < 0.0 {
        tracing::debug!(number, "rejected square root of negative input");
        return Err(CalcError::NegativeInput);
    }

    if number == 0.0 || !number.is_finite() {
        return Ok(number);
    }

    let mut current = number;
    for _ in 0..config.sqrt_max_iterations {
        let next = 0.5 * (current + number / current);
        let delta = next - current;
        current = next;

        if config.sqrt_convergence.is_converged(delta, next) {
            return Ok(current);
        }
    }

    tracing::warn!(
        number,
        approximation = current,
        max_iterations = config.sqrt_max_iterations,
        "square root did not converge within the iteration bound"
    );
    Ok(current)
}

// ============================================================================
// Tests
// ============================================================================
