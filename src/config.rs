// ============================================================================
// Calculator Configuration
// Tuning for the iterative square-root routine
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default convergence tolerance for the square-root iteration.
pub const DEFAULT_SQRT_EPSILON: f64 = 1e-15;

/// Default upper bound on square-root iterations.
///
/// Starting from `x0 = number`, each step at most halves the approximation
/// until it is near the root, so the whole `f64` range (about 2^±1074)
/// converges in well under this many steps.
pub const DEFAULT_SQRT_MAX_ITERATIONS: u32 = 1100;

// ============================================================================
// Convergence Criterion
// ============================================================================

/// When to stop refining a square-root approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Convergence {
    /// Stop once `|next - current| < epsilon`
    /// - Same tolerance at every magnitude
    /// - Loose for tiny inputs, unreachable below one ulp for large ones
    Absolute(f64),

    /// Stop once `|next - current| <= epsilon * |next|`
    /// - Scales with the root being approximated
    Relative(f64),
}

impl Convergence {
    /// The tolerance carried by either criterion.
    pub fn epsilon(self) -> f64 {
        match self {
            Convergence::Absolute(eps) | Convergence::Relative(eps) => eps,
        }
    }

    /// Has the iteration converged after a step of `delta` that produced `next`?
    #[inline]
    pub fn is_converged(self, delta: f64, next: f64) -> bool {
        match self {
            Convergence::Absolute(eps) => delta.abs() < eps,
            Convergence::Relative(eps) => delta.abs() <= eps * next.abs(),
        }
    }
}

impl Default for Convergence {
    fn default() -> Self {
        Convergence::Relative(DEFAULT_SQRT_EPSILON)
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for a [`Calculator`](crate::calculator::Calculator).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Termination criterion for the Newton-Raphson square root
    pub sqrt_convergence: Convergence,

    /// Hard bound on Newton-Raphson steps; the last approximation is
    /// returned when it is reached
    pub sqrt_max_iterations: u32,
}

impl CalculatorConfig {
    /// Create the default configuration (relative tolerance)
    pub fn new() -> Self {
        Self {
            sqrt_convergence: Convergence::default(),
            sqrt_max_iterations: DEFAULT_SQRT_MAX_ITERATIONS,
        }
    }

    /// Absolute `1e-15` tolerance, as the original calculator used.
    pub fn reference() -> Self {
        Self::new().with_sqrt_convergence(Convergence::Absolute(DEFAULT_SQRT_EPSILON))
    }

    /// Builder method: Set the square-root convergence criterion
    pub fn with_sqrt_convergence(mut self, convergence: Convergence) -> Self {
        self.sqrt_convergence = convergence;
        self
    }

    /// Builder method: Set the square-root iteration bound
    pub fn with_sqrt_max_iterations(mut self, max_iterations: u32) -> Self {
        self.sqrt_max_iterations = max_iterations;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let eps = self.sqrt_convergence.epsilon();
        if !eps.is_finite() || eps <= 0.0 {
            return Err("Square-root tolerance must be positive and finite".to_string());
        }

        if self.sqrt_max_iterations == 0 {
            return Err("Square-root iteration bound must be at least 1".to_string());
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
