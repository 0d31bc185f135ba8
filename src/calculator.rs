// ============================================================================
// Calculator
// Operand-generic entry points over the f64 core
// ============================================================================

use crate::config::CalculatorConfig;
use crate::numeric::{CalcResult, Operand};
use crate::ops;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Operation
// ============================================================================

/// Binary operations a [`Calculator`] can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Integer-exponent power
    Pow,
}

impl Operation {
    /// Every binary operation, in declaration order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Pow,
    ];

    /// Conventional infix symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Pow => "^",
        }
    }

    /// Lowercase name, matching the calculator method.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Pow => "pow",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// Stateless calculator over any [`Operand`].
///
/// Text operands are validated left to right before any arithmetic check,
/// so `divide("x", "0")` reports `InvalidFormat`, not `DivisionByZero`.
///
/// # Example
/// ```
/// use comma_calc::prelude::*;
///
/// let calc = Calculator::new();
/// assert_eq!(calc.add("5,5", "4,5"), Ok(10.0));
/// assert_eq!(calc.pow(2, -3), Ok(0.125));
/// assert_eq!(calc.divide(1.0, 0), Err(CalcError::DivisionByZero));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Calculator with the default configuration
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    /// Calculator with a validated custom configuration
    pub fn with_config(config: CalculatorConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// `a + b`
    pub fn add<A: Operand, B: Operand>(&self, a: A, b: B) -> CalcResult<f64> {
        let (a, b) = operands(&a, &b)?;
        Ok(ops::add(a, b))
    }

    /// `a - b`
    pub fn subtract<A: Operand, B: Operand>(&self, a: A, b: B) -> CalcResult<f64> {
        let (a, b) = operands(&a, &b)?;
        Ok(ops::subtract(a, b))
    }

    /// `a * b`
    pub fn multiply<A: Operand, B: Operand>(&self, a: A, b: B) -> CalcResult<f64> {
        let (a, b) = operands(&a, &b)?;
        Ok(ops::multiply(a, b))
    }

    /// `a / b`, failing with `DivisionByZero` on a zero divisor
    pub fn divide<A: Operand, B: Operand>(&self, a: A, b: B) -> CalcResult<f64> {
        let (a, b) = operands(&a, &b)?;
        ops::divide(a, b)
    }

    /// `base ^ exponent` for integer-valued exponents
    pub fn pow<A: Operand, B: Operand>(&self, base: A, exponent: B) -> CalcResult<f64> {
        let (base, exponent) = operands(&base, &exponent)?;
        ops::pow(base, exponent)
    }

    /// Square root via Newton-Raphson, tuned by the configuration
    pub fn sqrt<N: Operand>(&self, number: N) -> CalcResult<f64> {
        ops::sqrt_with(number.to_number()?, &self.config)
    }

    /// Dispatch a binary operation chosen at runtime.
    pub fn apply<A: Operand, B: Operand>(&self, operation: Operation, a: A, b: B) -> CalcResult<f64> {
        match operation {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
            Operation::Pow => self.pow(a, b),
        }
    }
}

/// Convert both operands, left first.
#[inline]
fn operands<A: Operand, B: Operand>(a: &A, b: &B) -> CalcResult<(f64, f64)> {
    Ok((a.to_number()?, b.to_number()?))
}

// ============================================================================
// Free Functions
// ============================================================================

/// `a + b` with the default calculator.
pub fn add<A: Operand, B: Operand>(a: A, b: B) -> CalcResult<f64> {
    Calculator::new().add(a, b)
}

/// `a - b` with the default calculator.
pub fn subtract<A: Operand, B: Operand>(a: A, b: B) -> CalcResult<f64> {
    Calculator::new().subtract(a, b)
}

/// `a * b` with the default calculator.
pub fn multiply<A: Operand, B: Operand>(a: A, b: B) -> CalcResult<f64> {
    Calculator::new().multiply(a, b)
}

/// `a / b` with the default calculator.
pub fn divide<A: Operand, B: Operand>(a: A, b: B) -> CalcResult<f64> {
    Calculator::new().divide(a, b)
}

/// `base ^ exponent` with the default calculator.
pub fn pow<A: Operand, B: Operand>(base: A, exponent: B) -> CalcResult<f64> {
    Calculator::new().pow(base, exponent)
}

/// Square root with the default calculator.
pub fn sqrt<N: Operand>(number: N) -> CalcResult<f64> {
    Calculator::new().sqrt(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Convergence;
    use crate::numeric::{CalcError, NumericInput};

    #[test]
    fn test_integer_operands() {
        let calc = Calculator::new();
        assert_eq!(calc.add(2, 3), Ok(5.0));
        assert_eq!(calc.subtract(2, 3), Ok(-1.0));
        assert_eq!(calc.multiply(4, 5), Ok(20.0));
        assert_eq!(calc.divide(7, 2), Ok(3.5));
        assert_eq!(calc.pow(2, 10), Ok(1024.0));
        assert!((calc.sqrt(49).unwrap() - 7.0).abs() < 1e-10);
    }

    #[test]
    fn test_integer_multiply_does_not_wrap() {
        let calc = Calculator::new();
        assert_eq!(calc.multiply(i32::MAX, 2), Ok(4_294_967_294.0));
        assert_eq!(calc.add(i32::MAX, 1), Ok(2_147_483_648.0));
    }

    #[test]
    fn test_text_operands() {
        let calc = Calculator::new();
        assert_eq!(calc.add("5,5", "4,5"), Ok(10.0));
        assert_eq!(calc.subtract("10", "0,5"), Ok(9.5));
        assert_eq!(calc.multiply("1,5", "-2"), Ok(-3.0));
        assert_eq!(calc.divide("9", "4"), Ok(2.25));
        assert_eq!(calc.pow("2,0", "3,0"), Ok(8.0));
        assert!((calc.sqrt("6,25").unwrap() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_text_validated_before_arithmetic() {
        let calc = Calculator::new();
        assert_eq!(calc.divide("abc", "0"), Err(CalcError::InvalidFormat));
        assert_eq!(calc.divide("1", "0.0"), Err(CalcError::InvalidFormat));
        assert_eq!(calc.divide("10,0", "0,0"), Err(CalcError::DivisionByZero));
        assert_eq!(calc.pow("2.0", "1,5"), Err(CalcError::InvalidFormat));
        assert_eq!(calc.pow("2,0", "1,5"), Err(CalcError::NonIntegerExponent));
        assert_eq!(calc.sqrt("-4"), Err(CalcError::NegativeInput));
        assert_eq!(calc.sqrt("-4.0"), Err(CalcError::InvalidFormat));
    }

    #[test]
    fn test_text_pow_with_huge_exponent() {
        let calc = Calculator::new();
        assert_eq!(calc.pow("0,9", "1e18"), Ok(f64::from_bits(5)));
        assert_eq!(calc.pow("-0,75", "1000000000000001"), Ok(-f64::from_bits(2)));
    }

    #[test]
    fn test_mixed_operands() {
        let calc = Calculator::new();
        assert_eq!(calc.add(1, "0,5"), Ok(1.5));
        assert_eq!(calc.multiply(2.5, 4u8), Ok(10.0));
        assert_eq!(
            calc.add(NumericInput::from("1,25"), NumericInput::Integer(2)),
            Ok(3.25)
        );
    }

    #[test]
    fn test_apply_dispatch() {
        let calc = Calculator::new();
        let expected = [5.0, 1.0, 6.0, 1.5, 9.0];
        for (operation, want) in Operation::ALL.iter().zip(expected) {
            assert_eq!(calc.apply(*operation, 3, 2), Ok(want), "{}", operation.name());
        }
        assert_eq!(
            calc.apply(Operation::Divide, 1, 0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Pow.to_string(), "^");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.name(), "multiply");
    }

    #[test]
    fn test_with_config() {
        let config = CalculatorConfig::reference();
        let calc = Calculator::with_config(config).unwrap();
        assert_eq!(calc.config(), &config);
        assert!((calc.sqrt(2).unwrap() - 1.41421356237).abs() < 1e-10);

        let invalid = CalculatorConfig::new().with_sqrt_convergence(Convergence::Relative(-1.0));
        assert!(Calculator::with_config(invalid).is_err());
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(add(1, 2), Ok(3.0));
        assert_eq!(subtract(1.5, 0.5), Ok(1.0));
        assert_eq!(multiply("2", "3"), Ok(6.0));
        assert_eq!(divide(1, 4), Ok(0.25));
        assert_eq!(pow(3, 2), Ok(9.0));
        assert_eq!(sqrt(0), Ok(0.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_operation_serialization() {
        let json = serde_json::to_string(&Operation::Divide).unwrap();
        assert_eq!(json, "\"Divide\"");
    }
}
