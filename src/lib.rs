// ============================================================================
// Comma Calc Library
// Stateless arithmetic over integers, floats and comma-decimal text
// ============================================================================

//! # Comma Calc
//!
//! A small, stateless calculation helper: addition, subtraction,
//! multiplication, division, integer-exponent power and square root over
//! integers, floating-point values and numbers written as text with `,` as
//! the decimal separator.
//!
//! ## Features
//!
//! - **One f64 core** in [`ops`], with every input form adapted through the
//!   [`Operand`](numeric::Operand) trait
//! - **Comma-decimal parsing** that rejects `.`-separated text
//! - **Explicit errors**: every failure is a [`CalcError`](numeric::CalcError)
//! - **Newton-Raphson square root** with a configurable stopping rule
//!
//! ## Example
//!
//! ```rust
//! use comma_calc::prelude::*;
//!
//! assert_eq!(comma_calc::add("5,5", "4,5"), Ok(10.0));
//! assert_eq!(comma_calc::pow("2,0", "3,0"), Ok(8.0));
//! assert_eq!(
//!     comma_calc::divide("10,0", "0,0"),
//!     Err(CalcError::DivisionByZero)
//! );
//!
//! // A calculator using the original absolute square-root tolerance
//! let calc = Calculator::with_config(CalculatorConfig::reference()).unwrap();
//! let root = calc.sqrt(25).unwrap();
//! assert!((root - 5.0).abs() < 1e-10);
//! ```

pub mod calculator;
pub mod config;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod ops;

pub use calculator::{add, divide, multiply, pow, sqrt, subtract};
pub use numeric::parse_numeric_string;

// Re-exports for convenience
pub mod prelude {
    pub use crate::calculator::{Calculator, Operation};
    pub use crate::config::{CalculatorConfig, Convergence};
    pub use crate::numeric::{
        parse_numeric_string, CalcError, CalcResult, NumericInput, Operand,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_text_arithmetic() {
        assert_eq!(crate::add("5,5", "4,5"), Ok(10.0));
        assert_eq!(
            crate::divide("10,0", "0,0"),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(crate::pow("2,0", "3,0"), Ok(8.0));
    }

    #[test]
    fn test_every_form_agrees() {
        let calc = Calculator::new();
        for operation in Operation::ALL {
            let from_ints = calc.apply(operation, 6, 3).unwrap();
            let from_floats = calc.apply(operation, 6.0, 3.0).unwrap();
            let from_text = calc.apply(operation, "6", "3,0").unwrap();
            assert_eq!(from_ints, from_floats, "{operation}");
            assert_eq!(from_floats, from_text, "{operation}");
        }

        let root_int = calc.sqrt(25).unwrap();
        let root_text = calc.sqrt("25,0").unwrap();
        assert_eq!(root_int, root_text);
        assert!((root_int - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_error_taxonomy() {
        assert_eq!(
            parse_numeric_string("3.5"),
            Err(CalcError::InvalidFormat)
        );
        assert_eq!(crate::divide(1, 0), Err(CalcError::DivisionByZero));
        assert_eq!(crate::divide(1.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(crate::pow(2.0, 1.5), Err(CalcError::NonIntegerExponent));
        assert_eq!(crate::sqrt(-1), Err(CalcError::NegativeInput));
    }

    #[test]
    fn test_zero_rules() {
        assert_eq!(crate::pow(0, 0), Ok(1.0));
        assert_eq!(crate::pow(0.0, -2), Ok(f64::INFINITY));
        assert_eq!(crate::sqrt(0), Ok(0.0));
        assert!((crate::sqrt(2.0).unwrap() - 1.41421356237).abs() < 1e-10);
    }

    #[test]
    fn test_errors_propagate_with_question_mark() {
        fn hypotenuse(a: &str, b: &str) -> CalcResult<f64> {
            let sum = crate::add(crate::pow(a, 2)?, crate::pow(b, 2)?)?;
            crate::sqrt(sum)
        }

        assert!((hypotenuse("3", "4").unwrap() - 5.0).abs() < 1e-10);
        assert_eq!(hypotenuse("3", "4.0"), Err(CalcError::InvalidFormat));
    }
}
