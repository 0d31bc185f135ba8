// ============================================================================
// Calculation Errors
// Error kinds signaled by parsing and arithmetic operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while parsing operands or computing a result.
///
/// Only the kind is part of the contract; the `Display` text is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Text could not be parsed as a comma-decimal number
    InvalidFormat,
    /// Divisor is zero
    DivisionByZero,
    /// Exponent has a non-zero fractional part
    NonIntegerExponent,
    /// Square-root operand is negative
    NegativeInput,
}

impl CalcError {
    /// Stable identifier for callers that translate errors programmatically.
    pub const fn code(self) -> &'static str {
        match self {
            CalcError::InvalidFormat => "INVALID_FORMAT",
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::NonIntegerExponent => "NON_INTEGER_EXPONENT",
            CalcError::NegativeInput => "NEGATIVE_INPUT",
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidFormat => write!(
                f,
                "invalid format: expected a number with ',' as the decimal separator"
            ),
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::NonIntegerExponent => {
                write!(f, "exponent must be an integer value")
            },
            CalcError::NegativeInput => {
                write!(f, "negative input: square root is undefined")
            },
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
