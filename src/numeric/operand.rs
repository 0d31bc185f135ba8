// ============================================================================
// Operands
// Adapters from integer, float and text inputs to f64
// ============================================================================

use super::errors::CalcResult;
use super::parse::parse_numeric_string;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that can be used as an operand of a calculator operation.
///
/// Integers convert to `f64` (exactly up to 2^53), floats pass through and
/// text goes through [`parse_numeric_string`].
pub trait Operand {
    /// Convert to the `f64` the operations compute with.
    ///
    /// # Errors
    /// Returns `InvalidFormat` for text that is not a comma-decimal number.
    fn to_number(&self) -> CalcResult<f64>;
}

macro_rules! impl_operand_lossless {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                #[inline]
                fn to_number(&self) -> CalcResult<f64> {
                    Ok(f64::from(*self))
                }
            }
        )*
    };
}

// Wider than the f64 mantissa: rounds to nearest above 2^53
macro_rules! impl_operand_wide {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                #[inline]
                fn to_number(&self) -> CalcResult<f64> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_operand_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);
impl_operand_wide!(i64, u64, isize, usize);

impl Operand for str {
    #[inline]
    fn to_number(&self) -> CalcResult<f64> {
        parse_numeric_string(self)
    }
}

impl Operand for String {
    #[inline]
    fn to_number(&self) -> CalcResult<f64> {
        parse_numeric_string(self)
    }
}

impl<T: Operand + ?Sized> Operand for &T {
    #[inline]
    fn to_number(&self) -> CalcResult<f64> {
        (**self).to_number()
    }
}

// ============================================================================
// Numeric Input
// ============================================================================

/// An operand whose form is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NumericInput {
    /// Machine integer
    Integer(i64),
    /// Double-precision value
    Float(f64),
    /// Comma-decimal text, validated when converted
    Text(String),
}

impl Operand for NumericInput {
    fn to_number(&self) -> CalcResult<f64> {
        match self {
            NumericInput::Integer(value) => value.to_number(),
            NumericInput::Float(value) => Ok(*value),
            NumericInput::Text(text) => parse_numeric_string(text),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(value: $t) -> Self {
                    NumericInput::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for NumericInput {
    fn from(value: isize) -> Self {
        NumericInput::Integer(value as i64)
    }
}

// Values above i64::MAX are kept as the nearest f64
macro_rules! impl_from_unsigned_wide {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                fn from(value: $t) -> Self {
                    match i64::try_from(value) {
                        Ok(value) => NumericInput::Integer(value),
                        Err(_) => NumericInput::Float(value as f64),
                    }
                }
            }
        )*
    };
}

impl_from_unsigned_wide!(u64, usize);

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        NumericInput::Float(f64::from(value))
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}
