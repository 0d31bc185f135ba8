// ============================================================================
// Numeric Module
// Operand conversion and comma-decimal parsing
// ============================================================================
//
// This module provides:
// - CalcError: The error kinds every operation can signal
// - parse_numeric_string: Comma-decimal text validation
// - Operand: Adapter trait from integer, float and text inputs to f64
// - NumericInput: Runtime-typed operand
//
// Design principles:
// - All conversions return Result (no panics)
// - Text is validated once, at the boundary
// - Only ',' separates integer and fractional digits

mod errors;
mod operand;
mod parse;

pub use errors::{CalcError, CalcResult};
pub use operand::{NumericInput, Operand};
pub use parse::{parse_numeric_string, DECIMAL_SEPARATOR};
