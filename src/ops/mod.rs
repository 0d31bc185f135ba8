// ============================================================================
// Operations Module
// The f64 core every calculator entry point delegates to
// ============================================================================

mod arithmetic;
mod power;
mod root;

pub use arithmetic::{add, divide, multiply, subtract};
pub use power::pow;
pub use root::{sqrt, sqrt_with};
