// ============================================================================
// Basic Usage Example
// ============================================================================

use comma_calc::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    comma_calc::logging::init_logging(tracing::Level::DEBUG);

    println!("=== Comma Calc Example ===\n");

    let calc = Calculator::new();

    // Text operands use ',' as the decimal separator
    println!("Text operands:");
    for (a, b) in [("5,5", "4,5"), ("10", "0,25"), ("-1,5", "3")] {
        for operation in Operation::ALL {
            match calc.apply(operation, a, b) {
                Ok(value) => println!("  {} {} {} = {}", a, operation, b, value),
                Err(err) => println!("  {} {} {} -> {} ({})", a, operation, b, err.code(), err),
            }
        }
    }

    // Integers and floats go through the same operations
    println!("\nNumeric operands:");
    println!("  pow(2, -3) = {:?}", calc.pow(2, -3));
    println!("  multiply(i32::MAX, 2) = {:?}", calc.multiply(i32::MAX, 2));
    println!("  sqrt(2.0) = {:?}", calc.sqrt(2.0));

    // Every failure is a typed error
    println!("\nErrors:");
    println!("  parse \"3.5\" -> {:?}", parse_numeric_string("3.5"));
    println!("  divide(\"10,0\", \"0,0\") -> {:?}", calc.divide("10,0", "0,0"));
    println!("  pow(2, 1.5) -> {:?}", calc.pow(2, 1.5));
    println!("  sqrt(-1) -> {:?}", calc.sqrt(-1));

    // Zero to a negative power follows IEEE division
    println!("\n  pow(0, -2) = {:?}", calc.pow(0, -2));

    // Square root with the original absolute tolerance
    println!("\n=== Square Root Criteria ===");
    let reference = match Calculator::with_config(CalculatorConfig::reference()) {
        Ok(calc) => calc,
        Err(reason) => {
            eprintln!("invalid configuration: {}", reason);
            return;
        },
    };
    for number in [25.0, 1e-20, 1e20] {
        println!(
            "  sqrt({:e}): relative = {:?}, absolute = {:?}",
            number,
            calc.sqrt(number),
            reference.sqrt(number)
        );
    }
}
