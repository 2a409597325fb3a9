// ============================================================================
// Basic Usage Example
// ============================================================================

use int_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Integer Calculator Example ===\n");

    // Direct evaluation
    println!("Direct evaluation:");
    for operation in Operation::ALL {
        let outcome = evaluate(operation, Operand::new(20), Operand::new(4));
        match outcome {
            Ok(value) => println!("  20 {} 4 = {}", operation, value),
            Err(err) => println!("  20 {} 4 failed: {}", operation, err),
        }
    }

    // Typed failures
    println!("\nFailures:");
    let div_err = evaluate(Operation::Divide, Operand::new(10), Operand::ZERO).unwrap_err();
    println!("  {:?}: {}", div_err.kind(), div_err);

    let parse_err = "abc".parse::<Operand>().unwrap_err();
    println!("  {:?}: {}", parse_err.kind(), parse_err);

    // Overflow wraps like the platform's native Int
    let wrapped = evaluate(Operation::Add, Operand::MAX, Operand::ONE).unwrap();
    println!("\n  {} + 1 wraps to {}", Operand::MAX, wrapped);

    // Screen session, as a user would drive it
    println!("\n=== Screen Session ===");
    let mut screen = CalculatorScreen::new(
        CalculatorConfig::default(),
        Evaluator::new(Arc::new(LoggingEventHandler)),
    )
    .unwrap();

    let presses = [
        (Operation::Add, "5", "3"),
        (Operation::Subtract, "10", "4"),
        (Operation::Multiply, "7", "3"),
        (Operation::Divide, "20", "4"),
        (Operation::Divide, "10", "0"),
        (Operation::Add, "abc", "1"),
    ];

    for (operation, a, b) in presses {
        let update = screen.calculate(operation, a, b);
        let kind = if update.is_toast() { "toast" } else { "result" };
        println!("  [{}] {} {} {:<4} -> {}", kind, a, operation, b, update);
    }

    println!("\nResult line: {}", screen.result_text());
}
