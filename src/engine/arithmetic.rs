// ============================================================================
// Arithmetic Evaluator
// The four integer operations and their dispatch
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{CalcResult, Operand};

/// `a + b`, wrapping on overflow.
#[inline]
pub fn add(a: Operand, b: Operand) -> Operand {
    a.wrapping_add(b)
}

/// `a - b`, wrapping on overflow.
#[inline]
pub fn subtract(a: Operand, b: Operand) -> Operand {
    a.wrapping_sub(b)
}

/// `a × b`, wrapping on overflow.
#[inline]
pub fn multiply(a: Operand, b: Operand) -> Operand {
    a.wrapping_mul(b)
}

/// `a ÷ b`, truncated toward zero.
///
/// # Errors
/// Returns `DivisionByZero` when `b` is zero.
#[inline]
pub fn divide(a: Operand, b: Operand) -> CalcResult<Operand> {
    a.checked_div(b)
}

/// Apply `operation` to `a` and `b`.
///
/// # Example
/// ```
/// use int_calculator::prelude::*;
///
/// let q = evaluate(Operation::Divide, Operand::new(10), Operand::new(-5));
/// assert_eq!(q, Ok(Operand::new(-2)));
///
/// let err = evaluate(Operation::Divide, Operand::new(10), Operand::ZERO).unwrap_err();
/// assert_eq!(err.to_string(), "Cannot divide by zero");
/// ```
pub fn evaluate(operation: Operation, a: Operand, b: Operand) -> CalcResult<Operand> {
    match operation {
        Operation::Add => Ok(add(a, b)),
        Operation::Subtract => Ok(subtract(a, b)),
        Operation::Multiply => Ok(multiply(a, b)),
        Operation::Divide => divide(a, b),
    }
}
