// ============================================================================
// Numeric Module
// 32-bit integer operands and their error types
// ============================================================================
//
// This module provides:
// - Operand: signed 32-bit value with wrapping arithmetic
// - CalcError / ErrorKind: failures surfaced to the caller
// - CalcResult: result alias used across the crate
//
// Design principles:
// - No floating-point operations
// - Fixed 32-bit two's-complement width, wrapping on overflow
// - Division by zero is a value, not a panic

mod errors;
mod operand;

pub use errors::{CalcError, CalcResult, ErrorKind};
pub use operand::Operand;
