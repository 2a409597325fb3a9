// ============================================================================
// Engine Module
// Contains the arithmetic evaluator
// ============================================================================

mod arithmetic;
mod evaluator;

pub use arithmetic::{add, divide, evaluate, multiply, subtract};
pub use evaluator::Evaluator;
