// ============================================================================
// Integer Calculator Library
// Two-operand integer arithmetic with a headless single-screen front end
// ============================================================================

//! # Integer Calculator
//!
//! Adds, subtracts, multiplies and divides two 32-bit integers, with a
//! typed failure for division by zero and for unparseable input.
//!
//! ## Features
//!
//! - **Four total operations** on `i32` with two's-complement wraparound
//! - **Truncating division** guarded against a zero divisor
//! - **Strict base-10 parsing** of text operands
//! - **Headless screen model** that turns outcomes into display strings
//! - **Event hooks** for logging or auditing every evaluation
//!
//! ## Example
//!
//! ```rust
//! use int_calculator::prelude::*;
//!
//! assert_eq!(evaluate(Operation::Add, Operand::new(5), Operand::new(3)), Ok(Operand::new(8)));
//!
//! let err = evaluate(Operation::Divide, Operand::new(10), Operand::ZERO).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DivisionByZero);
//!
//! let parse_err = "abc".parse::<Operand>().unwrap_err();
//! assert_eq!(parse_err.kind(), ErrorKind::InvalidInput);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod presentation;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Calculation, CalculatorConfig, Operation};
    pub use crate::engine::{evaluate, Evaluator};
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{CalcError, CalcResult, ErrorKind, Operand};
    pub use crate::presentation::{render_outcome, CalculatorScreen, InputField, ScreenUpdate};
}
