// ============================================================================
// Calculator Errors
// Error types for operand parsing and integer arithmetic
// ============================================================================

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while turning text into operands or evaluating
/// an operation.
///
/// The `Display` text of [`CalcError::DivisionByZero`] is the exact message
/// the presentation layer shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Raw text could not be parsed as a base-10 `i32`
    #[error("invalid input: {input:?} is not a base-10 integer")]
    InvalidInput { input: String },

    /// Divisor was exactly zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Text did not name any of the four operations
    #[error("unknown operation: {input:?}")]
    UnknownOperation { input: String },
}

/// Category of a [`CalcError`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    InvalidInput,
    DivisionByZero,
    UnknownOperation,
}

impl CalcError {
    /// Shorthand for building an `InvalidInput` from the offending text.
    pub fn invalid_input(input: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            input: input.into(),
        }
    }

    /// The error category.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidInput { .. } => ErrorKind::InvalidInput,
            CalcError::DivisionByZero => ErrorKind::DivisionByZero,
            CalcError::UnknownOperation { .. } => ErrorKind::UnknownOperation,
        }
    }

    /// Human-readable message carried by the failure.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
