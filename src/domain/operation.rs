// ============================================================================
// Operation Domain Model
// ============================================================================

use crate::numeric::CalcError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The arithmetic function selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations, in on-screen button order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Lowercase name, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Symbol printed on the operation button.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Whether the operation can fail for some operand pair.
    pub const fn is_fallible(self) -> bool {
        matches!(self, Operation::Divide)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Parse a name, alias or symbol (case-insensitive).
    ///
    /// # Examples
    /// - "add", "plus", "+" -> Add
    /// - "sub", "minus", "-" -> Subtract
    /// - "mul", "times", "*", "x", "×" -> Multiply
    /// - "div", "/", "÷" -> Divide
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "plus" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "minus" | "-" | "−" => Ok(Operation::Subtract),
            "multiply" | "mul" | "times" | "*" | "x" | "×" => Ok(Operation::Multiply),
            "divide" | "div" | "/" | "÷" => Ok(Operation::Divide),
            _ => Err(CalcError::UnknownOperation {
                input: s.to_string(),
            }),
        }
    }
}
