// ============================================================================
// Calculation Record
// One evaluation: operands, operation and outcome
// ============================================================================

use super::operation::Operation;
use crate::numeric::{CalcResult, Operand};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Record of a single evaluation.
///
/// Built by the instrumented evaluator and handed to event handlers.
/// Nothing keeps it once the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation {
    pub operation: Operation,
    pub lhs: Operand,
    pub rhs: Operand,
    pub outcome: CalcResult<Operand>,
}

impl Calculation {
    pub fn new(operation: Operation, lhs: Operand, rhs: Operand, outcome: CalcResult<Operand>) -> Self {
        Self {
            operation,
            lhs,
            rhs,
            outcome,
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The input side only, e.g. `"20 ÷ 4"`.
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.lhs, self.operation, self.rhs)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => write!(f, "{} = {}", self.expression(), value),
            Err(err) => write!(f, "{} failed: {}", self.expression(), err),
        }
    }
}
