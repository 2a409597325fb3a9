// ============================================================================
// Outcome Rendering
// Maps an evaluation outcome to what the screen shows
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::numeric::{CalcError, CalcResult, Operand};
use std::fmt;

/// What a button press changes on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenUpdate {
    /// Result line replaced, e.g. `"Result: 8"`
    ResultText(String),
    /// Transient message; the result line is left alone
    Toast(String),
}

impl ScreenUpdate {
    pub fn text(&self) -> &str {
        match self {
            ScreenUpdate::ResultText(text) | ScreenUpdate::Toast(text) => text,
        }
    }

    pub fn is_toast(&self) -> bool {
        matches!(self, ScreenUpdate::Toast(_))
    }
}

impl fmt::Display for ScreenUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Choose the display for an outcome by error kind.
///
/// Invalid input gets the configured generic toast. Every other failure
/// shows its own message verbatim.
pub fn render_outcome(config: &CalculatorConfig, outcome: &CalcResult<Operand>) -> ScreenUpdate {
    match outcome {
        Ok(value) => ScreenUpdate::ResultText(config.format_result(value)),
        Err(CalcError::InvalidInput { .. }) => {
            ScreenUpdate::Toast(config.invalid_input_message.clone())
        }
        Err(err @ (CalcError::DivisionByZero | CalcError::UnknownOperation { .. })) => {
            ScreenUpdate::Toast(err.message())
        }
    }
}
