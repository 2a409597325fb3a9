// ============================================================================
// Event Handler Interface
// Defines the contract for observing evaluations
// ============================================================================

use crate::domain::Calculation;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the evaluator and the calculator screen
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Operation produced a value
    Evaluated {
        calculation: Calculation,
        timestamp: DateTime<Utc>,
    },

    /// Operation failed (division by zero)
    EvaluationFailed {
        calculation: Calculation,
        timestamp: DateTime<Utc>,
    },

    /// Input text could not be parsed; nothing was evaluated
    InputRejected {
        input: String,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    /// Build the event matching the calculation's outcome
    pub fn from_calculation(calculation: Calculation) -> Self {
        let timestamp = Utc::now();
        if calculation.is_success() {
            CalculationEvent::Evaluated {
                calculation,
                timestamp,
            }
        } else {
            CalculationEvent::EvaluationFailed {
                calculation,
                timestamp,
            }
        }
    }

    pub fn input_rejected(input: impl Into<String>) -> Self {
        CalculationEvent::InputRejected {
            input: input.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            CalculationEvent::Evaluated { timestamp, .. }
            | CalculationEvent::EvaluationFailed { timestamp, .. }
            | CalculationEvent::InputRejected { timestamp, .. } => *timestamp,
        }
    }
}

/// Event handler trait for observing calculator events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Evaluated { calculation, .. } => {
                tracing::info!(%calculation, "calculation evaluated");
            }
            CalculationEvent::EvaluationFailed { calculation, .. } => {
                tracing::info!(%calculation, "calculation failed");
            }
            CalculationEvent::InputRejected { input, .. } => {
                tracing::info!(?input, "input rejected");
            }
        }
    }
}
