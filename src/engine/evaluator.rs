// ============================================================================
// Instrumented Evaluator
// Runs the arithmetic dispatch and reports every call
// ============================================================================

use super::arithmetic;
use crate::domain::{Calculation, Operation};
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{CalcResult, Operand};
use std::sync::Arc;

/// Arithmetic evaluator with a pluggable event handler
///
/// Returns exactly what [`arithmetic::evaluate`] returns; the handler only
/// observes.
pub struct Evaluator {
    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Evaluator {
    /// Create a new evaluator
    pub fn new(event_handler: Arc<dyn EventHandler>) -> Self {
        Self { event_handler }
    }

    /// Evaluate `operation` on `a` and `b`, emitting one event
    pub fn evaluate(&self, operation: Operation, a: Operand, b: Operand) -> CalcResult<Operand> {
        let outcome = arithmetic::evaluate(operation, a, b);

        tracing::debug!(
            operation = operation.name(),
            lhs = a.value(),
            rhs = b.value(),
            ok = outcome.is_ok(),
            "evaluated"
        );

        let calculation = Calculation::new(operation, a, b, outcome.clone());
        self.event_handler
            .on_event(CalculationEvent::from_calculation(calculation));

        outcome
    }

    /// Report input text that never reached evaluation
    pub fn reject_input(&self, input: &str) {
        tracing::debug!(?input, "operand rejected");
        self.event_handler
            .on_event(CalculationEvent::input_rejected(input));
    }

    /// Get the event handler
    pub fn event_handler(&self) -> &Arc<dyn EventHandler> {
        &self.event_handler
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Arc::new(NoOpEventHandler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::CalcError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<CalculationEvent>>,
    }

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: CalculationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_evaluator_matches_free_function() {
        let evaluator = Evaluator::default();
        for operation in Operation::ALL {
            let a = Operand::new(-37);
            let b = Operand::new(6);
            assert_eq!(
                evaluator.evaluate(operation, a, b),
                arithmetic::evaluate(operation, a, b)
            );
        }
    }

    #[test]
    fn test_emits_one_event_per_call() {
        let handler = Arc::new(RecordingHandler::default());
        let evaluator = Evaluator::new(handler.clone());

        evaluator.evaluate(Operation::Add, Operand::new(5), Operand::new(3)).unwrap();
        let err = evaluator
            .evaluate(Operation::Divide, Operand::new(10), Operand::ZERO)
            .unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);

        let events = handler.events.lock().unwrap();
        assert_eq!(events.len(), 2);

        match &events[0] {
            CalculationEvent::Evaluated { calculation, .. } => {
                assert_eq!(calculation.outcome, Ok(Operand::new(8)));
            }
            other => panic!("unexpected event: {other:?}"),
        }
        match &events[1] {
            CalculationEvent::EvaluationFailed { calculation, .. } => {
                assert_eq!(calculation.operation, Operation::Divide);
                assert_eq!(calculation.outcome, Err(CalcError::DivisionByZero));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_reject_input_emits_event() {
        let handler = Arc::new(RecordingHandler::default());
        let evaluator = Evaluator::new(handler.clone());

        evaluator.reject_input("abc");

        let events = handler.events.lock().unwrap();
        assert!(matches!(
            events.as_slice(),
            [CalculationEvent::InputRejected { input, .. }] if input == "abc"
        ));
    }
}
