// ============================================================================
// Calculator Screen
// Two input fields, four operation buttons and a result line
// ============================================================================

use super::render::{render_outcome, ScreenUpdate};
use crate::domain::{CalculatorConfig, Operation};
use crate::engine::Evaluator;
use crate::numeric::{CalcResult, Operand};

/// Identifies one of the two text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    First,
    Second,
}

/// State of the calculator screen.
///
/// Every failure turns into a toast; the screen stays usable afterwards.
///
/// # Example
/// ```
/// use int_calculator::prelude::*;
///
/// let mut screen = CalculatorScreen::default();
/// screen.set_input(InputField::First, "5");
/// screen.set_input(InputField::Second, "3");
///
/// let update = screen.press(Operation::Add);
/// assert_eq!(update, ScreenUpdate::ResultText("Result: 8".to_string()));
/// assert_eq!(screen.result_text(), "Result: 8");
/// ```
pub struct CalculatorScreen {
    config: CalculatorConfig,
    evaluator: Evaluator,
    first_input: String,
    second_input: String,
    result_text: String,
    last_toast: Option<String>,
}

impl CalculatorScreen {
    /// Create a screen after validating `config`
    pub fn new(config: CalculatorConfig, evaluator: Evaluator) -> Result<Self, String> {
        config.validate()?;

        Ok(Self {
            config,
            evaluator,
            first_input: String::new(),
            second_input: String::new(),
            result_text: String::new(),
            last_toast: None,
        })
    }

    // ========================================================================
    // Input Fields
    // ========================================================================

    pub fn set_input(&mut self, field: InputField, text: impl Into<String>) {
        match field {
            InputField::First => self.first_input = text.into(),
            InputField::Second => self.second_input = text.into(),
        }
    }

    pub fn set_first_input(&mut self, text: impl Into<String>) {
        self.set_input(InputField::First, text);
    }

    pub fn set_second_input(&mut self, text: impl Into<String>) {
        self.set_input(InputField::Second, text);
    }

    pub fn input(&self, field: InputField) -> &str {
        match field {
            InputField::First => &self.first_input,
            InputField::Second => &self.second_input,
        }
    }

    /// Empty both fields, the result line and the last toast
    pub fn clear(&mut self) {
        self.first_input.clear();
        self.second_input.clear();
        self.result_text.clear();
        self.last_toast = None;
    }

    // ========================================================================
    // Buttons
    // ========================================================================

    /// Handle a press of the button for `operation`
    pub fn press(&mut self, operation: Operation) -> ScreenUpdate {
        let outcome = self
            .parse_operands()
            .and_then(|(a, b)| self.evaluator.evaluate(operation, a, b));

        let update = render_outcome(&self.config, &outcome);
        match &update {
            ScreenUpdate::ResultText(text) => self.result_text.clone_from(text),
            ScreenUpdate::Toast(message) => self.last_toast = Some(message.clone()),
        }

        tracing::debug!(operation = operation.name(), toast = update.is_toast(), "button pressed");
        update
    }

    /// Fill both fields and press `operation`
    pub fn calculate(
        &mut self,
        operation: Operation,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> ScreenUpdate {
        self.set_input(InputField::First, first);
        self.set_input(InputField::Second, second);
        self.press(operation)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The result line; empty until the first successful press
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn last_toast(&self) -> Option<&str> {
        self.last_toast.as_deref()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn parse_operands(&self) -> CalcResult<(Operand, Operand)> {
        let a = self.parse_field(&self.first_input)?;
        let b = self.parse_field(&self.second_input)?;
        Ok((a, b))
    }

    fn parse_field(&self, text: &str) -> CalcResult<Operand> {
        let parsed = if self.config.trim_input {
            Operand::parse_trimmed(text)
        } else {
            Operand::parse(text)
        };

        if parsed.is_err() {
            self.evaluator.reject_input(text);
        }
        parsed
    }
}

impl Default for CalculatorScreen {
    fn default() -> Self {
        Self {
            config: CalculatorConfig::default(),
            evaluator: Evaluator::default(),
            first_input: String::new(),
            second_input: String::new(),
            result_text: String::new(),
            last_toast: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_scenarios() {
        let mut screen = CalculatorScreen::default();

        let cases = [
            (Operation::Add, "5", "3", "Result: 8"),
            (Operation::Subtract, "10", "4", "Result: 6"),
            (Operation::Multiply, "7", "3", "Result: 21"),
            (Operation::Divide, "20", "4", "Result: 5"),
        ];

        for (operation, a, b, expected) in cases {
            let update = screen.calculate(operation, a, b);
            assert_eq!(update, ScreenUpdate::ResultText(expected.to_string()));
            assert_eq!(screen.result_text(), expected);
        }
        assert_eq!(screen.last_toast(), None);
    }

    #[test]
    fn test_invalid_input_keeps_result() {
        let mut screen = CalculatorScreen::default();
        screen.calculate(Operation::Add, "1", "1");

        let update = screen.calculate(Operation::Add, "abc", "3");
        assert_eq!(update, ScreenUpdate::Toast("Please enter valid numbers".to_string()));
        assert_eq!(screen.result_text(), "Result: 2");
        assert_eq!(screen.last_toast(), Some("Please enter valid numbers"));
    }

    #[test]
    fn test_empty_second_field_is_invalid() {
        let mut screen = CalculatorScreen::default();
        screen.set_input(InputField::First, "4");

        let update = screen.press(Operation::Multiply);
        assert_eq!(update.text(), "Please enter valid numbers");
        assert_eq!(screen.result_text(), "");
    }

    #[test]
    fn test_divide_by_zero_toast() {
        let mut screen = CalculatorScreen::default();
        let update = screen.calculate(Operation::Divide, "10", "0");
        assert_eq!(update, ScreenUpdate::Toast("Cannot divide by zero".to_string()));
        assert_eq!(screen.result_text(), "");
    }

    #[test]
    fn test_invalid_input_wins_over_zero_divisor() {
        let mut screen = CalculatorScreen::default();
        let update = screen.calculate(Operation::Divide, "x", "0");
        assert_eq!(update.text(), "Please enter valid numbers");
    }

    #[test]
    fn test_trimming_is_opt_in() {
        let mut strict = CalculatorScreen::default();
        assert!(strict.calculate(Operation::Add, " 5", "3").is_toast());

        let mut lenient =
            CalculatorScreen::new(CalculatorConfig::lenient(), Evaluator::default()).unwrap();
        assert_eq!(lenient.calculate(Operation::Add, " 5", "3 ").text(), "Result: 8");
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CalculatorConfig::strict().with_invalid_input_message("");
        assert!(CalculatorScreen::new(config, Evaluator::default()).is_err());
    }

    #[test]
    fn test_named_setters_fill_fields() {
        let mut screen = CalculatorScreen::default();
        screen.set_first_input("20");
        screen.set_second_input("-4");

        assert_eq!(screen.input(InputField::First), "20");
        assert_eq!(screen.input(InputField::Second), "-4");
        assert_eq!(screen.press(Operation::Divide).text(), "Result: -5");
    }

    #[test]
    fn test_clear() {
        let mut screen = CalculatorScreen::default();
        screen.calculate(Operation::Divide, "9", "0");
        screen.calculate(Operation::Add, "1", "2");
        screen.clear();

        assert_eq!(screen.input(InputField::First), "");
        assert_eq!(screen.input(InputField::Second), "");
        assert_eq!(screen.result_text(), "");
        assert_eq!(screen.last_toast(), None);
    }
}
