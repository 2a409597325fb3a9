// ============================================================================
// Calculator Configuration
// Display strings and input handling for the presentation layer
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default prefix of the result line
pub const DEFAULT_RESULT_PREFIX: &str = "Result: ";

/// Default toast shown when either input is not an integer
pub const DEFAULT_INVALID_INPUT_MESSAGE: &str = "Please enter valid numbers";

/// Configuration for a calculator screen.
///
/// The division-by-zero message is not configurable: it is always the
/// error's own message, shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Text placed before the value on the result line
    pub result_prefix: String,

    /// Toast shown when an input field does not hold a base-10 integer
    pub invalid_input_message: String,

    /// Strip surrounding whitespace from input fields before parsing
    pub trim_input: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl CalculatorConfig {
    /// Builder method: Set the result line prefix
    pub fn with_result_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.result_prefix = prefix.into();
        self
    }

    /// Builder method: Set the invalid-input toast
    pub fn with_invalid_input_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_input_message = message.into();
        self
    }

    /// Builder method: Enable or disable whitespace trimming
    pub fn with_trim_input(mut self, trim: bool) -> Self {
        self.trim_input = trim;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.invalid_input_message.trim().is_empty() {
            return Err("Invalid input message cannot be empty".to_string());
        }

        if self.result_prefix.contains(['\n', '\r']) {
            return Err("Result prefix must fit on one line".to_string());
        }

        Ok(())
    }

    /// Format a successful value as the result line
    pub fn format_result(&self, value: impl std::fmt::Display) -> String {
        format!("{}{}", self.result_prefix, value)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// Behaves exactly like the shipped app
    /// - Strict parsing, no trimming
    /// - "Result: " prefix
    pub fn strict() -> Self {
        Self {
            result_prefix: DEFAULT_RESULT_PREFIX.to_string(),
            invalid_input_message: DEFAULT_INVALID_INPUT_MESSAGE.to_string(),
            trim_input: false,
        }
    }

    /// Terminal-friendly: tolerates whitespace around numbers
    pub fn lenient() -> Self {
        Self::strict().with_trim_input(true)
    }
}

// ============================================================================
// File Loading
// ============================================================================

#[cfg(feature = "serde")]
pub use loading::ConfigError;

#[cfg(feature = "serde")]
mod loading {
    use super::CalculatorConfig;
    use std::path::Path;
    use thiserror::Error;

    /// Errors raised while loading a configuration file
    #[derive(Debug, Error)]
    pub enum ConfigError {
        #[error("failed to read config file: {0}")]
        Io(#[from] std::io::Error),

        #[error("failed to parse config file: {0}")]
        Parse(#[from] toml::de::Error),

        #[error("invalid configuration: {0}")]
        Invalid(String),
    }

    impl CalculatorConfig {
        /// Parse and validate a TOML document. Missing keys take defaults.
        pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
            let config: CalculatorConfig = toml::from_str(text)?;
            config.validate().map_err(|reason| {
                tracing::warn!(%reason, "rejected calculator configuration");
                ConfigError::Invalid(reason)
            })?;
            Ok(config)
        }

        /// Read, parse and validate a TOML file.
        pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
            let text = std::fs::read_to_string(path.as_ref())?;
            Self::from_toml_str(&text)
        }
    }
}
