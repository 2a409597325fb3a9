// ============================================================================
// Domain Models Module
// Operation selector, calculation record and screen configuration
// ============================================================================

pub mod calculation;
pub mod config;
pub mod operation;

pub use calculation::Calculation;
pub use config::CalculatorConfig;
pub use operation::Operation;

#[cfg(feature = "serde")]
pub use config::ConfigError;
