// ============================================================================
// Presentation Module
// Headless model of the single calculator screen
// ============================================================================

mod render;
mod screen;

pub use render::{render_outcome, ScreenUpdate};
pub use screen::{CalculatorScreen, InputField};
