//! Per-refresh context handed to every widget

use dashline_types::{ColorMode, StdinInput};

/// Everything a widget may read while producing its data and output
#[derive(Debug, Clone, Default)]
pub struct WidgetContext {
    /// Payload the host wrote to stdin for this refresh
    pub stdin: StdinInput,
    /// Whether rendered output carries ANSI styling
    pub color_mode: ColorMode,
}

impl WidgetContext {
    pub fn new(stdin: StdinInput) -> Self {
        Self {
            stdin,
            color_mode: ColorMode::Auto,
        }
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }
}
