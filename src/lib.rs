//! dashline: status-line widgets rendered from a JSON session payload
//!
//! This library ties the workspace crates together:
//! - the widget contract and color utility (`dashline-core`)
//! - widget implementations (`dashline-widgets`)
//! - configuration management
//! - reading the host payload

pub mod config;
pub mod payload;

// Re-export commonly used types
pub use config::AppConfig;
pub use payload::read_payload;
pub use dashline_core::{Widget, WidgetContext};
pub use dashline_types::{ColorMode, StdinInput};
pub use dashline_widgets::SessionIdWidget;
