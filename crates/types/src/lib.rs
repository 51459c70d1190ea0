//! dashline-types: Shared data types for dashline status-line widgets.
//!
//! This crate contains pure data types (the host payload, widget data
//! records, color names) that are shared across all dashline crates. These
//! types have no terminal dependencies, making them suitable as a foundation
//! layer.

pub mod color;
pub mod error;
pub mod input;
pub mod widget_data;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorMode};
pub use error::InputError;
pub use input::{ModelInfo, StdinInput, WorkspaceInfo};
pub use widget_data::SessionIdData;
