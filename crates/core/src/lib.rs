//! dashline-core: Core traits and utilities for dashline widgets.
//!
//! This crate contains the widget contract (`Widget`), the per-refresh
//! `WidgetContext`, and the color utility widgets style their output with.

pub mod colors;
mod context;
mod widget;

pub use colors::colorize;
pub use context::WidgetContext;
pub use widget::{Widget, WidgetMetadata};

// Re-export types used in trait signatures for convenience
pub use dashline_types::{Color, ColorMode, StdinInput};
