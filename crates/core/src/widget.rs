//! Widget trait and related types

use crate::context::WidgetContext;

/// Metadata about a widget
#[derive(Debug, Clone)]
pub struct WidgetMetadata {
    /// Unique identifier for this widget type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this widget shows
    pub description: String,
}

/// Trait for all widgets
///
/// A widget turns the host payload into a short piece of status text in two
/// steps: `get_data` extracts what it needs from the context, and `render`
/// formats that data. The host calls them in order and skips the widget when
/// `get_data` returns `None`.
pub trait Widget: Send + Sync {
    /// Display record produced by `get_data`
    type Data;

    /// Get metadata about this widget
    fn metadata(&self) -> &WidgetMetadata;

    /// Unique identifier for this widget type
    fn id(&self) -> &str {
        &self.metadata().id
    }

    /// Human-readable name
    fn name(&self) -> &str {
        &self.metadata().name
    }

    /// Extract this widget's data, or `None` when there is nothing to show
    fn get_data(&self, ctx: &WidgetContext) -> Option<Self::Data>;

    /// Format the data as status text
    fn render(&self, data: &Self::Data, ctx: &WidgetContext) -> String;

    /// Run the data step and, if it produced anything, the render step
    fn render_line(&self, ctx: &WidgetContext) -> Option<String> {
        match self.get_data(ctx) {
            Some(data) => Some(self.render(&data, ctx)),
            None => {
                log::debug!("Widget '{}' has no data, skipping", self.id());
                None
            }
        }
    }
}
