//! Session ID widget
//!
//! Shows the full session identifier from the host payload as a dim label.

use dashline_core::{colorize, Color, Widget, WidgetContext, WidgetMetadata};
use dashline_types::SessionIdData;

/// Symbol placed before the identifier
pub const SESSION_ID_PREFIX: &str = "🆔";

pub struct SessionIdWidget {
    metadata: WidgetMetadata,
}

impl SessionIdWidget {
    pub fn new() -> Self {
        let metadata = WidgetMetadata {
            id: "sessionId".to_string(),
            name: "Session ID".to_string(),
            description: "Full identifier of the current session".to_string(),
        };

        Self { metadata }
    }
}

impl Default for SessionIdWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for SessionIdWidget {
    type Data = SessionIdData;

    fn metadata(&self) -> &WidgetMetadata {
        &self.metadata
    }

    fn get_data(&self, ctx: &WidgetContext) -> Option<SessionIdData> {
        let session_id = ctx.stdin.session_id.as_deref()?;
        if session_id.is_empty() {
            return None;
        }
        Some(SessionIdData::new(session_id))
    }

    fn render(&self, data: &SessionIdData, ctx: &WidgetContext) -> String {
        // Never truncated
        let label = format!("{} {}", SESSION_ID_PREFIX, data.session_id);
        colorize(&label, Color::Dim, ctx.color_mode)
    }
}
