//! dashline-widgets: Widget implementations for dashline status lines.

mod session_id;

pub use session_id::{SessionIdWidget, SESSION_ID_PREFIX};
