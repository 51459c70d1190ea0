//! Display records produced by widgets' data step.

use serde::{Deserialize, Serialize};

/// Data for the session id widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdData {
    pub session_id: String,
}

impl SessionIdData {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}
