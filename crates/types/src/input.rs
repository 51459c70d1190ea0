//! Host payload read from stdin on every status-line refresh.
//!
//! Every field is optional: hosts send different subsets depending on their
//! version and state, and widgets treat a missing field as "nothing to show".

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Read;

/// Active model as reported by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Working directories as reported by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceInfo {
    #[serde(default)]
    pub current_dir: Option<String>,
    #[serde(default)]
    pub project_dir: Option<String>,
}

/// JSON document the status-line host writes to stdin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StdinInput {
    /// Opaque identifier of the current session
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub transcript_path: Option<String>,
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub model: Option<ModelInfo>,
    #[serde(default)]
    pub workspace: Option<WorkspaceInfo>,
    /// Fields this crate does not model, kept so nothing is lost
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StdinInput {
    /// Parse a payload from a JSON string
    pub fn from_json(content: &str) -> Result<Self, InputError> {
        if content.trim().is_empty() {
            return Err(InputError::Empty);
        }
        let input = serde_json::from_str(content)?;
        Ok(input)
    }

    /// Read the whole reader and parse it as a payload
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        log::trace!("Read {} bytes of status-line input", content.len());
        Self::from_json(&content)
    }

    /// Payload carrying only a session id (handy for hosts and tests)
    pub fn with_session_id(session_id: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let json = r#"{
            "session_id": "3f2a9c1e-7b4d-4e8a-9c0f-1a2b3c4d5e6f",
            "transcript_path": "/tmp/transcript.jsonl",
            "cwd": "/home/user/project",
            "version": "1.0.80",
            "model": { "id": "model-large", "display_name": "Large" },
            "workspace": { "current_dir": "/home/user/project", "project_dir": "/home/user/project" }
        }"#;

        let input = StdinInput::from_json(json).unwrap();
        assert_eq!(
            input.session_id.as_deref(),
            Some("3f2a9c1e-7b4d-4e8a-9c0f-1a2b3c4d5e6f")
        );
        assert_eq!(
            input.model.and_then(|m| m.display_name).as_deref(),
            Some("Large")
        );
        assert_eq!(
            input.workspace.and_then(|w| w.project_dir).as_deref(),
            Some("/home/user/project")
        );
        assert!(input.extra.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let input = StdinInput::from_json("{}").unwrap();
        assert_eq!(input, StdinInput::default());
        assert!(input.session_id.is_none());
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let input =
            StdinInput::from_json(r#"{"session_id": "abc", "cost": {"total_cost_usd": 0.42}}"#)
                .unwrap();
        assert_eq!(input.session_id.as_deref(), Some("abc"));
        assert!(input.extra.contains_key("cost"));

        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"total_cost_usd\":0.42"));
    }

    #[test]
    fn test_blank_input_is_empty_error() {
        assert!(matches!(
            StdinInput::from_json("  \n"),
            Err(InputError::Empty)
        ));
    }

    #[test]
    fn test_malformed_input_is_parse_error() {
        assert!(matches!(
            StdinInput::from_json("{\"session_id\": "),
            Err(InputError::Parse(_))
        ));
        assert!(matches!(
            StdinInput::from_json(r#"{"session_id": 42}"#),
            Err(InputError::Parse(_))
        ));
    }

    #[test]
    fn test_from_reader() {
        let input = StdinInput::from_reader(r#"{"session_id": "from-reader"}"#.as_bytes()).unwrap();
        assert_eq!(input.session_id.as_deref(), Some("from-reader"));
    }
}
