//! Errors raised while reading the host payload

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("status-line input is empty")]
    Empty,

    #[error("failed to read status-line input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid status-line JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
