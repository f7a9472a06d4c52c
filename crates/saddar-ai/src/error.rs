//! Error type for completion-service calls.

use std::time::Duration;

/// Errors from the completion service.
///
/// These stay inside the AI layer: smart search turns them into an empty
/// result and the insight client into the default message.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("HTTP error: {status} from completion service")]
    Http { status: u16, body: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request error: {0}")]
    Request(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Completion service returned no text")]
    EmptyResponse,

    #[error("No API key configured")]
    MissingApiKey,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AiError {
    /// HTTP status, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AiError {
    fn from(e: serde_json::Error) -> Self {
        AiError::Deserialization(e.to_string())
    }
}
