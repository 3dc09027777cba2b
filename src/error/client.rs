//! Errors returned by the API client.

use thiserror::Error;

use super::FailureKind;
use crate::traits::HttpError;

/// A failed backend call.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Non-2xx status without a JSON envelope.
    #[error("Unexpected HTTP status {status}")]
    Status { status: u16 },

    /// `success=false` envelope.
    #[error("{message}")]
    Api { message: String },
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::Api { .. } => FailureKind::Application,
            _ => FailureKind::Transport,
        }
    }

    /// Text shown to the user in placeholders and toasts.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(err) => match err {
                HttpError::ConnectionFailed(msg)
                | HttpError::Timeout(msg)
                | HttpError::InvalidUrl(msg)
                | HttpError::Other(msg) => msg.clone(),
            },
            ClientError::Decode(_) => "Invalid response from server".to_string(),
            ClientError::Encode(_) => "Could not encode request".to_string(),
            ClientError::Status { status } => format!("Server responded with status {}", status),
            ClientError::Api { message } => message.clone(),
        }
    }
}
