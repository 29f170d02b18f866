//! Error types surfaced by the API client.

use crate::forms::ValidationError;

/// Message used when the backend gives no explanation.
pub const DEFAULT_FAILURE: &str = "Request failed";

/// Everything that can go wrong between a button press and a decoded response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the bearer token. The stored session has already
    /// been cleared when this is returned.
    #[error("{}", .message.as_deref().unwrap_or("Session expired"))]
    Unauthorized { message: Option<String> },
    /// Any other non-2xx answer, with the server's `msg` when it sent one.
    #[error("{}", .message.as_deref().unwrap_or(DEFAULT_FAILURE))]
    Server { status: u16, message: Option<String> },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Could not store session: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text for a notification: the server's own message or validation text
    /// when there is one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthorized { message: Some(m) } | ApiError::Server { message: Some(m), .. } => {
                m.clone()
            }
            ApiError::Validation(e) => e.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

impl From<store::StoreError> for ApiError {
    fn from(e: store::StoreError) -> Self {
        ApiError::Storage(e.to_string())
    }
}
