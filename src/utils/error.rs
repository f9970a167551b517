//! Error types and handling
//!
//! Every backend interaction funnels into the `AppError` taxonomy so that
//! controllers can convert any failure into a single user-visible message.

use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// A form field failed a declared validation rule; never reaches the network
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network failure, non-2xx status, or a malformed response envelope
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend reported a domain failure inside a 2xx envelope
    #[error("{0}")]
    Application(String),

    /// Configuration error at startup
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Message suitable for a user-facing notification.
    ///
    /// Backend-reported failures carry the payload message verbatim; transport
    /// failures fall back to a generic message so raw socket errors never
    /// surface in the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Application(msg) => msg.clone(),
            AppError::NotFound(what) => format!("{} was not found", what),
            AppError::Transport(_) => {
                "The server could not be reached. Please try again.".to_string()
            }
            AppError::Config(msg) => format!("Configuration error: {}", msg),
        }
    }

    /// Whether this error came from the backend or the network rather than
    /// local validation.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AppError::Transport(_) | AppError::Application(_) | AppError::NotFound(_)
        )
    }
}

// Implement From for common error types

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Transport("request timed out".to_string())
        } else if err.is_connect() {
            AppError::Transport("failed to connect to the backend API".to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Transport(format!("malformed response: {}", err))
    }
}

/// Result type alias for engine operations
pub type AppResult<T> = Result<T, AppError>;
