//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server error (status {status})")]
    Server { status: u16, message: Option<String> },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Edit session opened without an employee id
    #[error("No employee ID provided")]
    MissingEmployeeId,
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a server error from a status code and optional body message
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server { status, message }
    }

    /// Create an invalid-response error with message
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Message to surface to the user.
    ///
    /// A server-supplied message takes priority; otherwise the error's own
    /// display text (the transport-layer description) is used.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Server {
                message: Some(message), ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = AppError::server(409, Some("Duplicate email".to_string()));
        assert_eq!(err.user_message(), "Duplicate email");
    }

    #[test]
    fn test_user_message_falls_back_to_display() {
        let err = AppError::server(500, None);
        assert_eq!(err.user_message(), "Server error (status 500)");

        let err = AppError::MissingEmployeeId;
        assert_eq!(err.user_message(), "No employee ID provided");
    }
}
