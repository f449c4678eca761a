//! Client Error Types

use thiserror::Error;

/// Client-side form validation failure. Raised before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Failure of a call against the backend API.
///
/// The `Display` output is the bare message; callers prefix it with the
/// action that failed ("Login failed: ...").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server `error` field or the
    /// action's default text.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never completed (network down, CORS, no window).
    #[error("{0}")]
    Transport(String),

    /// 2xx response whose body did not have the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
