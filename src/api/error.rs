//! Error handling for the API adapter

use thiserror::Error;

/// Coarse failure taxonomy used for diagnostics and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum FetchErrorKind {
    /// Transport-level failure: connection refused, DNS, offline, non-2xx status.
    NetworkFailure,
    /// The body was not valid JSON, or not the expected shape.
    DecodeFailure,
    /// Well-formed JSON carrying the sentinel `error` field.
    ApplicationError,
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-success status whose body carried no sentinel error.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to decode the JSON body into the expected type.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with `{"error": ...}`.
    #[error("Service error: {0}")]
    Application(String),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Reqwest(e) if e.is_decode() => FetchErrorKind::DecodeFailure,
            FetchError::Reqwest(_) | FetchError::Http { .. } => FetchErrorKind::NetworkFailure,
            FetchError::Decode(_) => FetchErrorKind::DecodeFailure,
            FetchError::Application(_) => FetchErrorKind::ApplicationError,
        }
    }

    pub fn is_application_error(&self) -> bool {
        self.kind() == FetchErrorKind::ApplicationError
    }
}
