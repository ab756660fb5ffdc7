use std::fmt;
use thiserror::Error;

/// The error type for booking API operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
    raw_body: Option<String>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials are absent or incomplete, no request has been sent
    CredentialMissing,

    /// Signing key is empty or otherwise unusable
    KeyInvalid,

    /// Request cannot be built (missing required fields, invalid path, etc.)
    RequestInvalid,

    /// Configuration error (no transport, invalid endpoint)
    ConfigInvalid,

    /// Network level failure: connect, DNS, timeout, reset
    Transport,

    /// Response body doesn't match the expected schema
    Deserialization,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
            raw_body: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the raw response body that caused this error.
    pub fn with_raw_body(mut self, raw_body: impl Into<String>) -> Self {
        self.raw_body = Some(raw_body.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the raw response body if this error carries one.
    ///
    /// Only [`ErrorKind::Deserialization`] errors built by the executor have it.
    pub fn raw_body(&self) -> Option<&str> {
        self.raw_body.as_deref()
    }

    /// Check if this is a credential error
    pub fn is_credential_error(&self) -> bool {
        matches!(self.kind, ErrorKind::CredentialMissing | ErrorKind::KeyInvalid)
    }
}

// Convenience constructors
impl Error {
    /// Create a credential missing error
    pub fn credential_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialMissing, message)
    }

    /// Create a key invalid error
    pub fn key_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create a deserialization error that keeps the raw body around.
    pub fn deserialization(message: impl Into<String>, raw_body: impl Into<String>) -> Self {
        Self::new(ErrorKind::Deserialization, message).with_raw_body(raw_body)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialMissing => write!(f, "missing credentials"),
            ErrorKind::KeyInvalid => write!(f, "invalid signing key"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Deserialization => write!(f, "deserialization error"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::config_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::request_invalid(format!("serialize request body: {err}"))
            .with_source(anyhow::Error::from(err))
    }
}
