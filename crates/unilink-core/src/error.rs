//! Structured error handling for unilink client operations.

use strum::{AsRefStr, Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur in client operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(AsRefStr, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The request could not be prepared (e.g. the token store failed).
    ///
    /// Nothing was sent over the network.
    RequestSetup,
    /// The server answered with a non-success status.
    Http,
    /// Input validation failed.
    Validation,
    /// Network-related error occurred.
    Network,
    /// Timeout occurred.
    Timeout,
    /// Serialization/deserialization error.
    Serialization,
    /// The request was cancelled by its owner.
    Cancelled,
    /// Configuration error.
    Configuration,
    /// Persistent client storage failed.
    Storage,
    /// Unknown error occurred.
    #[default]
    Unknown,
}

impl ErrorKind {
    /// Check if this error kind is transient regardless of any status code.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Network | Self::Timeout)
    }
}

/// Structured error type with classification and context tracking.
#[must_use]
#[derive(Debug, Error)]
#[error("[{kind}]{}{}", format_status(.status), format_message(.message))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// HTTP status code, when the server answered.
    pub status: Option<u16>,
    /// Primary error message.
    pub message: Option<String>,
    /// Underlying source error, if any.
    #[source]
    pub source: Option<BoxedError>,
    /// Additional context information.
    pub context: Option<String>,
}

fn format_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" {s}")).unwrap_or_default()
}

fn format_message(message: &Option<String>) -> String {
    message
        .as_ref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            status: None,
            message: None,
            source: None,
            context: None,
        }
    }

    /// Creates a new error from a source error.
    pub fn from_source(kind: ErrorKind, source: impl Into<BoxedError>) -> Self {
        Self::new(kind).with_source(source)
    }

    /// Creates a new request setup error.
    pub fn request_setup() -> Self {
        Self::new(ErrorKind::RequestSetup)
    }

    /// Creates a new HTTP error for the given status code.
    pub fn http(status: u16) -> Self {
        Self::new(ErrorKind::Http).with_status(status)
    }

    /// Creates a new validation error.
    pub fn validation() -> Self {
        Self::new(ErrorKind::Validation)
    }

    /// Creates a new network error.
    pub fn network() -> Self {
        Self::new(ErrorKind::Network)
    }

    /// Creates a new timeout error.
    pub fn timeout() -> Self {
        Self::new(ErrorKind::Timeout)
    }

    /// Creates a new serialization error.
    pub fn serialization() -> Self {
        Self::new(ErrorKind::Serialization)
    }

    /// Creates a new cancellation error.
    pub fn cancelled() -> Self {
        Self::new(ErrorKind::Cancelled)
    }

    /// Creates a new configuration error.
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Creates a new storage error.
    pub fn storage() -> Self {
        Self::new(ErrorKind::Storage)
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the source of the error.
    pub fn with_source(mut self, source: impl Into<BoxedError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds context to the error.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status code, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the message, falling back to the error kind.
    #[must_use]
    pub fn message_or_kind(&self) -> &str {
        self.message.as_deref().unwrap_or_else(|| self.kind.as_ref())
    }

    /// Check if retrying the same request may succeed.
    ///
    /// Network failures and timeouts are retryable, as are `429` and `5xx`
    /// responses.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self.kind {
            ErrorKind::Http => self.status.is_some_and(|s| s == 429 || s >= 500),
            kind => kind.is_transient(),
        }
    }

    /// Check if the server rejected the credentials.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Http && self.status == Some(401)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::from_source(ErrorKind::Storage, error).with_message("I/O operation failed")
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        let message = error.to_string();
        Self::from_source(ErrorKind::Serialization, error).with_message(message)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_error_new() {
        let error = Error::new(ErrorKind::Unknown);
        assert_eq!(error.kind, ErrorKind::Unknown);
        assert!(error.status.is_none());
        assert!(error.message.is_none());
        assert!(error.source.is_none());
        assert!(error.context.is_none());
    }

    #[test]
    fn test_error_builder_pattern() {
        let error = Error::http(404)
            .with_message("internship not found")
            .with_context("GET /internships/42");

        assert_eq!(error.kind(), ErrorKind::Http);
        assert_eq!(error.status(), Some(404));
        assert_eq!(error.message.as_deref(), Some("internship not found"));
        assert_eq!(error.context.as_deref(), Some("GET /internships/42"));
    }

    #[test]
    fn test_error_display() {
        let error = Error::http(500).with_message("boom");
        assert_eq!(error.to_string(), "[http] 500: boom");

        let error = Error::cancelled();
        assert_eq!(error.to_string(), "[cancelled]");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = Error::from(io_error);

        assert_eq!(error.kind, ErrorKind::Storage);
        assert!(error.source.is_some());
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::network().is_retryable());
        assert!(Error::timeout().is_retryable());
        assert!(Error::http(503).is_retryable());
        assert!(Error::http(429).is_retryable());

        assert!(!Error::http(404).is_retryable());
        assert!(!Error::http(401).is_retryable());
        assert!(!Error::request_setup().is_retryable());
        assert!(!Error::cancelled().is_retryable());
        assert!(!Error::new(ErrorKind::Http).is_retryable());
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(Error::http(401).is_unauthorized());
        assert!(!Error::http(403).is_unauthorized());
    }

    #[test]
    fn test_message_or_kind() {
        assert_eq!(Error::timeout().message_or_kind(), "timeout");
        assert_eq!(
            Error::timeout().with_message("slow").message_or_kind(),
            "slow"
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            ErrorKind::from_str("request_setup").unwrap(),
            ErrorKind::RequestSetup
        );
        assert_eq!(ErrorKind::from_str("http").unwrap(), ErrorKind::Http);
        assert!(ErrorKind::from_str("invalid").is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(ErrorKind::default(), ErrorKind::Unknown);
    }
}
