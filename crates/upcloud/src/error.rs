//! Error types for the UpCloud client
//!
//! Every failure a caller can observe is one variant of [`Error`]. The
//! [`ErrorKind`] discriminant lets callers branch on the category without
//! matching on variant payloads.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// UpCloud client errors
#[derive(Error, Debug)]
pub enum Error {
    /// The API rejected the request with a structured error envelope
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Response bytes did not have the expected envelope shape
    #[error("Malformed envelope: {0}")]
    MalformedEnvelope(String),

    /// The HTTP exchange failed or returned an undecodable error body
    #[error("Transport failure{}: {body}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Transport { status: Option<u16>, body: String },

    /// A state wait elapsed before its condition was met
    #[error(
        "Timed out after {timeout:?} waiting for {resource}{}",
        .last_state.as_ref().map(|s| format!(" (last observed state: {s})")).unwrap_or_default()
    )]
    ConvergenceTimeout {
        resource: String,
        timeout: Duration,
        last_state: Option<String>,
    },

    /// The caller supplied an invalid combination of parameters
    #[error("Invalid call: {0}")]
    CallerContractViolation(String),

    /// Client configuration could not be built
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A request could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Discriminant of [`Error`], compared by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Provider,
    MalformedEnvelope,
    Transport,
    ConvergenceTimeout,
    CallerContractViolation,
    InvalidConfig,
    Encode,
}

impl Error {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Provider(_) => ErrorKind::Provider,
            Error::MalformedEnvelope(_) => ErrorKind::MalformedEnvelope,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::ConvergenceTimeout { .. } => ErrorKind::ConvergenceTimeout,
            Error::CallerContractViolation(_) => ErrorKind::CallerContractViolation,
            Error::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Error::Encode(_) => ErrorKind::Encode,
        }
    }

    /// Provider error code, if the API returned one
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Provider(e) => Some(&e.code),
            _ => None,
        }
    }

    /// Last state observed before a wait timed out
    pub fn last_state(&self) -> Option<&str> {
        match self {
            Error::ConvergenceTimeout { last_state, .. } => last_state.as_deref(),
            _ => None,
        }
    }

    /// Build an error from a non-2xx response
    ///
    /// A well-formed error envelope becomes [`Error::Provider`]. Anything else is
    /// reported as [`Error::Transport`] with the raw status and body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match ProviderError::decode(status, body) {
            Some(e) => Error::Provider(e),
            None => Error::Transport {
                status: Some(status),
                body: String::from_utf8_lossy(body).into_owned(),
            },
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport {
            status: err.status().map(|s| s.as_u16()),
            body: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Error reported by the API itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    /// HTTP status the error arrived with
    pub status: u16,

    /// Short machine-readable code, e.g. `SERVER_STATE_ILLEGAL`
    pub code: String,

    /// Human-readable message
    pub message: String,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.code)
    }
}

impl std::error::Error for ProviderError {}

impl ProviderError {
    /// Decode an error envelope, nested under `"error"` or at the top level
    pub fn decode(status: u16, body: &[u8]) -> Option<Self> {
        #[derive(Deserialize)]
        struct Fields {
            error_code: String,
            error_message: String,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Envelope {
            Nested { error: Fields },
            Flat(Fields),
        }

        let fields = match serde_json::from_slice::<Envelope>(body).ok()? {
            Envelope::Nested { error } => error,
            Envelope::Flat(fields) => fields,
        };

        Some(Self {
            status,
            code: fields.error_code,
            message: fields.error_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_nested_error() {
        let body = br#"{"error":{"error_code":"SERVER_STATE_ILLEGAL","error_message":"msg"}}"#;
        let err = Error::from_response(409, body);

        assert_eq!(err.kind(), ErrorKind::Provider);
        assert_eq!(err.code(), Some("SERVER_STATE_ILLEGAL"));
        assert_eq!(err.to_string(), "msg (SERVER_STATE_ILLEGAL)");

        match err {
            Error::Provider(e) => {
                assert_eq!(e.status, 409);
                assert_eq!(e.message, "msg");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_flat_error() {
        let body = br#"{"error_code":"STORAGE_NOT_FOUND","error_message":"The storage does not exist."}"#;
        let err = Error::from_response(404, body);

        assert_eq!(err.code(), Some("STORAGE_NOT_FOUND"));
        assert_eq!(
            err.to_string(),
            "The storage does not exist. (STORAGE_NOT_FOUND)"
        );
    }

    #[test]
    fn test_non_envelope_body_is_transport_failure() {
        let err = Error::from_response(502, b"<html>Bad Gateway</html>");

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.code().is_none());
        match err {
            Error::Transport { status, body } => {
                assert_eq!(status, Some(502));
                assert_eq!(body, "<html>Bad Gateway</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_envelope_with_missing_code_is_transport_failure() {
        let err = Error::from_response(500, br#"{"error":{"error_message":"oops"}}"#);
        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_timeout_display_includes_last_state() {
        let err = Error::ConvergenceTimeout {
            resource: "server 0077".to_string(),
            timeout: Duration::from_secs(30),
            last_state: Some("maintenance".to_string()),
        };

        assert_eq!(err.kind(), ErrorKind::ConvergenceTimeout);
        assert_eq!(err.last_state(), Some("maintenance"));
        assert_eq!(
            err.to_string(),
            "Timed out after 30s waiting for server 0077 (last observed state: maintenance)"
        );
    }
}
