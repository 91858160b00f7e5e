//! Error types for Verify API calls.
//!
//! A non-zero `status` in a response payload is not an error here: it is
//! returned to the caller inside the typed response. `VerifyError` covers
//! only failures to get a usable payload at all.

use thiserror::Error;

use crate::domain::wire::Operation;

/// Failure of a Verify API call
#[derive(Error, Debug)]
pub enum VerifyError {
    /// Transport failure or non-success HTTP status
    #[error("HTTP client error{}: {message}", status.map(|s| format!(" (status {})", s)).unwrap_or_default())]
    Client {
        /// HTTP status code, absent when no response was received
        status: Option<u16>,
        message: String,
    },

    /// The payload did not match the expected response shape
    #[error("Failed to parse {operation} response: {source}")]
    ResponseParse {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl VerifyError {
    /// Client error without an HTTP status (connect failure, timeout, ...)
    pub fn transport(message: impl Into<String>) -> Self {
        VerifyError::Client {
            status: None,
            message: message.into(),
        }
    }

    /// Client error for a non-success HTTP status
    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        VerifyError::Client {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn response_parse(operation: Operation, source: serde_json::Error) -> Self {
        VerifyError::ResponseParse { operation, source }
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            VerifyError::Client { status, .. } => *status,
            VerifyError::ResponseParse { .. } => None,
        }
    }

    pub fn is_client(&self) -> bool {
        matches!(self, VerifyError::Client { .. })
    }

    pub fn is_response_parse(&self) -> bool {
        matches!(self, VerifyError::ResponseParse { .. })
    }
}

pub type VerifyResult<T> = Result<T, VerifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display() {
        let err = VerifyError::http_status(503, "Service Unavailable");
        assert_eq!(err.to_string(), "HTTP client error (status 503): Service Unavailable");
        assert_eq!(err.status(), Some(503));
        assert!(err.is_client());

        let err = VerifyError::transport("connection refused");
        assert_eq!(err.to_string(), "HTTP client error: connection refused");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_response_parse_error() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = VerifyError::response_parse(Operation::Search, source);

        assert!(err.is_response_parse());
        assert_eq!(err.status(), None);
        assert!(err.to_string().starts_with("Failed to parse search response"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
