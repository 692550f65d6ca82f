//! Search error types.
//!
//! This module defines the error types that can occur while building,
//! sending or decoding search calls. Nothing is retried or recovered
//! locally; every variant reaches the caller unchanged.

use thiserror::Error;

/// Errors that can occur during search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The service could not be reached.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The service refused the credentials.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The service answered with a non-success status, e.g. for a malformed
    /// placement or an out-of-range boost strength.
    #[error("Request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Failed to parse the response from the service.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an authentication error.
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::AuthenticationError(msg.into())
    }

    /// Create a rejection error.
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::SerializationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        Self::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let err = SearchError::rejected(400, "boost must be in [-1, 1]");
        assert_eq!(
            err.to_string(),
            "Request rejected with status 400: boost must be in [-1, 1]"
        );
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(
            SearchError::connection("refused"),
            SearchError::ConnectionError(_)
        ));
        assert!(matches!(
            SearchError::config("bad page size"),
            SearchError::ConfigError(_)
        ));
    }
}
