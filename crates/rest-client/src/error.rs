//! REST client error types.

use thiserror::Error;

/// Transport-level errors from REST API calls.
///
/// These cover everything below the JSON layer. Decoding the body and
/// recognising exchange error payloads is left to the caller.
#[derive(Debug, Error)]
pub enum RestError {
    /// Non-success HTTP status whose body the caller could not interpret.
    #[error("HTTP error: {status} - {message}")]
    HttpError {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout")]
    Timeout,

    /// Connection error (network issue).
    #[error("Connection error: {0}")]
    Connection(String),

    /// Failed to build the HTTP request.
    #[error("Request build error: {0}")]
    RequestBuild(String),
}

impl RestError {
    /// Check if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, RestError::Timeout)
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RestError::Timeout
        } else if err.is_builder() {
            RestError::RequestBuild(err.to_string())
        } else if let Some(status) = err.status() {
            RestError::HttpError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            RestError::Connection(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = RestError::HttpError {
            status: 418,
            message: "teapot".into(),
        };
        assert_eq!(err.to_string(), "HTTP error: 418 - teapot");
        assert!(RestError::Timeout.is_timeout());
    }
}
