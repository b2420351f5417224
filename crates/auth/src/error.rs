use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is missing or empty.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// Request parameters could not be URL-encoded.
    #[error("Failed to encode request parameters: {0}")]
    Encode(String),
}

impl From<serde_urlencoded::ser::Error> for AuthError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        AuthError::Encode(err.to_string())
    }
}
