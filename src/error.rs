//! Error types for the Twitter client.

use thiserror::Error;

/// Errors produced while building, signing, or dispatching a request.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// OAuth signature generation failed
    #[error("OAuth error: {0}")]
    OAuth(String),

    /// The API rejected the request's credentials or signature
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The API returned a non-success status other than 401
    #[error("Twitter API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check whether this error is an authentication failure.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status carried by the error, if the API answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for Twitter operations.
pub type Result<T> = std::result::Result<T, Error>;
