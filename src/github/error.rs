//! Error types exposed by the GitHub discovery layer.

use thiserror::Error;

/// Errors surfaced while communicating with GitHub or loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiscoveryError {
    /// GitHub answered with a non-success HTTP status.
    #[error("GitHub returned {status}: {message}")]
    Http {
        /// HTTP status code of the failed response.
        status: u16,
        /// Response body or summary describing the failure.
        message: String,
    },

    /// Anything that is not an HTTP-level failure: transport errors,
    /// unparseable bodies, client construction failures.
    #[error("unexpected error: {message}")]
    Unexpected {
        /// Detail from the underlying failure.
        message: String,
    },

    /// Configuration could not be loaded or validated.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl DiscoveryError {
    /// Returns the HTTP status associated with the error.
    ///
    /// Non-HTTP failures are normalised to status 0 so callers can treat
    /// every failure uniformly.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Http { status, .. } => *status,
            Self::Unexpected { .. } | Self::Configuration { .. } | Self::Io { .. } => 0,
        }
    }
}
