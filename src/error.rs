//! Error types for the Belvo API client.
//!
//! Every fallible operation in this crate returns [`Result`], whose error
//! side is the single [`Error`] enum. The four kinds that make up the
//! client's contract are:
//!
//! - [`Error::Config`]: the client could not be configured (no URL, bad URL)
//! - [`Error::Authentication`]: the login handshake did not succeed
//! - [`Error::Request`]: the API answered a data operation with a non-2xx status
//! - [`Error::UnsupportedOperation`]: the resource type does not offer the operation
//!
//! Transport-level failures from the HTTP engine, JSON decoding and URL
//! parsing are wrapped as well.

use thiserror::Error;

/// A specialized `Result` type for Belvo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Belvo API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The client could not be configured.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The login handshake did not return a successful status.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The API returned a non-2xx response.
    #[error("{message} (status={status_code}): {detail}")]
    Request {
        /// Short description, always `"Request error"` for API failures
        message: String,
        /// HTTP status code returned by the API
        status_code: u16,
        /// Raw response body
        detail: String,
    },

    /// The operation is not available for this resource type.
    #[error("{resource} does not support {operation}")]
    UnsupportedOperation {
        /// Name of the resource type
        resource: &'static str,
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Build the error returned for any non-2xx API response.
    pub(crate) fn from_response(status_code: u16, detail: impl Into<String>) -> Self {
        Error::Request {
            message: "Request error".to_string(),
            status_code,
            detail: detail.into(),
        }
    }

    /// HTTP status code carried by a [`Error::Request`], if any.
    ///
    /// # Example
    ///
    /// ```
    /// use belvo_rs::Error;
    ///
    /// fn report(err: &Error) {
    ///     if let Some(code) = err.status_code() {
    ///         eprintln!("API answered with {}", code);
    ///     }
    /// }
    /// ```
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Request { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Raw response body carried by a [`Error::Request`], if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Request { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) => true,
            Error::Request { status_code, .. } => *status_code == 401,
            _ => false,
        }
    }

    /// Returns `true` if the API could not find the requested resource.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Request { status_code, .. } => (400..500).contains(status_code),
            Error::Config(_) | Error::UnsupportedOperation { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Request { status_code, .. } if *status_code >= 500)
    }
}
