//! Client configuration options.

use std::time::Duration;

use crate::{Environment, Error, Result};

/// Environment variable holding the API URL or environment name.
pub const API_URL_ENV: &str = "BELVO_API_URL";
/// Environment variable holding the secret key id.
pub const SECRET_KEY_ID_ENV: &str = "BELVO_SECRET_KEY_ID";
/// Environment variable holding the secret key password.
pub const SECRET_KEY_PASSWORD_ENV: &str = "BELVO_SECRET_KEY_PASSWORD";

/// Configuration for the Belvo client.
///
/// # Example
///
/// ```
/// use belvo_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout, enforced by the HTTP transport
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("belvo-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Resolve the host URL for a client.
///
/// An explicit argument wins; otherwise [`API_URL_ENV`] is read. Either may
/// hold an environment name (`sandbox`, `development`, `production`) or a
/// URL.
///
/// # Errors
///
/// Returns [`Error::Config`] when neither source yields a value.
pub fn resolve_api_url(url: Option<&str>) -> Result<String> {
    let raw = match url {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::Config("You need to provide a URL.".to_string()))?,
    };
    Ok(Environment::resolve_url(raw.trim()))
}
