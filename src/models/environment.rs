//! Belvo API environments and their host URLs.

use std::fmt;
use std::str::FromStr;

/// Well-known Belvo API environments.
///
/// # Example
///
/// ```
/// use belvo_rs::Environment;
///
/// let env: Environment = "sandbox".parse().unwrap();
/// assert_eq!(env.api_base_url(), "https://sandbox.belvo.com");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Sandbox environment with fake institutions.
    Sandbox,
    /// Development environment with real institutions and limited links.
    Development,
    /// Production environment.
    Production,
}

impl Environment {
    /// Get the host URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://sandbox.belvo.com",
            Environment::Development => "https://development.belvo.com",
            Environment::Production => "https://api.belvo.com",
        }
    }

    /// Resolve an environment name or a URL to a host URL.
    ///
    /// Known environment names (case-insensitive) map to their host; any
    /// other value is returned unchanged and treated as a URL.
    ///
    /// ```
    /// use belvo_rs::Environment;
    ///
    /// assert_eq!(Environment::resolve_url("PRODUCTION"), "https://api.belvo.com");
    /// assert_eq!(Environment::resolve_url("http://localhost:8000"), "http://localhost:8000");
    /// ```
    pub fn resolve_url(name_or_url: &str) -> String {
        match name_or_url.parse::<Environment>() {
            Ok(env) => env.api_base_url().to_string(),
            Err(_) => name_or_url.to_string(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            other => Err(crate::Error::Config(format!(
                "Unknown environment: {}",
                other
            ))),
        }
    }
}
