//! Credential session for Belvo API authentication.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;
use url::Url;

use crate::client::ClientConfig;
use crate::{Error, Result};

/// Path segment appended to the host URL to reach the API root.
pub const API_ROOT: &str = "api/";

/// Authenticated session for the Belvo API.
///
/// The session owns the API root URL, the secret key pair and the HTTP
/// transport. After a successful [`login`](Session::login) every request
/// built through the session carries HTTP Basic credentials.
///
/// # Thread Safety
///
/// The session is shared by every resource service of a client and is
/// read-mostly after login. `login` holds the credentials lock for the
/// whole login request, so concurrent logins run one after the other and
/// the last one wins.
pub struct Session {
    http: reqwest::Client,
    host_url: Url,
    base_url: Url,
    credentials: RwLock<Option<Credentials>>,
}

struct Credentials {
    key_id: String,
    key_password: SecretString,
    authenticated: bool,
}

impl Session {
    /// Create an unauthenticated session for the given host URL.
    ///
    /// The URL is normalized to the API root: any trailing `/` is dropped
    /// and `/api/` is appended, so `https://sandbox.belvo.com` becomes
    /// `https://sandbox.belvo.com/api/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is empty or cannot be parsed,
    /// and [`Error::Http`] if the HTTP transport cannot be built.
    pub fn new(url: &str, config: &ClientConfig) -> Result<Self> {
        let host_url = normalize_url(url)?;
        let base_url = host_url.join(API_ROOT)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            host_url,
            base_url,
            credentials: RwLock::new(None),
        })
    }

    /// Authenticate with the given secret key pair.
    ///
    /// Stores the credentials and verifies them with a GET on the API root.
    /// Returns `true` iff the API answered with a 2xx status. Any other
    /// outcome, including a transport failure, returns `false`.
    pub async fn login(
        &self,
        secret_key_id: impl Into<String>,
        secret_key_password: impl Into<String>,
    ) -> bool {
        let mut guard = self.credentials.write().await;
        let credentials = guard.insert(Credentials {
            key_id: secret_key_id.into(),
            key_password: SecretString::from(secret_key_password.into()),
            authenticated: false,
        });

        let response = self
            .http
            .get(self.base_url.clone())
            .basic_auth(
                &credentials.key_id,
                Some(credentials.key_password.expose_secret()),
            )
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_success() => {
                credentials.authenticated = true;
                tracing::debug!(url = %self.base_url, "authenticated with Belvo API");
                true
            }
            Ok(response) => {
                tracing::warn!(
                    url = %self.base_url,
                    status = response.status().as_u16(),
                    "login rejected"
                );
                false
            }
            Err(err) => {
                tracing::warn!(url = %self.base_url, error = %err, "login request failed");
                false
            }
        }
    }

    /// Check whether the last login succeeded.
    pub async fn is_authenticated(&self) -> bool {
        self.credentials
            .read()
            .await
            .as_ref()
            .is_some_and(|c| c.authenticated)
    }

    /// The normalized API root URL, always ending in `/api/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The URL the session was created with, ending in `/`.
    pub fn host_url(&self) -> &Url {
        &self.host_url
    }

    /// Resolve an endpoint path.
    ///
    /// Relative paths (`links/`) land under the API root. Paths starting
    /// with `/` (`/investments/portfolios/`) land under the host URL,
    /// keeping any path prefix it has.
    pub fn url(&self, path: &str) -> Result<Url> {
        match path.strip_prefix('/') {
            Some(path) => Ok(self.host_url.join(path)?),
            None => Ok(self.base_url.join(path)?),
        }
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Attach the session credentials to a request.
    pub(crate) async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.credentials.read().await.as_ref() {
            Some(c) => request.basic_auth(&c.key_id, Some(c.key_password.expose_secret())),
            None => request,
        }
    }

    /// The secret key pair, as required in widget token request bodies.
    pub(crate) async fn key_pair(&self) -> Option<(String, String)> {
        self.credentials.read().await.as_ref().map(|c| {
            (
                c.key_id.clone(),
                c.key_password.expose_secret().to_string(),
            )
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("key_password", &"[REDACTED]")
            .finish()
    }
}

fn normalize_url(url: &str) -> Result<Url> {
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::Config("You need to provide a URL.".to_string()));
    }

    let normalized = format!("{}/", url.trim_end_matches('/'));
    Url::parse(&normalized)
        .map_err(|e| Error::Config(format!("Invalid API URL {}: {}", url, e)))
}
