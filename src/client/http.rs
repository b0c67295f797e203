//! HTTP client implementation for the Belvo API.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::api::{
    AccountsService, BalancesService, FinancialReportsService, IncomesService,
    InstitutionsService, InvestmentsPortfoliosService, InvestmentsTransactionsService,
    InvoicesService, LinksService, OwnersService, RecurringExpensesService,
    RiskInsightsService, StatementsService, TaxComplianceStatusService, TaxReturnsService,
    TaxStatusService, TransactionsService, WidgetTokensService,
};
use crate::auth::Session;
use crate::{Error, Result};

use super::config::{resolve_api_url, ClientConfig, SECRET_KEY_ID_ENV, SECRET_KEY_PASSWORD_ENV};

/// The main client for interacting with the Belvo API.
///
/// Constructing a client resolves the API URL, opens a [`Session`] and logs
/// in. Each resource is then reached through a service accessor; services
/// are cheap to create and share the client's session.
///
/// # Example
///
/// ```no_run
/// use belvo_rs::BelvoClient;
///
/// # async fn example() -> belvo_rs::Result<()> {
/// let client = BelvoClient::new("secret-key-id", "secret-key-password", Some("sandbox")).await?;
///
/// let links = client.links().list(None).await?;
/// println!("{} links", links.len());
/// # Ok(())
/// # }
/// ```
pub struct BelvoClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl BelvoClient {
    /// Create a client and log in.
    ///
    /// `url` may be a URL or an environment name. When `None`, the
    /// `BELVO_API_URL` environment variable is used.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if no URL can be resolved
    /// - [`Error::Authentication`] if the credentials are rejected
    pub async fn new(
        secret_key_id: impl Into<String>,
        secret_key_password: impl Into<String>,
        url: Option<&str>,
    ) -> Result<Self> {
        Self::with_config(
            secret_key_id,
            secret_key_password,
            url,
            ClientConfig::default(),
        )
        .await
    }

    /// Create a client with custom configuration and log in.
    pub async fn with_config(
        secret_key_id: impl Into<String>,
        secret_key_password: impl Into<String>,
        url: Option<&str>,
        config: ClientConfig,
    ) -> Result<Self> {
        let url = resolve_api_url(url)?;
        let session = Session::new(&url, &config)?;

        if !session.login(secret_key_id, secret_key_password).await {
            return Err(Error::Authentication("Login failed.".to_string()));
        }

        Ok(Self::with_session(session, config))
    }

    /// Create a client from `BELVO_SECRET_KEY_ID`,
    /// `BELVO_SECRET_KEY_PASSWORD` and `BELVO_API_URL`.
    pub async fn from_env() -> Result<Self> {
        let key_id = std::env::var(SECRET_KEY_ID_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", SECRET_KEY_ID_ENV)))?;
        let key_password = std::env::var(SECRET_KEY_PASSWORD_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", SECRET_KEY_PASSWORD_ENV)))?;
        Self::new(key_id, key_password, None).await
    }

    /// Wrap an existing session.
    ///
    /// The session is used as is; callers are expected to have logged in.
    pub fn with_session(session: Session, config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(ClientInner { session, config }),
        }
    }

    /// Get the links service.
    pub fn links(&self) -> LinksService {
        LinksService::new(self.inner.clone())
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the transactions service.
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }

    /// Get the owners service.
    pub fn owners(&self) -> OwnersService {
        OwnersService::new(self.inner.clone())
    }

    /// Get the balances service.
    pub fn balances(&self) -> BalancesService {
        BalancesService::new(self.inner.clone())
    }

    /// Get the statements service.
    pub fn statements(&self) -> StatementsService {
        StatementsService::new(self.inner.clone())
    }

    /// Get the invoices service.
    pub fn invoices(&self) -> InvoicesService {
        InvoicesService::new(self.inner.clone())
    }

    /// Get the incomes service.
    pub fn incomes(&self) -> IncomesService {
        IncomesService::new(self.inner.clone())
    }

    /// Get the tax returns service.
    pub fn tax_returns(&self) -> TaxReturnsService {
        TaxReturnsService::new(self.inner.clone())
    }

    /// Get the tax status service.
    pub fn tax_status(&self) -> TaxStatusService {
        TaxStatusService::new(self.inner.clone())
    }

    /// Get the tax compliance status service.
    pub fn tax_compliance_status(&self) -> TaxComplianceStatusService {
        TaxComplianceStatusService::new(self.inner.clone())
    }

    /// Get the institutions service.
    pub fn institutions(&self) -> InstitutionsService {
        InstitutionsService::new(self.inner.clone())
    }

    /// Get the widget tokens service.
    pub fn widget_tokens(&self) -> WidgetTokensService {
        WidgetTokensService::new(self.inner.clone())
    }

    /// Get the recurring expenses service.
    pub fn recurring_expenses(&self) -> RecurringExpensesService {
        RecurringExpensesService::new(self.inner.clone())
    }

    /// Get the risk insights service.
    pub fn risk_insights(&self) -> RiskInsightsService {
        RiskInsightsService::new(self.inner.clone())
    }

    /// Get the financial reports service.
    pub fn financial_reports(&self) -> FinancialReportsService {
        FinancialReportsService::new(self.inner.clone())
    }

    /// Get the investments portfolios service.
    pub fn investments_portfolios(&self) -> InvestmentsPortfoliosService {
        InvestmentsPortfoliosService::new(self.inner.clone())
    }

    /// Get the investments transactions service.
    pub fn investments_transactions(&self) -> InvestmentsTransactionsService {
        InvestmentsTransactionsService::new(self.inner.clone())
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Build an authorized request for an endpoint path.
    async fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.session.url(path)?;
        tracing::debug!(%method, %url, "sending request");
        let request = self.session.http().request(method, url);
        Ok(self.session.authorize(request).await)
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self
            .request(Method::GET, path)
            .await?
            .query(query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::POST, path)
            .await?
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a PUT request on a single resource.
    pub(crate) async fn put<T, B>(&self, path: &str, id: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::PUT, &resource_path(path, id))
            .await?
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a PATCH request.
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .request(Method::PATCH, path)
            .await?
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request on the token sub-resource of a single resource.
    pub(crate) async fn post_token<T, B>(&self, path: &str, id: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let token_path = format!("{}token/", resource_path(path, id));
        self.post(&token_path, body).await
    }

    /// Delete a single resource.
    ///
    /// Returns whether the API answered with a 2xx status; a non-2xx status
    /// is not an error here.
    pub(crate) async fn delete(&self, path: &str, id: &str) -> Result<bool> {
        let response = self
            .request(Method::DELETE, &resource_path(path, id))
            .await?
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "delete was not accepted");
        }
        Ok(status.is_success())
    }

    /// Handle an API response.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            return Err(Error::from_response(status.as_u16(), body));
        }

        if body.trim().is_empty() {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Path of a single resource: `path + id + "/"`.
pub(crate) fn resource_path(path: &str, id: &str) -> String {
    format!("{}{}/", path, id)
}

impl Clone for BelvoClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for BelvoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BelvoClient")
            .field("session", &self.inner.session)
            .field("config", &self.inner.config)
            .finish()
    }
}
