//! Generic resource accessor shared by every Belvo resource.
//!
//! A [`Resource`] is parameterized by a static [`ResourceDescriptor`] and
//! offers the operations every collection has in common: listing, detail,
//! deletion and session resumption. The per-resource services in this
//! module's siblings dereference to a `Resource` and add only their
//! create/update operations.

use std::sync::Arc;

use futures_util::{StreamExt, TryStreamExt};
use serde_json::Value;

use crate::api::body::RequestBody;
use crate::client::{resource_path, ClientInner, PaginatedStream, QueryParams};
use crate::{Error, Result};

/// Static description of a REST collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// Human-readable resource name, used in errors
    pub name: &'static str,
    /// Endpoint path, always ending in `/`. Relative to the API root, or to
    /// the client URL when it starts with `/`
    pub endpoint: &'static str,
    /// Whether paused data collection sessions can be resumed
    pub supports_resume: bool,
}

impl ResourceDescriptor {
    const fn new(name: &'static str, endpoint: &'static str, supports_resume: bool) -> Self {
        Self {
            name,
            endpoint,
            supports_resume,
        }
    }

    /// `links/`
    pub const LINKS: Self = Self::new("Link", "links/", true);
    /// `accounts/`
    pub const ACCOUNTS: Self = Self::new("Account", "accounts/", true);
    /// `transactions/`
    pub const TRANSACTIONS: Self = Self::new("Transaction", "transactions/", true);
    /// `owners/`
    pub const OWNERS: Self = Self::new("Owner", "owners/", true);
    /// `balances/`
    pub const BALANCES: Self = Self::new("Balance", "balances/", true);
    /// `statements/`
    pub const STATEMENTS: Self = Self::new("Statement", "statements/", true);
    /// `invoices/`
    pub const INVOICES: Self = Self::new("Invoice", "invoices/", true);
    /// `incomes/`
    pub const INCOMES: Self = Self::new("Income", "incomes/", true);
    /// `recurring-expenses/`
    pub const RECURRING_EXPENSES: Self =
        Self::new("RecurringExpenses", "recurring-expenses/", true);
    /// `risk-insights/`
    pub const RISK_INSIGHTS: Self = Self::new("RiskInsights", "risk-insights/", true);
    /// `financial-reports/`
    pub const FINANCIAL_REPORTS: Self =
        Self::new("FinancialReport", "financial-reports/", true);
    /// `tax-returns/`
    pub const TAX_RETURNS: Self = Self::new("TaxReturn", "tax-returns/", false);
    /// `tax-status/`
    pub const TAX_STATUS: Self = Self::new("TaxStatus", "tax-status/", false);
    /// `tax-compliance-status/`
    pub const TAX_COMPLIANCE_STATUS: Self =
        Self::new("TaxComplianceStatus", "tax-compliance-status/", false);
    /// `institutions/`
    pub const INSTITUTIONS: Self = Self::new("Institution", "institutions/", true);
    /// `token/`
    pub const WIDGET_TOKENS: Self = Self::new("WidgetToken", "token/", true);
    /// `/investments/portfolios/`, under the client URL rather than the API root
    pub const INVESTMENTS_PORTFOLIOS: Self =
        Self::new("InvestmentsPortfolio", "/investments/portfolios/", true);
    /// `/investments/transactions/`, under the client URL rather than the API root
    pub const INVESTMENTS_TRANSACTIONS: Self =
        Self::new("InvestmentsTransaction", "/investments/transactions/", true);
}

/// Generic accessor for one REST collection.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: belvo_rs::BelvoClient) -> belvo_rs::Result<()> {
/// // Pull mode: every link, across all pages
/// let links = client.links().list(None).await?;
///
/// // Push mode: one callback per link, nothing accumulated
/// client.links().for_each(None, |link| println!("{}", link["id"])).await?;
///
/// // Single resource
/// let link = client.links().detail("some-link-id", None).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Resource {
    inner: Arc<ClientInner>,
    descriptor: ResourceDescriptor,
}

impl Resource {
    pub(crate) fn new(inner: Arc<ClientInner>, descriptor: ResourceDescriptor) -> Self {
        Self { inner, descriptor }
    }

    /// The descriptor this accessor was built from.
    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// The endpoint path of the collection.
    pub fn endpoint(&self) -> &'static str {
        self.descriptor.endpoint
    }

    pub(crate) fn client(&self) -> &ClientInner {
        &self.inner
    }

    /// Lazily stream every result of the collection.
    ///
    /// Pages are fetched one at a time, as the stream is consumed.
    pub fn list_stream(&self, params: Option<QueryParams>) -> PaginatedStream<Value> {
        PaginatedStream::new(
            self.inner.clone(),
            self.descriptor.endpoint,
            params.unwrap_or_default(),
        )
    }

    /// Collect every result of the collection.
    ///
    /// All or nothing: if any page fails, no results are returned.
    pub async fn list(&self, params: Option<QueryParams>) -> Result<Vec<Value>> {
        self.list_stream(params).try_collect().await
    }

    /// Invoke `f` for every result of the collection, in order.
    ///
    /// If a page fails, the error is returned; items already passed to `f`
    /// stay delivered.
    pub async fn for_each<F>(&self, params: Option<QueryParams>, mut f: F) -> Result<()>
    where
        F: FnMut(Value),
    {
        let mut stream = self.list_stream(params);
        while let Some(item) = stream.next().await {
            f(item?);
        }
        Ok(())
    }

    /// Get a single resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Request`] for any non-2xx status, including 404.
    pub async fn detail(&self, id: impl AsRef<str>, params: Option<QueryParams>) -> Result<Value> {
        let path = resource_path(self.descriptor.endpoint, id.as_ref());
        self.inner.get(&path, &params.unwrap_or_default()).await
    }

    /// Delete a single resource.
    ///
    /// Returns `true` if the API accepted the deletion and `false` for any
    /// non-2xx status.
    pub async fn delete(&self, id: impl AsRef<str>) -> Result<bool> {
        self.inner.delete(self.descriptor.endpoint, id.as_ref()).await
    }

    /// Resume a data collection session paused by the API (HTTP 428).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOperation`] without contacting the API
    /// when the resource type cannot be resumed.
    pub async fn resume(
        &self,
        session_id: &str,
        token: &str,
        link: Option<&str>,
    ) -> Result<Value> {
        if !self.descriptor.supports_resume {
            return Err(Error::UnsupportedOperation {
                resource: self.descriptor.name,
                operation: "resume",
            });
        }

        let body = RequestBody::new()
            .field("session", session_id)
            .field("token", token)
            .field("link", link)
            .build();
        self.inner.patch(self.descriptor.endpoint, &body).await
    }
}

/// Implement construction and `Deref<Target = Resource>` for a service
/// struct holding a `resource: Resource` field.
macro_rules! resource_service {
    ($service:ident, $descriptor:ident) => {
        impl $service {
            pub(crate) fn new(inner: std::sync::Arc<$crate::client::ClientInner>) -> Self {
                Self {
                    resource: $crate::api::resource::Resource::new(
                        inner,
                        $crate::api::resource::ResourceDescriptor::$descriptor,
                    ),
                }
            }
        }

        impl std::ops::Deref for $service {
            type Target = $crate::api::resource::Resource;

            fn deref(&self) -> &Self::Target {
                &self.resource
            }
        }
    };
}

pub(crate) use resource_service;

impl std::fmt::Debug for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("descriptor", &self.descriptor)
            .finish()
    }
}
