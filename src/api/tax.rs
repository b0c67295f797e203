//! Fiscal services: tax returns, tax status and tax compliance status.
//!
//! None of these resources can be resumed; `resume` fails with
//! [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation)
//! before any request is made.

use serde_json::Value;

use crate::api::body::RequestBody;
use crate::api::resource::{resource_service, Resource};
use crate::models::{TaxComplianceStatusOptions, TaxReturnOptions, TaxReturnType, TaxStatusOptions};
use crate::Result;

/// Service for tax returns.
///
/// # Example
///
/// ```no_run
/// use belvo_rs::models::{TaxReturnOptions, TaxReturnType};
///
/// # async fn example(client: belvo_rs::BelvoClient) -> belvo_rs::Result<()> {
/// // Yearly returns are addressed by year
/// client
///     .tax_returns()
///     .retrieve("some-link-id", Some(2019), Some(2020), TaxReturnOptions::default())
///     .await?;
///
/// // Monthly returns by date
/// client
///     .tax_returns()
///     .retrieve(
///         "some-link-id",
///         None,
///         None,
///         TaxReturnOptions {
///             tax_return_type: Some(TaxReturnType::Monthly),
///             date_from: Some("2020-01-01".into()),
///             date_to: Some("2020-06-30".into()),
///             ..Default::default()
///         },
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TaxReturnsService {
    resource: Resource,
}

resource_service!(TaxReturnsService, TAX_RETURNS);

impl TaxReturnsService {
    /// Retrieve the tax returns of a fiscal link.
    ///
    /// Yearly requests send `year_from`/`year_to`. Monthly requests ignore
    /// the years and send `date_from`/`date_to` from the options.
    pub async fn retrieve(
        &self,
        link: &str,
        year_from: Option<i32>,
        year_to: Option<i32>,
        options: TaxReturnOptions,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?;

        let body = match options.tax_return_type {
            Some(TaxReturnType::Monthly) => body,
            _ => body.field("year_from", year_from).field("year_to", year_to),
        };

        self.client().post(self.endpoint(), &body.build()).await
    }
}

/// Service for the tax status of a fiscal link.
pub struct TaxStatusService {
    resource: Resource,
}

resource_service!(TaxStatusService, TAX_STATUS);

impl TaxStatusService {
    /// Retrieve the tax status of a fiscal link.
    pub async fn retrieve(&self, link: &str, options: TaxStatusOptions) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}

/// Service for the tax compliance status of a fiscal link.
pub struct TaxComplianceStatusService {
    resource: Resource,
}

resource_service!(TaxComplianceStatusService, TAX_COMPLIANCE_STATUS);

impl TaxComplianceStatusService {
    /// Retrieve the tax compliance status of a fiscal link.
    pub async fn retrieve(
        &self,
        link: &str,
        options: TaxComplianceStatusOptions,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}
