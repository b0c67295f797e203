//! Investments services.
//!
//! These endpoints live under the client URL, next to `/api/` rather than
//! under it: `https://host/prefix` serves them from
//! `https://host/prefix/investments/`.

use serde_json::Value;

use crate::api::body::{today, RequestBody};
use crate::api::resource::{resource_service, Resource};
use crate::models::{InvestmentsTransactionOptions, RetrieveOptions};
use crate::Result;

/// Service for investment portfolios.
pub struct InvestmentsPortfoliosService {
    resource: Resource,
}

resource_service!(InvestmentsPortfoliosService, INVESTMENTS_PORTFOLIOS);

impl InvestmentsPortfoliosService {
    /// Retrieve the portfolios of an investments link.
    pub async fn retrieve(&self, link: &str, options: RetrieveOptions) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}

/// Service for investment transactions.
pub struct InvestmentsTransactionsService {
    resource: Resource,
}

resource_service!(InvestmentsTransactionsService, INVESTMENTS_TRANSACTIONS);

impl InvestmentsTransactionsService {
    /// Retrieve the investment transactions of a link from `date_from`
    /// onwards; `date_to` defaults to today (UTC).
    pub async fn retrieve(
        &self,
        link: &str,
        date_from: &str,
        options: InvestmentsTransactionOptions,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("date_from", date_from)
            .field("date_to", today())
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}
