//! Balances service.

use serde_json::Value;

use crate::api::body::{today, RequestBody};
use crate::api::resource::{resource_service, Resource};
use crate::models::BalanceOptions;
use crate::Result;

/// Service for account balances.
pub struct BalancesService {
    resource: Resource,
}

resource_service!(BalancesService, BALANCES);

impl BalancesService {
    /// Retrieve the balances of a link from `date_from` onwards.
    ///
    /// `date_to` defaults to today (UTC).
    pub async fn retrieve(
        &self,
        link: &str,
        date_from: &str,
        options: BalanceOptions,
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
