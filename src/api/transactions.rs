//! Transactions service.

use serde_json::Value;

use crate::api::body::{today, RequestBody};
use crate::api::resource::{resource_service, Resource};
use crate::models::TransactionOptions;
use crate::Result;

/// Service for account transactions.
///
/// # Example
///
/// ```no_run
/// use belvo_rs::models::TransactionOptions;
///
/// # async fn example(client: belvo_rs::BelvoClient) -> belvo_rs::Result<()> {
/// let transactions = client
///     .transactions()
///     .retrieve(
///         "some-link-id",
///         "2024-01-01",
///         TransactionOptions {
///             account: Some("some-account-id".into()),
///             ..Default::default()
///         },
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TransactionsService {
    resource: Resource,
}

resource_service!(TransactionsService, TRANSACTIONS);

impl TransactionsService {
    /// Retrieve the transactions of a link from `date_from` onwards.
    ///
    /// `date_to` defaults to today (UTC) and `save_data` to `true`.
    pub async fn retrieve(
        &self,
        link: &str,
        date_from: &str,
        options: TransactionOptions,
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
