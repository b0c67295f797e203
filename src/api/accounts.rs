//! Accounts service.

use serde_json::Value;

use crate::api::body::RequestBody;
use crate::api::resource::{resource_service, Resource};
use crate::models::AccountOptions;
use crate::Result;

/// Service for bank accounts of a link.
pub struct AccountsService {
    resource: Resource,
}

resource_service!(AccountsService, ACCOUNTS);

impl AccountsService {
    /// Retrieve the accounts of a link.
    ///
    /// `save_data` defaults to `true`.
    pub async fn retrieve(&self, link: &str, options: AccountOptions) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}
