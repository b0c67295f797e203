//! Statements service.

use serde_json::Value;

use crate::api::body::RequestBody;
use crate::api::resource::{resource_service, Resource};
use crate::models::StatementOptions;
use crate::Result;

/// Service for monthly account statements.
pub struct StatementsService {
    resource: Resource,
}

resource_service!(StatementsService, STATEMENTS);

impl StatementsService {
    /// Retrieve the statement of `account` for the given month.
    ///
    /// Set `attach_pdf` in the options to receive the statement PDF.
    pub async fn retrieve(
        &self,
        link: &str,
        account: &str,
        year: i32,
        month: u32,
        options: StatementOptions,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("account", account)
            .field("year", year)
            .field("month", month)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}
