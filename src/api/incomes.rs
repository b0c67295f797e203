//! Incomes service.

use serde_json::Value;

use crate::api::body::RequestBody;
use crate::api::resource::{resource_service, Resource};
use crate::models::IncomeOptions;
use crate::Result;

/// Service for income insights.
pub struct IncomesService {
    resource: Resource,
}

resource_service!(IncomesService, INCOMES);

impl IncomesService {
    /// Retrieve the incomes of a link, optionally bounded by
    /// `date_from`/`date_to` in the options.
    pub async fn retrieve(&self, link: &str, options: IncomeOptions) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}
