//! Owners service.

use serde_json::Value;

use crate::api::body::RequestBody;
use crate::api::resource::{resource_service, Resource};
use crate::models::OwnerOptions;
use crate::Result;

/// Service for the account holders of a link.
pub struct OwnersService {
    resource: Resource,
}

resource_service!(OwnersService, OWNERS);

impl OwnersService {
    /// Retrieve the owners of a link.
    pub async fn retrieve(&self, link: &str, options: OwnerOptions) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}
