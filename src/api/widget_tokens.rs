//! Widget access tokens.

use serde_json::Value;

use crate::api::body::RequestBody;
use crate::api::resource::{resource_service, Resource};
use crate::models::WidgetTokenOptions;
use crate::{Error, Result};

/// Scopes requested when none are given.
pub const DEFAULT_WIDGET_SCOPES: &str = "read_institutions,write_links,read_links,delete_links";

/// Service for creating access tokens for the Belvo Connect widget.
pub struct WidgetTokensService {
    resource: Resource,
}

resource_service!(WidgetTokensService, WIDGET_TOKENS);

impl WidgetTokensService {
    /// Create a widget access token with the session's secret key pair.
    ///
    /// `scopes` defaults to [`DEFAULT_WIDGET_SCOPES`]. The response holds an
    /// `access` and a `refresh` token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the session holds no key pair.
    pub async fn create(&self, options: WidgetTokenOptions) -> Result<Value> {
        let session = &self.client().session;
        let (key_id, key_password) = session
            .key_pair()
            .await
            .ok_or_else(|| Error::Authentication("Session has no credentials.".to_string()))?;

        let body = RequestBody::new()
            .field("id", key_id)
            .field("password", key_password)
            .field("scopes", DEFAULT_WIDGET_SCOPES)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}
