//! Institutions service.

use crate::api::resource::{resource_service, Resource};

/// Service for the institutions Belvo connects to.
///
/// Only the generic operations apply.
///
/// # Example
///
/// ```no_run
/// use belvo_rs::client::QueryParams;
///
/// # async fn example(client: belvo_rs::BelvoClient) -> belvo_rs::Result<()> {
/// let params: QueryParams = vec![("country_code".into(), "MX".into())];
/// let institutions = client.institutions().list(Some(params)).await?;
/// # Ok(())
/// # }
/// ```
pub struct InstitutionsService {
    resource: Resource,
}

resource_service!(InstitutionsService, INSTITUTIONS);
