//! Links service: end-user credentials registered with an institution.

use serde_json::Value;

use crate::api::body::{read_file_to_b64, RequestBody};
use crate::api::resource::{resource_service, Resource};
use crate::client::resource_path;
use crate::models::LinkOptions;
use crate::Result;

/// Service for link operations.
///
/// Dereferences to [`Resource`] for `list`, `detail`, `delete` and `resume`.
///
/// # Example
///
/// ```no_run
/// use belvo_rs::models::{AccessMode, LinkOptions};
///
/// # async fn example(client: belvo_rs::BelvoClient) -> belvo_rs::Result<()> {
/// let link = client
///     .links()
///     .create(
///         "erebor_mx_retail",
///         "janedoe",
///         "secret",
///         LinkOptions {
///             access_mode: Some(AccessMode::Recurrent),
///             ..Default::default()
///         },
///     )
///     .await?;
/// println!("Created link {}", link["id"]);
/// # Ok(())
/// # }
/// ```
pub struct LinksService {
    resource: Resource,
}

resource_service!(LinksService, LINKS);

impl LinksService {
    /// Register a new link.
    ///
    /// `access_mode` defaults to `single`. Certificate and private key paths
    /// in the options are read and sent base64-encoded.
    pub async fn create(
        &self,
        institution: &str,
        username: &str,
        password: &str,
        options: LinkOptions,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .field("institution", institution)
            .field("username", username)
            .field("password", password)
            .field(
                "access_mode",
                options.access_mode.unwrap_or_default().to_string(),
            )
            .merge(&options)?
            .field("certificate", read_file_to_b64(options.certificate.as_deref()))
            .field("private_key", read_file_to_b64(options.private_key.as_deref()))
            .build();

        self.client().post(self.endpoint(), &body).await
    }

    /// Update the credentials of an existing link.
    pub async fn update(
        &self,
        id: impl AsRef<str>,
        password: Option<&str>,
        password2: Option<&str>,
        options: LinkOptions,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .field("password", password)
            .field("password2", password2)
            .merge(&options)?
            .field("certificate", read_file_to_b64(options.certificate.as_deref()))
            .field("private_key", read_file_to_b64(options.private_key.as_deref()))
            .build();

        self.client().put(self.endpoint(), id.as_ref(), &body).await
    }

    /// Change the access mode of an existing link.
    ///
    /// Only the options that are set are sent; an unset `access_mode`
    /// leaves the link's current mode unchanged.
    pub async fn patch(&self, id: impl AsRef<str>, options: LinkOptions) -> Result<Value> {
        let body = RequestBody::new().merge(&options)?.build();

        let path = resource_path(self.endpoint(), id.as_ref());
        self.client().patch(&path, &body).await
    }

    /// Create a short-lived token with the given comma-separated scopes.
    ///
    /// The response holds an `access` and a `refresh` token.
    pub async fn token(&self, id: impl AsRef<str>, scopes: &str) -> Result<Value> {
        let body = RequestBody::new().field("scopes", scopes).build();
        self.client()
            .post_token(self.endpoint(), id.as_ref(), &body)
            .await
    }
}
