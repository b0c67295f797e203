//! HTTP client and request execution for the Belvo API.
//!
//! This module provides the main entry point [`BelvoClient`], its
//! configuration, and the lazy [`PaginatedStream`] used by list endpoints.
//!
//! # Example
//!
//! ```no_run
//! use belvo_rs::BelvoClient;
//!
//! # async fn example() -> belvo_rs::Result<()> {
//! let client = BelvoClient::new("secret-key-id", "secret-key-password", Some("sandbox")).await?;
//!
//! let institutions = client.institutions().list(None).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod paginated;

pub use config::{
    resolve_api_url, ClientConfig, API_URL_ENV, SECRET_KEY_ID_ENV, SECRET_KEY_PASSWORD_ENV,
};
pub use http::BelvoClient;
pub use paginated::{Page, PaginatedStream, QueryParams};
pub(crate) use http::{resource_path, ClientInner};
