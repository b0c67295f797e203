//! # belvo-rs
//!
//! An async Rust client for the Belvo open finance API.
//!
//! The client authenticates with a secret key pair and exposes one service
//! per Belvo resource: links, accounts, transactions, balances, owners,
//! statements, invoices, incomes, tax returns, tax status, tax compliance
//! status, institutions, widget tokens, recurring expenses, risk insights,
//! financial reports and investments.
//!
//! ## Features
//!
//! - **Authentication**: HTTP Basic with a secret key id and password
//! - **Pagination**: lazy streams, all-or-nothing collection, or per-item callbacks
//! - **Resource operations**: list, detail, delete, resume, and per-resource retrieval
//! - **Environments**: `sandbox`, `development` and `production` shortcuts, or any URL
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use belvo_rs::BelvoClient;
//! use belvo_rs::models::{AccountOptions, LinkOptions};
//!
//! #[tokio::main]
//! async fn main() -> belvo_rs::Result<()> {
//!     let client = BelvoClient::new("secret-key-id", "secret-key-password", Some("sandbox")).await?;
//!
//!     // Register a link
//!     let link = client
//!         .links()
//!         .create("erebor_mx_retail", "janedoe", "super-secret", LinkOptions::default())
//!         .await?;
//!     let link_id = link["id"].as_str().unwrap_or_default();
//!
//!     // Fetch its accounts
//!     let accounts = client.accounts().retrieve(link_id, AccountOptions::default()).await?;
//!     println!("{}", accounts);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use belvo_rs::BelvoClient;
//!
//! #[tokio::main]
//! async fn main() -> belvo_rs::Result<()> {
//!     let client = BelvoClient::from_env().await?;
//!
//!     // Pages are requested only as the stream is consumed
//!     let mut transactions = client.transactions().list_stream(None);
//!     while let Some(transaction) = transactions.next().await {
//!         println!("{}", transaction?["id"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Session;
pub use client::{BelvoClient, ClientConfig};
pub use error::{Error, Result};
pub use models::Environment;

/// Prelude module for convenient imports.
///
/// ```rust
/// use belvo_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{Resource, ResourceDescriptor};
    pub use crate::auth::Session;
    pub use crate::client::{BelvoClient, ClientConfig, PaginatedStream, QueryParams};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Environment
        Environment,
        // Enums
        AccessMode, InvoiceType, TaxReturnType,
        // Options
        AccountOptions, BalanceOptions, FinancialReportOptions, IncomeOptions,
        InvestmentsTransactionOptions, InvoiceOptions, LinkOptions, OwnerOptions,
        RetrieveOptions, StatementOptions, TaxComplianceStatusOptions, TaxReturnOptions,
        TaxStatusOptions, TransactionOptions, WidgetTokenOptions,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        assert_eq!(Environment::Production.api_base_url(), "https://api.belvo.com");
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://sandbox.belvo.com"
        );
    }
}
