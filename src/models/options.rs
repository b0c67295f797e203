//! Optional request fields, one structure per resource operation.
//!
//! Every structure enumerates the options its operation recognizes. Unset
//! fields are never serialized, so they can neither override a default
//! computed by the operation nor reach the server as an explicit `null`.
//!
//! ```
//! use belvo_rs::models::TransactionOptions;
//!
//! let options = TransactionOptions {
//!     date_to: Some("2024-01-31".into()),
//!     save_data: Some(false),
//!     ..Default::default()
//! };
//! assert_eq!(options.save_data, Some(false));
//! ```

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use super::enums::{AccessMode, TaxReturnType};

/// Options for creating, updating and patching links.
#[derive(Debug, Default, Clone, Serialize)]
pub struct LinkOptions {
    /// Access mode; `create` defaults it to [`AccessMode::Single`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_mode: Option<AccessMode>,
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Custom encryption key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
    /// Type of document used as username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_type: Option<String>,
    /// Second username, for institutions that require one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username2: Option<String>,
    /// Third username, for institutions that require one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username3: Option<String>,
    /// Second password, for institutions that require one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password2: Option<String>,
    /// Path to a certificate file, sent base64-encoded
    #[serde(skip)]
    pub certificate: Option<PathBuf>,
    /// Path to a private key file, sent base64-encoded
    #[serde(skip)]
    pub private_key: Option<PathBuf>,
}

/// Options for retrieving accounts.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AccountOptions {
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Custom encryption key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
}

/// Options for retrieving transactions.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TransactionOptions {
    /// End of the date range (`YYYY-MM-DD`, defaults to today)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    /// Restrict to one account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Custom encryption key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
}

/// Options for retrieving owners.
#[derive(Debug, Default, Clone, Serialize)]
pub struct OwnerOptions {
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Custom encryption key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
}

/// Options for retrieving balances.
pub type BalanceOptions = TransactionOptions;

/// Options for retrieving statements.
#[derive(Debug, Default, Clone, Serialize)]
pub struct StatementOptions {
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Custom encryption key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
    /// Include the statement PDF in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_pdf: Option<bool>,
}

/// Options for retrieving incomes.
#[derive(Debug, Default, Clone, Serialize)]
pub struct IncomeOptions {
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
    /// Start of the date range (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// End of the date range (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// Options for retrieving invoices.
#[derive(Debug, Default, Clone, Serialize)]
pub struct InvoiceOptions {
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Custom encryption key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
    /// Include the invoice XML in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_xml: Option<bool>,
}

/// Options for retrieving tax returns.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TaxReturnOptions {
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Custom encryption key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
    /// Include the tax return PDF in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_pdf: Option<bool>,
    /// Yearly (default) or monthly returns
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tax_return_type: Option<TaxReturnType>,
    /// Start of the date range, monthly returns only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    /// End of the date range, monthly returns only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// Options for retrieving tax status or tax compliance status.
#[derive(Debug, Default, Clone, Serialize)]
pub struct TaxStatusOptions {
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Custom encryption key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<String>,
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
    /// Include the document PDF in the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_pdf: Option<bool>,
}

/// Options for retrieving tax compliance status.
pub type TaxComplianceStatusOptions = TaxStatusOptions;

/// Options for operations that only take a token and the persistence flag:
/// investments portfolios, recurring expenses and risk insights.
#[derive(Debug, Default, Clone, Serialize)]
pub struct RetrieveOptions {
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
}

/// Options for retrieving investments transactions.
#[derive(Debug, Default, Clone, Serialize)]
pub struct InvestmentsTransactionOptions {
    /// End of the date range (`YYYY-MM-DD`, defaults to today)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    /// OTP token required by the institution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
}

/// Options for retrieving financial reports.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FinancialReportOptions {
    /// Restrict the report to one account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Persist the retrieved data (defaults to `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_data: Option<bool>,
}

/// Options for creating widget tokens.
#[derive(Debug, Default, Clone, Serialize)]
pub struct WidgetTokenOptions {
    /// Comma-separated scopes (defaults to
    /// `read_institutions,write_links,read_links,delete_links`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<String>,
    /// Link the token is bound to, for update flows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_id: Option<String>,
    /// Widget branding and callback configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget: Option<Value>,
}
