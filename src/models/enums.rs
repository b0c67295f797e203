//! Enumeration types used in request bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How often Belvo refreshes the data of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Ad hoc, one-time requests.
    #[default]
    Single,
    /// Belvo refreshes the link data periodically.
    Recurrent,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Single => write!(f, "single"),
            AccessMode::Recurrent => write!(f, "recurrent"),
        }
    }
}

/// Granularity of a tax return request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxReturnType {
    /// Yearly tax returns, addressed by `year_from`/`year_to`.
    #[default]
    Yearly,
    /// Monthly tax returns, addressed by `date_from`/`date_to`.
    Monthly,
}

/// Direction of an invoice relative to the link owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceType {
    /// Invoices received by the link owner.
    Inflow,
    /// Invoices issued by the link owner.
    Outflow,
}
