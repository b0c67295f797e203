//! Invoices service.

use serde_json::Value;

use crate::api::body::RequestBody;
use crate::api::resource::{resource_service, Resource};
use crate::models::{InvoiceOptions, InvoiceType};
use crate::Result;

/// Service for fiscal invoices.
pub struct InvoicesService {
    resource: Resource,
}

resource_service!(InvoicesService, INVOICES);

impl InvoicesService {
    /// Retrieve the invoices of a fiscal link between two dates.
    ///
    /// Set `attach_xml` in the options to receive the invoice XML.
    pub async fn retrieve(
        &self,
        link: &str,
        date_from: &str,
        date_to: &str,
        invoice_type: InvoiceType,
        options: InvoiceOptions,
    ) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("date_from", date_from)
            .field("date_to", date_to)
            .field("type", serde_json::to_value(invoice_type)?)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}
