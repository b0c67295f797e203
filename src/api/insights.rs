//! Enrichment services computed by Belvo from link data: recurring
//! expenses, risk insights and financial reports.

use serde_json::Value;

use crate::api::body::RequestBody;
use crate::api::resource::{resource_service, Resource};
use crate::models::{FinancialReportOptions, RetrieveOptions};
use crate::Result;

/// Service for recurring expenses.
pub struct RecurringExpensesService {
    resource: Resource,
}

resource_service!(RecurringExpensesService, RECURRING_EXPENSES);

impl RecurringExpensesService {
    /// Retrieve the recurring expenses of a link.
    pub async fn retrieve(&self, link: &str, options: RetrieveOptions) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}

/// Service for risk insights.
pub struct RiskInsightsService {
    resource: Resource,
}

resource_service!(RiskInsightsService, RISK_INSIGHTS);

impl RiskInsightsService {
    /// Retrieve the risk insights of a link.
    pub async fn retrieve(&self, link: &str, options: RetrieveOptions) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}

/// Service for financial reports.
pub struct FinancialReportsService {
    resource: Resource,
}

resource_service!(FinancialReportsService, FINANCIAL_REPORTS);

impl FinancialReportsService {
    /// Retrieve the financial report of a link, optionally for one account.
    pub async fn retrieve(&self, link: &str, options: FinancialReportOptions) -> Result<Value> {
        let body = RequestBody::new()
            .field("link", link)
            .field("save_data", true)
            .merge(&options)?
            .build();

        self.client().post(self.endpoint(), &body).await
    }
}
