//! API services for Belvo resources.
//!
//! Every service wraps a [`Resource`] and dereferences to it, so the generic
//! operations (`list`, `list_stream`, `for_each`, `detail`, `delete`,
//! `resume`) are available on all of them. Services add the create and
//! retrieve operations specific to their resource.

mod accounts;
mod balances;
mod body;
mod incomes;
mod insights;
mod institutions;
mod investments;
mod invoices;
mod links;
mod owners;
mod resource;
mod statements;
mod tax;
mod transactions;
mod widget_tokens;

pub use accounts::AccountsService;
pub use balances::BalancesService;
pub use body::clean;
pub use incomes::IncomesService;
pub use insights::{FinancialReportsService, RecurringExpensesService, RiskInsightsService};
pub use institutions::InstitutionsService;
pub use investments::{InvestmentsPortfoliosService, InvestmentsTransactionsService};
pub use invoices::InvoicesService;
pub use links::LinksService;
pub use owners::OwnersService;
pub use resource::{Resource, ResourceDescriptor};
pub use statements::StatementsService;
pub use tax::{TaxComplianceStatusService, TaxReturnsService, TaxStatusService};
pub use transactions::TransactionsService;
pub use widget_tokens::{WidgetTokensService, DEFAULT_WIDGET_SCOPES};
