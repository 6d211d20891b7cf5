use async_trait::async_trait;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{FinanceSummary, Transaction};

use super::RemoteFilter;

/// Port for platform finance endpoints.
#[async_trait]
pub trait FinanceGateway: Send + Sync {
    /// Lists transactions matching the forwarded filter.
    async fn list_transactions(
        &self,
        token: &AccessToken,
        filter: &RemoteFilter,
    ) -> AppResult<Vec<Transaction>>;

    /// Returns finance totals.
    async fn finance_summary(&self, token: &AccessToken) -> AppResult<FinanceSummary>;
}
