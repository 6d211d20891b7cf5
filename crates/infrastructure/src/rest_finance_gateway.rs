use async_trait::async_trait;
use coachdesk_application::{FinanceGateway, RemoteFilter};
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{FinanceSummary, Transaction};

use crate::platform_api_client::PlatformApiClient;

/// Platform-backed finance gateway.
#[derive(Clone)]
pub struct RestFinanceGateway {
    client: PlatformApiClient,
}

impl RestFinanceGateway {
    /// Creates a finance gateway.
    #[must_use]
    pub fn new(client: PlatformApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FinanceGateway for RestFinanceGateway {
    async fn list_transactions(
        &self,
        token: &AccessToken,
        filter: &RemoteFilter,
    ) -> AppResult<Vec<Transaction>> {
        self.client
            .get_list(token, &["finance", "transactions"], &filter.query_pairs())
            .await
    }

    async fn finance_summary(&self, token: &AccessToken) -> AppResult<FinanceSummary> {
        self.client
            .get_record(token, &["finance", "summary"], &[])
            .await
    }
}
