use async_trait::async_trait;
use coachdesk_application::DashboardGateway;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{Activity, DashboardMetrics, QuickStats, RevenuePoint, TopTrainer};

use crate::platform_api_client::PlatformApiClient;

/// Platform-backed dashboard widget gateway.
#[derive(Clone)]
pub struct RestDashboardGateway {
    client: PlatformApiClient,
}

impl RestDashboardGateway {
    /// Creates a dashboard gateway.
    #[must_use]
    pub fn new(client: PlatformApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardGateway for RestDashboardGateway {
    async fn metrics(&self, token: &AccessToken) -> AppResult<DashboardMetrics> {
        self.client
            .get_record(token, &["dashboard", "metrics"], &[])
            .await
    }

    async fn activities(&self, token: &AccessToken) -> AppResult<Vec<Activity>> {
        self.client
            .get_list(token, &["dashboard", "activities"], &[])
            .await
    }

    async fn top_trainers(&self, token: &AccessToken) -> AppResult<Vec<TopTrainer>> {
        self.client
            .get_list(token, &["dashboard", "top-trainers"], &[])
            .await
    }

    async fn quick_stats(&self, token: &AccessToken) -> AppResult<QuickStats> {
        self.client
            .get_record(token, &["dashboard", "quick-stats"], &[])
            .await
    }

    async fn revenue_chart(
        &self,
        token: &AccessToken,
        period: Option<&str>,
    ) -> AppResult<Vec<RevenuePoint>> {
        let query: Vec<(&str, &str)> = period
            .map(|period| ("period", period))
            .into_iter()
            .collect();
        self.client
            .get_list(token, &["dashboard", "revenue-chart"], &query)
            .await
    }
}
