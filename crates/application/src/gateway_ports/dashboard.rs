use async_trait::async_trait;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{Activity, DashboardMetrics, QuickStats, RevenuePoint, TopTrainer};

/// Port for platform dashboard widget endpoints.
#[async_trait]
pub trait DashboardGateway: Send + Sync {
    /// Returns headline metrics.
    async fn metrics(&self, token: &AccessToken) -> AppResult<DashboardMetrics>;

    /// Returns recent activity.
    async fn activities(&self, token: &AccessToken) -> AppResult<Vec<Activity>>;

    /// Returns the best performing trainers.
    async fn top_trainers(&self, token: &AccessToken) -> AppResult<Vec<TopTrainer>>;

    /// Returns operational counters.
    async fn quick_stats(&self, token: &AccessToken) -> AppResult<QuickStats>;

    /// Returns the revenue series, optionally for a named period.
    async fn revenue_chart(
        &self,
        token: &AccessToken,
        period: Option<&str>,
    ) -> AppResult<Vec<RevenuePoint>>;
}
