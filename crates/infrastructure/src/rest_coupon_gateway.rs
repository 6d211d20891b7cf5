use async_trait::async_trait;
use coachdesk_application::{CouponGateway, RemoteFilter};
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{AnalyticsRange, Coupon, CouponAnalytics, CouponStats, RecordId};
use reqwest::Method;

use crate::platform_api_client::PlatformApiClient;

/// Platform-backed coupon gateway.
#[derive(Clone)]
pub struct RestCouponGateway {
    client: PlatformApiClient,
}

impl RestCouponGateway {
    /// Creates a coupon gateway.
    #[must_use]
    pub fn new(client: PlatformApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CouponGateway for RestCouponGateway {
    async fn list_coupons(
        &self,
        token: &AccessToken,
        filter: &RemoteFilter,
    ) -> AppResult<Vec<Coupon>> {
        self.client
            .get_list(token, &["coupons"], &filter.query_pairs())
            .await
    }

    async fn coupon_stats(&self, token: &AccessToken) -> AppResult<CouponStats> {
        self.client.get_record(token, &["coupons", "stats"], &[]).await
    }

    async fn coupon_analytics(
        &self,
        token: &AccessToken,
        range: AnalyticsRange,
    ) -> AppResult<CouponAnalytics> {
        self.client
            .get_record(
                token,
                &["coupons", "analytics"],
                &[("range", range.as_str())],
            )
            .await
    }

    async fn get_coupon(&self, token: &AccessToken, id: &RecordId) -> AppResult<Coupon> {
        self.client
            .get_record(token, &["coupons", id.as_str()], &[])
            .await
    }

    async fn create_coupon(&self, token: &AccessToken, coupon: &Coupon) -> AppResult<Coupon> {
        self.client
            .send_record(Method::POST, token, &["coupons"], coupon)
            .await
    }

    async fn update_coupon(
        &self,
        token: &AccessToken,
        id: &RecordId,
        coupon: &Coupon,
    ) -> AppResult<Coupon> {
        self.client
            .send_record(Method::PUT, token, &["coupons", id.as_str()], coupon)
            .await
    }

    async fn delete_coupon(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.client.delete(token, &["coupons", id.as_str()]).await
    }
}
