use async_trait::async_trait;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{AnalyticsRange, Coupon, CouponAnalytics, CouponStats, RecordId};

use super::RemoteFilter;

/// Port for platform coupon endpoints.
#[async_trait]
pub trait CouponGateway: Send + Sync {
    /// Lists coupons matching the forwarded filter.
    async fn list_coupons(
        &self,
        token: &AccessToken,
        filter: &RemoteFilter,
    ) -> AppResult<Vec<Coupon>>;

    /// Returns aggregate coupon counters.
    async fn coupon_stats(&self, token: &AccessToken) -> AppResult<CouponStats>;

    /// Returns redemption analytics for one range.
    async fn coupon_analytics(
        &self,
        token: &AccessToken,
        range: AnalyticsRange,
    ) -> AppResult<CouponAnalytics>;

    /// Fetches one coupon.
    async fn get_coupon(&self, token: &AccessToken, id: &RecordId) -> AppResult<Coupon>;

    /// Creates a coupon.
    async fn create_coupon(&self, token: &AccessToken, coupon: &Coupon) -> AppResult<Coupon>;

    /// Replaces a coupon.
    async fn update_coupon(
        &self,
        token: &AccessToken,
        id: &RecordId,
        coupon: &Coupon,
    ) -> AppResult<Coupon>;

    /// Deletes a coupon.
    async fn delete_coupon(&self, token: &AccessToken, id: &RecordId) -> AppResult<()>;
}
