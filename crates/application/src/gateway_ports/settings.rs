use async_trait::async_trait;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{CouponSettings, SettingsSection};
use serde_json::Value;

/// Port for platform settings endpoints.
#[async_trait]
pub trait SettingsGateway: Send + Sync {
    /// Returns coupon policy settings.
    async fn coupon_settings(&self, token: &AccessToken) -> AppResult<CouponSettings>;

    /// Saves coupon policy settings.
    async fn save_coupon_settings(
        &self,
        token: &AccessToken,
        settings: &CouponSettings,
    ) -> AppResult<CouponSettings>;

    /// Saves one free-form settings section and returns the stored value.
    async fn save_section(
        &self,
        token: &AccessToken,
        section: &SettingsSection,
        values: &Value,
    ) -> AppResult<Value>;
}
