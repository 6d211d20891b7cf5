use async_trait::async_trait;
use coachdesk_application::SettingsGateway;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{CouponSettings, SettingsSection};
use reqwest::Method;
use serde_json::Value;

use crate::platform_api_client::PlatformApiClient;

/// Platform-backed settings gateway.
#[derive(Clone)]
pub struct RestSettingsGateway {
    client: PlatformApiClient,
}

impl RestSettingsGateway {
    /// Creates a settings gateway.
    #[must_use]
    pub fn new(client: PlatformApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsGateway for RestSettingsGateway {
    async fn coupon_settings(&self, token: &AccessToken) -> AppResult<CouponSettings> {
        self.client
            .get_record(token, &["settings", "coupons"], &[])
            .await
    }

    async fn save_coupon_settings(
        &self,
        token: &AccessToken,
        settings: &CouponSettings,
    ) -> AppResult<CouponSettings> {
        self.client
            .send_record(Method::PUT, token, &["settings", "coupons"], settings)
            .await
    }

    async fn save_section(
        &self,
        token: &AccessToken,
        section: &SettingsSection,
        values: &Value,
    ) -> AppResult<Value> {
        self.client
            .send_record(Method::PUT, token, &["settings", section.as_str()], values)
            .await
    }
}
