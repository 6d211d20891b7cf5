use async_trait::async_trait;
use coachdesk_application::NotificationGateway;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::Notification;

use crate::platform_api_client::PlatformApiClient;

/// Platform-backed notification gateway.
#[derive(Clone)]
pub struct RestNotificationGateway {
    client: PlatformApiClient,
}

impl RestNotificationGateway {
    /// Creates a notification gateway.
    #[must_use]
    pub fn new(client: PlatformApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationGateway for RestNotificationGateway {
    async fn list_notifications(&self, token: &AccessToken) -> AppResult<Vec<Notification>> {
        self.client.get_list(token, &["notifications"], &[]).await
    }
}
