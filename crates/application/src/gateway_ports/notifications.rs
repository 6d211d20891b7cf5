use async_trait::async_trait;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{Notification, NotificationFeed};

/// Port for the platform notifications endpoint.
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Lists the operator's notifications.
    async fn list_notifications(&self, token: &AccessToken) -> AppResult<Vec<Notification>>;
}

/// Short-lived cache of notification feeds keyed by token fingerprint.
#[async_trait]
pub trait NotificationCache: Send + Sync {
    /// Returns a cached feed that has not expired.
    async fn get_feed(&self, key: &str) -> AppResult<Option<NotificationFeed>>;

    /// Stores a feed for `ttl_seconds`. A zero ttl stores nothing.
    async fn set_feed(&self, key: &str, feed: NotificationFeed, ttl_seconds: u32)
    -> AppResult<()>;

    /// Drops the feed for one key.
    async fn evict(&self, key: &str) -> AppResult<()>;
}
