use std::sync::Arc;

use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::NotificationFeed;
use sha2::{Digest, Sha256};

use crate::gateway_ports::{NotificationCache, NotificationGateway};

/// Notification feed with short-lived caching per operator token.
#[derive(Clone)]
pub struct NotificationService {
    notifications: Arc<dyn NotificationGateway>,
    cache: Option<Arc<dyn NotificationCache>>,
    cache_ttl_seconds: u32,
}

impl NotificationService {
    /// Creates a notification service without caching.
    #[must_use]
    pub fn new(notifications: Arc<dyn NotificationGateway>) -> Self {
        Self {
            notifications,
            cache: None,
            cache_ttl_seconds: 0,
        }
    }

    /// Adds feed caching. Polls within `ttl_seconds` reuse the cached feed.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn NotificationCache>, ttl_seconds: u32) -> Self {
        self.cache = Some(cache);
        self.cache_ttl_seconds = ttl_seconds;
        self
    }

    /// Returns the operator's notifications and unread count.
    pub async fn feed(&self, token: &AccessToken) -> AppResult<NotificationFeed> {
        let key = token_fingerprint(token);

        if self.cache_ttl_seconds > 0
            && let Some(cache) = &self.cache
            && let Some(feed) = cache.get_feed(&key).await?
        {
            return Ok(feed);
        }

        let feed = NotificationFeed::new(self.notifications.list_notifications(token).await?);

        if self.cache_ttl_seconds > 0
            && let Some(cache) = &self.cache
        {
            cache
                .set_feed(&key, feed.clone(), self.cache_ttl_seconds)
                .await?;
        }

        Ok(feed)
    }

    /// Drops the cached feed for a token, e.g. on logout.
    pub async fn forget(&self, token: &AccessToken) -> AppResult<()> {
        match &self.cache {
            Some(cache) => cache.evict(&token_fingerprint(token)).await,
            None => Ok(()),
        }
    }
}

/// Hex SHA-256 of a token, used wherever a token must key shared state.
#[must_use]
pub fn token_fingerprint(token: &AccessToken) -> String {
    let digest = Sha256::digest(token.as_str().as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use coachdesk_core::{AccessToken, AppResult};
    use coachdesk_domain::{Notification, NotificationFeed};

    use crate::gateway_ports::{NotificationCache, NotificationGateway};

    use super::{NotificationService, token_fingerprint};

    #[derive(Default)]
    struct FakeNotificationGateway {
        calls: Mutex<usize>,
    }

    #[async_trait]
    impl NotificationGateway for FakeNotificationGateway {
        async fn list_notifications(&self, _token: &AccessToken) -> AppResult<Vec<Notification>> {
            *self.calls.lock().await += 1;
            Ok(vec![
                Notification {
                    title: "New trainer application".to_owned(),
                    ..Notification::default()
                },
                Notification {
                    title: "Payout completed".to_owned(),
                    read: true,
                    ..Notification::default()
                },
            ])
        }
    }

    #[derive(Default)]
    struct FakeNotificationCache {
        feeds: Mutex<HashMap<String, NotificationFeed>>,
    }

    #[async_trait]
    impl NotificationCache for FakeNotificationCache {
        async fn get_feed(&self, key: &str) -> AppResult<Option<NotificationFeed>> {
            Ok(self.feeds.lock().await.get(key).cloned())
        }

        async fn set_feed(
            &self,
            key: &str,
            feed: NotificationFeed,
            _ttl_seconds: u32,
        ) -> AppResult<()> {
            self.feeds.lock().await.insert(key.to_owned(), feed);
            Ok(())
        }

        async fn evict(&self, key: &str) -> AppResult<()> {
            self.feeds.lock().await.remove(key);
            Ok(())
        }
    }

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap_or_else(|_| unreachable!())
    }

    #[tokio::test]
    async fn polls_within_ttl_reuse_cached_feed() {
        let gateway = Arc::new(FakeNotificationGateway::default());
        let cache = Arc::new(FakeNotificationCache::default());
        let service = NotificationService::new(gateway.clone()).with_cache(cache.clone(), 30);

        let first = service.feed(&token()).await.unwrap_or_else(|_| unreachable!());
        let second = service.feed(&token()).await.unwrap_or_else(|_| unreachable!());

        assert_eq!(first, second);
        assert_eq!(first.unread, 1);
        assert_eq!(*gateway.calls.lock().await, 1);
        assert!(!cache.feeds.lock().await.contains_key("test-token"));
    }

    #[tokio::test]
    async fn forget_forces_a_fresh_fetch() {
        let gateway = Arc::new(FakeNotificationGateway::default());
        let cache = Arc::new(FakeNotificationCache::default());
        let service = NotificationService::new(gateway.clone()).with_cache(cache, 30);

        let _ = service.feed(&token()).await;
        let _ = service.forget(&token()).await;
        let _ = service.feed(&token()).await;

        assert_eq!(*gateway.calls.lock().await, 2);
    }

    #[test]
    fn fingerprint_is_stable_hex() {
        let fingerprint = token_fingerprint(&token());
        assert_eq!(fingerprint.len(), 64);
        assert!(fingerprint.chars().all(|character| character.is_ascii_hexdigit()));
        assert_eq!(fingerprint, token_fingerprint(&token()));
    }
}
