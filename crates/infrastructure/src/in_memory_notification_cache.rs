use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use coachdesk_application::NotificationCache;
use coachdesk_core::AppResult;
use coachdesk_domain::NotificationFeed;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct FeedCacheEntry {
    feed: NotificationFeed,
    expires_at: Instant,
}

/// In-memory TTL cache for notification feeds.
#[derive(Default)]
pub struct InMemoryNotificationCache {
    entries: RwLock<HashMap<String, FeedCacheEntry>>,
}

impl InMemoryNotificationCache {
    /// Creates an empty notification cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationCache for InMemoryNotificationCache {
    async fn get_feed(&self, key: &str) -> AppResult<Option<NotificationFeed>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Ok(Some(entry.feed.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .get(key)
            .is_some_and(|entry| entry.expires_at <= Instant::now())
        {
            entries.remove(key);
        }

        Ok(None)
    }

    async fn set_feed(
        &self,
        key: &str,
        feed: NotificationFeed,
        ttl_seconds: u32,
    ) -> AppResult<()> {
        if ttl_seconds == 0 {
            return Ok(());
        }

        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(u64::from(ttl_seconds)))
            .unwrap_or(now);

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(key.to_owned(), FeedCacheEntry { feed, expires_at });

        Ok(())
    }

    async fn evict(&self, key: &str) -> AppResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
