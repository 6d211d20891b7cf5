use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use coachdesk_core::{AppError, AppResult};

/// Debounces list requests and lets the most recent request per key win.
///
/// Keys identify one list view of one session, e.g. `"<session>:articles"`.
/// Every call takes a ticket; a call whose ticket is no longer the newest
/// for its key fails with [`AppError::Conflict`] instead of returning data,
/// both before the platform is asked and after it answers. A key is dropped
/// as soon as no call for it is in flight.
pub struct SearchCoalescer {
    debounce: Duration,
    tickets: Mutex<Tickets>,
}

#[derive(Default)]
struct Tickets {
    next: u64,
    keys: HashMap<String, KeyTickets>,
}

struct KeyTickets {
    latest: u64,
    in_flight: usize,
}

impl SearchCoalescer {
    /// Creates a coalescer with the given debounce interval.
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            tickets: Mutex::new(Tickets::default()),
        }
    }

    /// Runs `fetch` unless a newer request for `key` arrives first.
    ///
    /// With `debounce` set the call waits the debounce interval before
    /// fetching, so keystroke bursts collapse into one platform request.
    pub async fn run<T, F, Fut>(&self, key: &str, debounce: bool, fetch: F) -> AppResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let ticket = self.issue(key);

        if debounce && !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
            ticket.ensure_current()?;
        }

        let result = fetch().await;
        ticket.ensure_current()?;
        result
    }

    /// Drops every key starting with `prefix`, e.g. when a session ends.
    pub fn forget(&self, prefix: &str) {
        self.lock().keys.retain(|key, _| !key.starts_with(prefix));
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.lock().keys.len()
    }

    fn lock(&self) -> MutexGuard<'_, Tickets> {
        self.tickets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn issue<'a>(&'a self, key: &'a str) -> Ticket<'a> {
        let mut tickets = self.lock();
        tickets.next += 1;
        let number = tickets.next;

        let entry = tickets
            .keys
            .entry(key.to_owned())
            .or_insert(KeyTickets {
                latest: number,
                in_flight: 0,
            });
        entry.latest = number;
        entry.in_flight += 1;

        Ticket {
            coalescer: self,
            key,
            number,
        }
    }
}

/// One in-flight call; releases its key slot when dropped.
struct Ticket<'a> {
    coalescer: &'a SearchCoalescer,
    key: &'a str,
    number: u64,
}

impl Ticket<'_> {
    fn ensure_current(&self) -> AppResult<()> {
        let tickets = self.coalescer.lock();
        let superseded = tickets
            .keys
            .get(self.key)
            .is_some_and(|entry| entry.latest > self.number);

        if superseded {
            return Err(AppError::Conflict(format!(
                "request for '{}' was superseded by a newer one",
                self.key
            )));
        }

        Ok(())
    }
}

impl Drop for Ticket<'_> {
    fn drop(&mut self) {
        let mut tickets = self.coalescer.lock();
        let finished = match tickets.keys.get_mut(self.key) {
            Some(entry) => {
                entry.in_flight = entry.in_flight.saturating_sub(1);
                entry.in_flight == 0
            }
            None => false,
        };

        if finished {
            tickets.keys.remove(self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use coachdesk_core::{AppError, AppResult};

    use super::SearchCoalescer;

    #[tokio::test(start_paused = true)]
    async fn newer_keystroke_cancels_pending_search() {
        let coalescer = SearchCoalescer::new(Duration::from_millis(300));

        let first = coalescer.run("session:articles", true, || async {
            AppResult::Ok("core")
        });
        let second = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            coalescer
                .run("session:articles", true, || async {
                    AppResult::Ok("core strength")
                })
                .await
        };

        let (first, second) = tokio::join!(first, second);

        assert!(matches!(first, Err(AppError::Conflict(_))));
        assert_eq!(second.ok(), Some("core strength"));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_stale_response_is_discarded() {
        let coalescer = SearchCoalescer::new(Duration::ZERO);

        let slow = coalescer.run("session:events", false, || async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            AppResult::Ok("stale")
        });
        let fast = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            coalescer
                .run("session:events", false, || async { AppResult::Ok("fresh") })
                .await
        };

        let (slow, fast) = tokio::join!(slow, fast);

        assert!(matches!(slow, Err(AppError::Conflict(_))));
        assert_eq!(fast.ok(), Some("fresh"));
    }

    #[tokio::test(start_paused = true)]
    async fn different_keys_do_not_interfere() {
        let coalescer = SearchCoalescer::new(Duration::from_millis(300));

        let (articles, coupons) = tokio::join!(
            coalescer.run("session:articles", true, || async { AppResult::Ok(1) }),
            coalescer.run("session:coupons", true, || async { AppResult::Ok(2) }),
        );

        assert_eq!(articles.ok(), Some(1));
        assert_eq!(coupons.ok(), Some(2));
    }

    #[test]
    fn forget_clears_session_keys() {
        let coalescer = SearchCoalescer::new(Duration::ZERO);
        let session_a = coalescer.issue("session-a:articles");
        let session_b = coalescer.issue("session-b:articles");

        coalescer.forget("session-a:");

        let keys: Vec<String> = coalescer.lock().keys.keys().cloned().collect();
        assert_eq!(keys, vec!["session-b:articles".to_owned()]);

        drop(session_a);
        drop(session_b);
        assert_eq!(coalescer.tracked_keys(), 0);
    }

    #[test]
    fn tickets_grow_monotonically_per_key() {
        let coalescer = SearchCoalescer::new(Duration::ZERO);
        let older = coalescer.issue("session:articles");
        let newer = coalescer.issue("session:articles");

        assert!(newer.number > older.number);
        assert!(matches!(older.ensure_current(), Err(AppError::Conflict(_))));
        assert!(newer.ensure_current().is_ok());
    }

    #[tokio::test]
    async fn completed_requests_release_their_keys() {
        let coalescer = SearchCoalescer::new(Duration::ZERO);

        for session in 0..100 {
            let key = format!("session-{session}:articles");
            let result = coalescer.run(&key, false, || async { AppResult::Ok(()) }).await;
            assert!(result.is_ok());
        }

        assert_eq!(coalescer.tracked_keys(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_and_failed_requests_release_their_keys() {
        let coalescer = SearchCoalescer::new(Duration::ZERO);

        let slow = coalescer.run("session:events", false, || async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            AppResult::Ok("stale")
        });
        let failing = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            coalescer
                .run("session:events", false, || async {
                    AppResult::<&str>::Err(AppError::Upstream("platform down".to_owned()))
                })
                .await
        };

        let (slow, failing) = tokio::join!(slow, failing);

        assert!(matches!(slow, Err(AppError::Conflict(_))));
        assert!(matches!(failing, Err(AppError::Upstream(_))));
        assert_eq!(coalescer.tracked_keys(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_response_is_discarded_after_newer_request_finished() {
        let coalescer = SearchCoalescer::new(Duration::ZERO);

        let slow = coalescer.run("session:coupons", false, || async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            AppResult::Ok("stale")
        });
        let fast = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let fresh = coalescer
                .run("session:coupons", false, || async { AppResult::Ok("fresh") })
                .await;
            assert_eq!(coalescer.tracked_keys(), 1);
            fresh
        };

        let (slow, fast) = tokio::join!(slow, fast);

        assert_eq!(fast.ok(), Some("fresh"));
        assert!(matches!(slow, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn dropped_request_releases_its_key() {
        let coalescer = SearchCoalescer::new(Duration::from_millis(300));

        let pending = coalescer.run("session:articles", true, || async { AppResult::Ok(()) });
        let timed_out = tokio::time::timeout(Duration::from_millis(1), pending).await;

        assert!(timed_out.is_err());
        assert_eq!(coalescer.tracked_keys(), 0);
    }
}
