pub mod articles;
pub mod categories;
pub mod coupons;
pub mod dashboard;
pub mod events;
pub mod finance;
pub mod health;
pub mod hero_banners;
pub mod notifications;
pub mod settings;
pub mod theme;
pub mod uploads;

use coachdesk_core::AccessToken;

use crate::auth::coalescer_prefix;

/// Coalescer key for one operator's list view.
fn coalescer_key(token: &AccessToken, view: &str) -> String {
    format!("{}{view}", coalescer_prefix(token))
}
