mod content;
mod coupons;
mod dashboard;
mod events;
mod finance;
mod hero_banners;
mod notifications;
mod settings;

pub use content::{ArticleGateway, CategoryGateway};
pub use coupons::CouponGateway;
pub use dashboard::DashboardGateway;
pub use events::{EventGateway, ImageUpload, MediaGateway};
pub use finance::FinanceGateway;
pub use hero_banners::HeroBannerGateway;
pub use notifications::{NotificationCache, NotificationGateway};
pub use settings::SettingsGateway;

/// Filter forwarded to platform list endpoints as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteFilter {
    /// Free-text search term.
    pub search: Option<String>,
    /// Status filter.
    pub status: Option<String>,
}

impl RemoteFilter {
    /// Returns the non-empty parameters as query pairs.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [("search", self.search.as_deref()), ("status", self.status.as_deref())]
            .into_iter()
            .filter_map(|(key, value)| value.map(|value| (key, value)))
            .collect()
    }
}
