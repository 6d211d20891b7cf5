//! Application services and ports.

#![forbid(unsafe_code)]

mod content_service;
mod coupon_service;
mod dashboard_service;
mod event_service;
mod finance_service;
mod gateway_ports;
mod hero_banner_service;
mod list_query;
mod media_service;
mod notification_service;
mod search_coalescer;
mod settings_service;

pub use content_service::ContentService;
pub use coupon_service::{CouponListing, CouponService};
pub use dashboard_service::{DashboardService, REVENUE_PERIODS};
pub use event_service::{EventListing, EventService};
pub use finance_service::{FinanceService, TransactionListing};
pub use gateway_ports::{
    ArticleGateway, CategoryGateway, CouponGateway, DashboardGateway, EventGateway,
    FinanceGateway, HeroBannerGateway, ImageUpload, MediaGateway, NotificationCache,
    NotificationGateway, RemoteFilter, SettingsGateway,
};
pub use hero_banner_service::{HeroBannerService, NewLayer};
pub use list_query::{DEFAULT_PAGE_LIMIT, ListQuery};
pub use media_service::MediaService;
pub use notification_service::{NotificationService, token_fingerprint};
pub use search_coalescer::SearchCoalescer;
pub use settings_service::SettingsService;
