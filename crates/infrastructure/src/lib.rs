//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_notification_cache;
mod platform_api_client;
mod rest_content_gateway;
mod rest_coupon_gateway;
mod rest_dashboard_gateway;
mod rest_event_gateway;
mod rest_finance_gateway;
mod rest_hero_banner_gateway;
mod rest_notification_gateway;
mod rest_settings_gateway;

pub use in_memory_notification_cache::InMemoryNotificationCache;
pub use platform_api_client::PlatformApiClient;
pub use rest_content_gateway::RestContentGateway;
pub use rest_coupon_gateway::RestCouponGateway;
pub use rest_dashboard_gateway::RestDashboardGateway;
pub use rest_event_gateway::RestEventGateway;
pub use rest_finance_gateway::RestFinanceGateway;
pub use rest_hero_banner_gateway::RestHeroBannerGateway;
pub use rest_notification_gateway::RestNotificationGateway;
pub use rest_settings_gateway::RestSettingsGateway;
