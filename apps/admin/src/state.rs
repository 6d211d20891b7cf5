use std::sync::Arc;

use coachdesk_application::{
    ContentService, CouponService, DashboardService, EventService, FinanceService,
    HeroBannerService, MediaService, NotificationService, SearchCoalescer, SettingsService,
};
use coachdesk_domain::ThemeConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content_service: ContentService,
    pub coupon_service: CouponService,
    pub dashboard_service: DashboardService,
    pub event_service: EventService,
    pub finance_service: FinanceService,
    pub hero_banner_service: HeroBannerService,
    pub media_service: MediaService,
    pub notification_service: NotificationService,
    pub settings_service: SettingsService,
    pub search_coalescer: Arc<SearchCoalescer>,
    pub theme: Arc<ThemeConfig>,
    pub frontend_url: String,
}
