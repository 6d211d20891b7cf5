use std::sync::Arc;

use coachdesk_application::{
    ContentService, CouponService, DashboardService, EventService, FinanceService,
    HeroBannerService, MediaService, NotificationService, SearchCoalescer, SettingsService,
};
use coachdesk_core::AppError;
use coachdesk_infrastructure::{
    InMemoryNotificationCache, PlatformApiClient, RestContentGateway, RestCouponGateway,
    RestDashboardGateway, RestEventGateway, RestFinanceGateway, RestHeroBannerGateway,
    RestNotificationGateway, RestSettingsGateway,
};

use crate::admin_config::AdminConfig;
use crate::state::AppState;

pub fn build_app_state(config: &AdminConfig) -> Result<AppState, AppError> {
    let client = PlatformApiClient::new(&config.platform_api_base_url, config.platform_timeout)?;

    let content_gateway = Arc::new(RestContentGateway::new(client.clone()));
    let event_gateway = Arc::new(RestEventGateway::new(client.clone()));
    let settings_gateway = Arc::new(RestSettingsGateway::new(client.clone()));

    // Notification polls within one interval are served from the cache.
    let notification_service =
        NotificationService::new(Arc::new(RestNotificationGateway::new(client.clone())))
            .with_cache(
                Arc::new(InMemoryNotificationCache::new()),
                config.notification_poll_seconds,
            );

    Ok(AppState {
        content_service: ContentService::new(content_gateway.clone(), content_gateway),
        coupon_service: CouponService::new(
            Arc::new(RestCouponGateway::new(client.clone())),
            settings_gateway.clone(),
        ),
        dashboard_service: DashboardService::new(Arc::new(RestDashboardGateway::new(
            client.clone(),
        ))),
        event_service: EventService::new(event_gateway.clone()),
        finance_service: FinanceService::new(Arc::new(RestFinanceGateway::new(client.clone()))),
        hero_banner_service: HeroBannerService::new(Arc::new(RestHeroBannerGateway::new(client))),
        media_service: MediaService::new(event_gateway, config.upload_max_bytes),
        notification_service,
        settings_service: SettingsService::new(settings_gateway),
        search_coalescer: Arc::new(SearchCoalescer::new(config.search_debounce)),
        theme: Arc::new(config.theme.clone()),
        frontend_url: config.frontend_url.clone(),
    })
}
