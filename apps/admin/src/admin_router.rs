mod cors;
#[cfg(test)]
mod tests;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, patch, post, put};
use coachdesk_core::AppError;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::state::AppState;
use crate::{auth, handlers, middleware};

use self::cors::build_cors_layer;

/// Room for multipart boundaries and headers around the image itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(
    app_state: AppState,
    frontend_url: &str,
    session_layer: SessionManagerLayer<MemoryStore>,
) -> Result<Router, AppError> {
    let cors_layer = build_cors_layer(frontend_url)?;
    let upload_limit = app_state.media_service.max_upload_bytes() + MULTIPART_OVERHEAD_BYTES;

    let protected_routes = Router::new()
        .route("/api/theme", get(handlers::theme::theme_handler))
        .route("/api/dashboard", get(handlers::dashboard::dashboard_handler))
        .route(
            "/api/dashboard/revenue-chart",
            get(handlers::dashboard::revenue_chart_handler),
        )
        .route(
            "/api/articles",
            get(handlers::articles::list_articles_handler)
                .post(handlers::articles::create_article_handler),
        )
        .route(
            "/api/articles/stats",
            get(handlers::articles::article_stats_handler),
        )
        .route(
            "/api/articles/{article_id}",
            get(handlers::articles::get_article_handler)
                .put(handlers::articles::update_article_handler)
                .delete(handlers::articles::delete_article_handler),
        )
        .route(
            "/api/categories",
            get(handlers::categories::list_categories_handler)
                .post(handlers::categories::create_category_handler),
        )
        .route(
            "/api/categories/{category_id}",
            put(handlers::categories::update_category_handler)
                .delete(handlers::categories::delete_category_handler),
        )
        .route(
            "/api/coupons",
            get(handlers::coupons::list_coupons_handler)
                .post(handlers::coupons::create_coupon_handler),
        )
        .route(
            "/api/coupons/stats",
            get(handlers::coupons::coupon_stats_handler),
        )
        .route(
            "/api/coupons/analytics",
            get(handlers::coupons::coupon_analytics_handler),
        )
        .route(
            "/api/coupons/{coupon_id}",
            get(handlers::coupons::get_coupon_handler)
                .put(handlers::coupons::update_coupon_handler)
                .delete(handlers::coupons::delete_coupon_handler),
        )
        .route(
            "/api/events",
            get(handlers::events::list_events_handler).post(handlers::events::create_event_handler),
        )
        .route("/api/events/stats", get(handlers::events::event_stats_handler))
        .route(
            "/api/events/{event_id}",
            get(handlers::events::get_event_handler)
                .put(handlers::events::update_event_handler)
                .delete(handlers::events::delete_event_handler),
        )
        .route(
            "/api/uploads/image",
            post(handlers::uploads::upload_image_handler)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/finance/transactions",
            get(handlers::finance::list_transactions_handler),
        )
        .route(
            "/api/finance/summary",
            get(handlers::finance::finance_summary_handler),
        )
        .route(
            "/api/hero-banners",
            get(handlers::hero_banners::list_slides_handler)
                .post(handlers::hero_banners::create_slide_handler),
        )
        .route(
            "/api/hero-banners/order",
            put(handlers::hero_banners::reorder_slides_handler),
        )
        .route(
            "/api/hero-banners/{slide_id}",
            put(handlers::hero_banners::update_slide_handler)
                .delete(handlers::hero_banners::delete_slide_handler),
        )
        .route(
            "/api/hero-banners/{slide_id}/clone",
            post(handlers::hero_banners::clone_slide_handler),
        )
        .route(
            "/api/hero-banners/{slide_id}/move",
            post(handlers::hero_banners::move_slide_handler),
        )
        .route(
            "/api/hero-banners/{slide_id}/layers",
            post(handlers::hero_banners::add_layer_handler),
        )
        .route(
            "/api/hero-banners/{slide_id}/layers/{layer_id}",
            patch(handlers::hero_banners::update_layer_handler)
                .delete(handlers::hero_banners::remove_layer_handler),
        )
        .route(
            "/api/hero-banners/{slide_id}/layers/{layer_id}/move",
            post(handlers::hero_banners::move_layer_handler),
        )
        .route(
            "/api/settings/coupons",
            get(handlers::settings::coupon_settings_handler)
                .put(handlers::settings::save_coupon_settings_handler),
        )
        .route(
            "/api/settings/{section}",
            put(handlers::settings::save_settings_section_handler),
        )
        .route(
            "/api/notifications",
            get(handlers::notifications::notifications_handler),
        )
        .route_layer(from_fn(middleware::require_auth));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/auth/session",
            get(auth::session_status_handler).post(auth::create_session_handler),
        )
        .route("/auth/logout", post(auth::logout_handler))
        .merge(protected_routes)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(session_layer)
        .with_state(app_state))
}
