use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use coachdesk_application::{
    ArticleGateway, CategoryGateway, ContentService, CouponService, DashboardService,
    EventService, FinanceService, HeroBannerGateway, HeroBannerService, MediaService,
    NotificationGateway, NotificationService, RemoteFilter, SearchCoalescer, SettingsService,
};
use coachdesk_core::{AccessToken, AppError, AppResult};
use coachdesk_domain::{Article, ArticleStats, Category, Notification, RecordId, Slide, ThemeConfig};
use coachdesk_infrastructure::{
    PlatformApiClient, RestCouponGateway, RestDashboardGateway, RestEventGateway,
    RestFinanceGateway, RestSettingsGateway,
};
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tower::ServiceExt;

use super::build_router;
use crate::admin_services::build_session_layer;
use crate::state::AppState;

const FRONTEND_URL: &str = "http://localhost:3000";

#[derive(Default)]
struct FakeArticleGateway {
    articles: Mutex<Vec<Article>>,
    filters: Mutex<Vec<RemoteFilter>>,
    tokens: Mutex<Vec<String>>,
}

#[async_trait]
impl ArticleGateway for FakeArticleGateway {
    async fn list_articles(
        &self,
        token: &AccessToken,
        filter: &RemoteFilter,
    ) -> AppResult<Vec<Article>> {
        self.tokens.lock().await.push(token.as_str().to_owned());
        self.filters.lock().await.push(filter.clone());
        Ok(self.articles.lock().await.clone())
    }

    async fn article_stats(&self, _token: &AccessToken) -> AppResult<ArticleStats> {
        Ok(ArticleStats::default())
    }

    async fn get_article(&self, _token: &AccessToken, id: &RecordId) -> AppResult<Article> {
        Err(AppError::NotFound(format!("article '{id}' does not exist")))
    }

    async fn create_article(&self, _token: &AccessToken, article: &Article) -> AppResult<Article> {
        let mut created = article.clone();
        created.id = Some(RecordId::new("created"));
        self.articles.lock().await.push(created.clone());
        Ok(created)
    }

    async fn update_article(
        &self,
        _token: &AccessToken,
        _id: &RecordId,
        article: &Article,
    ) -> AppResult<Article> {
        Ok(article.clone())
    }

    async fn delete_article(&self, _token: &AccessToken, _id: &RecordId) -> AppResult<()> {
        Ok(())
    }
}

struct EmptyCategoryGateway;

#[async_trait]
impl CategoryGateway for EmptyCategoryGateway {
    async fn list_categories(&self, _token: &AccessToken) -> AppResult<Vec<Category>> {
        Ok(Vec::new())
    }

    async fn create_category(
        &self,
        _token: &AccessToken,
        category: &Category,
    ) -> AppResult<Category> {
        Ok(category.clone())
    }

    async fn update_category(
        &self,
        _token: &AccessToken,
        _id: &RecordId,
        category: &Category,
    ) -> AppResult<Category> {
        Ok(category.clone())
    }

    async fn delete_category(&self, _token: &AccessToken, _id: &RecordId) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct FakeHeroBannerGateway {
    slides: Mutex<Vec<Slide>>,
    reorder_calls: Mutex<Vec<Vec<RecordId>>>,
}

#[async_trait]
impl HeroBannerGateway for FakeHeroBannerGateway {
    async fn list_slides(&self, _token: &AccessToken) -> AppResult<Vec<Slide>> {
        Ok(self.slides.lock().await.clone())
    }

    async fn create_slide(&self, _token: &AccessToken, slide: &Slide) -> AppResult<Slide> {
        Ok(slide.clone())
    }

    async fn update_slide(
        &self,
        _token: &AccessToken,
        _id: &RecordId,
        slide: &Slide,
    ) -> AppResult<Slide> {
        Ok(slide.clone())
    }

    async fn delete_slide(&self, _token: &AccessToken, _id: &RecordId) -> AppResult<()> {
        Ok(())
    }

    async fn reorder_slides(
        &self,
        _token: &AccessToken,
        ordered_ids: &[RecordId],
    ) -> AppResult<()> {
        self.reorder_calls.lock().await.push(ordered_ids.to_vec());
        let mut slides = self.slides.lock().await;
        for slide in slides.iter_mut() {
            if let Some(position) = ordered_ids
                .iter()
                .position(|id| slide.id.as_ref() == Some(id))
            {
                slide.order = u32::try_from(position + 1).unwrap_or(u32::MAX);
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct FakeNotificationGateway {
    calls: Mutex<usize>,
}

#[async_trait]
impl NotificationGateway for FakeNotificationGateway {
    async fn list_notifications(&self, _token: &AccessToken) -> AppResult<Vec<Notification>> {
        *self.calls.lock().await += 1;
        Ok(vec![Notification {
            title: "New trainer application".to_owned(),
            ..Notification::default()
        }])
    }
}

struct Harness {
    app: Router,
    articles: Arc<FakeArticleGateway>,
    banners: Arc<FakeHeroBannerGateway>,
    notifications: Arc<FakeNotificationGateway>,
}

fn article(id: &str, title: &str) -> Article {
    Article {
        id: Some(RecordId::new(id)),
        title: title.to_owned(),
        status: "published".to_owned(),
        ..Article::default()
    }
}

fn slide(id: &str, order: u32) -> Slide {
    Slide {
        id: Some(RecordId::new(id)),
        title: format!("Slide {id}"),
        order,
        ..Slide::default()
    }
}

async fn harness() -> Harness {
    // Nothing listens on the discard port, so real gateways fail fast.
    let unreachable_platform =
        PlatformApiClient::new("http://127.0.0.1:9", Duration::from_millis(500))
            .unwrap_or_else(|_| unreachable!());

    let articles = Arc::new(FakeArticleGateway::default());
    articles.articles.lock().await.extend([
        article("a1", "Mobility basics"),
        article("a2", "Strength for runners"),
        article("a3", "Yoga recovery"),
    ]);

    let banners = Arc::new(FakeHeroBannerGateway::default());
    banners
        .slides
        .lock()
        .await
        .extend([slide("a", 1), slide("b", 2)]);

    let notifications = Arc::new(FakeNotificationGateway::default());
    let event_gateway = Arc::new(RestEventGateway::new(unreachable_platform.clone()));
    let settings_gateway = Arc::new(RestSettingsGateway::new(unreachable_platform.clone()));

    let state = AppState {
        content_service: ContentService::new(articles.clone(), Arc::new(EmptyCategoryGateway)),
        coupon_service: CouponService::new(
            Arc::new(RestCouponGateway::new(unreachable_platform.clone())),
            settings_gateway.clone(),
        ),
        dashboard_service: DashboardService::new(Arc::new(RestDashboardGateway::new(
            unreachable_platform.clone(),
        ))),
        event_service: EventService::new(event_gateway.clone()),
        finance_service: FinanceService::new(Arc::new(RestFinanceGateway::new(
            unreachable_platform,
        ))),
        hero_banner_service: HeroBannerService::new(banners.clone()),
        media_service: MediaService::new(event_gateway, 1024),
        notification_service: NotificationService::new(notifications.clone()),
        settings_service: SettingsService::new(settings_gateway),
        search_coalescer: Arc::new(SearchCoalescer::new(Duration::ZERO)),
        theme: Arc::new(ThemeConfig::named("default").unwrap_or_else(|_| unreachable!())),
        frontend_url: FRONTEND_URL.to_owned(),
    };

    let app = build_router(state, FRONTEND_URL, build_session_layer(false))
        .unwrap_or_else(|_| unreachable!());

    Harness {
        app,
        articles,
        banners,
        notifications,
    }
}

fn request(method: Method, uri: &str) -> axum::http::request::Builder {
    Request::builder().method(method).uri(uri)
}

fn json_body(builder: axum::http::request::Builder, body: &Value) -> Request<Body> {
    builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap_or_else(|_| unreachable!())
}

fn empty_body(builder: axum::http::request::Builder) -> Request<Body> {
    builder
        .body(Body::empty())
        .unwrap_or_else(|_| unreachable!())
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|_| unreachable!())
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_else(|_| unreachable!());
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

fn session_cookie(response: &Response) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .unwrap_or_default()
        .to_owned()
}

#[tokio::test]
async fn health_is_public() {
    let harness = harness().await;

    let response = send(&harness.app, empty_body(request(Method::GET, "/health"))).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn api_routes_require_a_token() {
    let harness = harness().await;

    let response = send(&harness.app, empty_body(request(Method::GET, "/api/articles"))).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert!(body["message"].as_str().is_some_and(|message| !message.is_empty()));
    assert!(harness.articles.filters.lock().await.is_empty());
}

#[tokio::test]
async fn bearer_header_lists_sorted_pages() {
    let harness = harness().await;

    let response = send(
        &harness.app,
        empty_body(
            request(
                Method::GET,
                "/api/articles?sort=title&direction=desc&limit=2&status=published",
            )
            .header(header::AUTHORIZATION, "Bearer platform-token"),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["items"][0]["title"], "Yoga recovery");
    assert_eq!(body["items"][1]["title"], "Strength for runners");
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["pages"], 2);
    assert_eq!(body["pagination"]["hasNext"], true);

    assert_eq!(
        harness.articles.tokens.lock().await.as_slice(),
        ["platform-token".to_owned()]
    );
    assert_eq!(
        harness.articles.filters.lock().await.first().and_then(|filter| filter.status.clone()),
        Some("published".to_owned())
    );
}

#[tokio::test]
async fn unknown_sort_key_is_a_bad_request() {
    let harness = harness().await;

    let response = send(
        &harness.app,
        empty_body(
            request(Method::GET, "/api/articles?sort=password")
                .header(header::AUTHORIZATION, "Bearer platform-token"),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mutations_require_same_origin() {
    let harness = harness().await;
    let payload = json!({ "title": "Cold plunge myths", "content": "<p>...</p>" });

    let without_origin = send(
        &harness.app,
        json_body(
            request(Method::POST, "/api/articles")
                .header(header::AUTHORIZATION, "Bearer platform-token"),
            &payload,
        ),
    )
    .await;
    assert_eq!(without_origin.status(), StatusCode::UNAUTHORIZED);

    let cross_site = send(
        &harness.app,
        json_body(
            request(Method::POST, "/api/articles")
                .header(header::AUTHORIZATION, "Bearer platform-token")
                .header(header::ORIGIN, FRONTEND_URL)
                .header("sec-fetch-site", "cross-site"),
            &payload,
        ),
    )
    .await;
    assert_eq!(cross_site.status(), StatusCode::UNAUTHORIZED);

    let same_origin = send(
        &harness.app,
        json_body(
            request(Method::POST, "/api/articles")
                .header(header::AUTHORIZATION, "Bearer platform-token")
                .header(header::ORIGIN, FRONTEND_URL),
            &payload,
        ),
    )
    .await;
    assert_eq!(same_origin.status(), StatusCode::CREATED);
    assert_eq!(body_json(same_origin).await["id"], "created");
}

#[tokio::test]
async fn session_sign_in_serves_api_until_logout() {
    let harness = harness().await;

    let signed_in = send(
        &harness.app,
        json_body(
            request(Method::POST, "/auth/session").header(header::ORIGIN, FRONTEND_URL),
            &json!({ "token": "session-token" }),
        ),
    )
    .await;
    assert_eq!(signed_in.status(), StatusCode::OK);
    let cookie = session_cookie(&signed_in);
    assert!(!cookie.is_empty());

    let status = send(
        &harness.app,
        empty_body(request(Method::GET, "/auth/session").header(header::COOKIE, &cookie)),
    )
    .await;
    assert_eq!(body_json(status).await, json!({ "authenticated": true }));

    let feed = send(
        &harness.app,
        empty_body(request(Method::GET, "/api/notifications").header(header::COOKIE, &cookie)),
    )
    .await;
    assert_eq!(feed.status(), StatusCode::OK);
    assert_eq!(body_json(feed).await["unread"], 1);
    assert_eq!(*harness.notifications.calls.lock().await, 1);

    let logout = send(
        &harness.app,
        empty_body(
            request(Method::POST, "/auth/logout")
                .header(header::COOKIE, &cookie)
                .header(header::ORIGIN, FRONTEND_URL),
        ),
    )
    .await;
    assert_eq!(logout.status(), StatusCode::OK);
    assert_eq!(body_json(logout).await, json!({ "redirect": "/signin" }));

    let after_logout = send(
        &harness.app,
        empty_body(request(Method::GET, "/api/notifications").header(header::COOKIE, &cookie)),
    )
    .await;
    assert_eq!(after_logout.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn blank_session_token_is_rejected() {
    let harness = harness().await;

    for token in ["   ", "Bearer ", "bearer"] {
        let response = send(
            &harness.app,
            json_body(
                request(Method::POST, "/auth/session").header(header::ORIGIN, FRONTEND_URL),
                &json!({ "token": token }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "token {token:?}");
    }
}

#[tokio::test]
async fn reorder_is_one_atomic_request() {
    let harness = harness().await;

    let response = send(
        &harness.app,
        json_body(
            request(Method::PUT, "/api/hero-banners/order")
                .header(header::AUTHORIZATION, "Bearer platform-token")
                .header(header::ORIGIN, FRONTEND_URL),
            &json!({ "ids": ["b", "a"] }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["id"], "b");
    assert_eq!(body[0]["order"], 1);
    assert_eq!(body[1]["id"], "a");
    assert_eq!(body[1]["order"], 2);

    let calls = harness.banners.reorder_calls.lock().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls.first().cloned().unwrap_or_default(),
        vec![RecordId::new("b"), RecordId::new("a")]
    );
}

#[tokio::test]
async fn partial_reorder_is_rejected_without_writing() {
    let harness = harness().await;

    let response = send(
        &harness.app,
        json_body(
            request(Method::PUT, "/api/hero-banners/order")
                .header(header::AUTHORIZATION, "Bearer platform-token")
                .header(header::ORIGIN, FRONTEND_URL),
            &json!({ "ids": ["b"] }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(harness.banners.reorder_calls.lock().await.is_empty());
}

#[tokio::test]
async fn unreachable_platform_is_a_bad_gateway() {
    let harness = harness().await;

    let response = send(
        &harness.app,
        empty_body(
            request(Method::GET, "/api/events/stats")
                .header(header::AUTHORIZATION, "Bearer platform-token"),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_json(response).await["message"].is_string());
}

#[tokio::test]
async fn theme_is_served_to_authenticated_operators() {
    let harness = harness().await;

    let response = send(
        &harness.app,
        empty_body(
            request(Method::GET, "/api/theme")
                .header(header::AUTHORIZATION, "Bearer platform-token"),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], "default");
    assert_eq!(body["variables"]["--primary-color"], "#232956");
}
