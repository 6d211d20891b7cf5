mod common;

use std::time::Duration;

use coachdesk_application::{
    ArticleGateway, DashboardGateway, HeroBannerGateway, ImageUpload, MediaGateway,
    NotificationGateway, RemoteFilter, SettingsGateway,
};
use coachdesk_core::{AccessToken, AppError};
use coachdesk_domain::{RecordId, SettingsSection};
use coachdesk_infrastructure::{
    PlatformApiClient, RestContentGateway, RestDashboardGateway, RestEventGateway,
    RestHeroBannerGateway, RestNotificationGateway, RestSettingsGateway,
};
use serde_json::json;

use common::mock_platform::{MockPlatform, MockResponse};

fn token() -> AccessToken {
    AccessToken::new("platform-token").unwrap_or_else(|_| unreachable!())
}

fn client(platform: &MockPlatform) -> PlatformApiClient {
    PlatformApiClient::new(&platform.base_url(), Duration::from_secs(5))
        .unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn list_articles_forwards_filter_and_unwraps_data_envelope() {
    let platform = MockPlatform::start().await;
    platform
        .enqueue(MockResponse::json(
            r#"{"data":[{"_id":"64f1","title":"Core basics","status":"published","views":12}],"total":1}"#,
        ))
        .await;
    let gateway = RestContentGateway::new(client(&platform));

    let articles = gateway
        .list_articles(
            &token(),
            &RemoteFilter {
                search: Some("core".to_owned()),
                status: None,
            },
        )
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, Some(RecordId::from("64f1")));
    assert_eq!(articles[0].views, 12);

    let requests = platform.requests().await;
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/articles");
    assert_eq!(requests[0].query.as_deref(), Some("search=core"));
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Bearer platform-token")
    );
}

#[tokio::test]
async fn reorder_is_one_atomic_put() {
    let platform = MockPlatform::start().await;
    let gateway = RestHeroBannerGateway::new(client(&platform));

    let result = gateway
        .reorder_slides(&token(), &[RecordId::from("b"), RecordId::from("a")])
        .await;

    assert!(result.is_ok());
    let requests = platform.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/admin/hero-banners/order");
    assert_eq!(requests[0].body_json(), json!({"ids": ["b", "a"]}));
}

#[tokio::test]
async fn slides_accept_bare_arrays_with_numeric_ids() {
    let platform = MockPlatform::start().await;
    platform
        .enqueue(MockResponse::json(
            r##"[{"id":7,"title":"Welcome","order":1,"layers":[{"id":"layer-1","type":"text","content":"Hi","fontSize":24,"color":"#fff","x":10,"y":20}]}]"##,
        ))
        .await;
    let gateway = RestHeroBannerGateway::new(client(&platform));

    let slides = gateway
        .list_slides(&token())
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(slides[0].id, Some(RecordId::from("7")));
    assert_eq!(slides[0].layers.len(), 1);
    assert!(slides[0].is_active);
}

#[tokio::test]
async fn record_ids_are_path_encoded() {
    let platform = MockPlatform::start().await;
    let gateway = RestContentGateway::new(client(&platform));

    let result = gateway
        .delete_article(&token(), &RecordId::from("../users"))
        .await;

    assert!(result.is_ok());
    let requests = platform.requests().await;
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/articles/..%2Fusers");
}

#[tokio::test]
async fn platform_statuses_map_to_app_errors() {
    let platform = MockPlatform::start().await;
    platform
        .enqueue(MockResponse::status(404, r#"{"message":"Article not found"}"#))
        .await;
    platform
        .enqueue(MockResponse::status(500, "boom"))
        .await;
    platform.enqueue(MockResponse::json("not json")).await;
    let gateway = RestContentGateway::new(client(&platform));
    let id = RecordId::from("missing");

    let not_found = gateway.get_article(&token(), &id).await;
    let server_error = gateway.get_article(&token(), &id).await;
    let invalid_json = gateway.get_article(&token(), &id).await;

    assert!(matches!(not_found, Err(AppError::NotFound(message)) if message == "Article not found"));
    assert!(matches!(server_error, Err(AppError::Upstream(_))));
    assert!(matches!(invalid_json, Err(AppError::Upstream(_))));
}

#[tokio::test]
async fn unreachable_platform_is_an_upstream_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .unwrap_or_else(|_| unreachable!());
    let addr = listener.local_addr().unwrap_or_else(|_| unreachable!());
    drop(listener);

    let client = PlatformApiClient::new(&format!("http://{addr}"), Duration::from_secs(2))
        .unwrap_or_else(|_| unreachable!());
    let gateway = RestNotificationGateway::new(client);

    let result = gateway.list_notifications(&token()).await;

    assert!(matches!(result, Err(AppError::Upstream(_))));
}

#[tokio::test]
async fn revenue_chart_sends_period_query() {
    let platform = MockPlatform::start().await;
    platform
        .enqueue(MockResponse::json(r#"[{"month":"ต.ค.","revenue":1500.5,"bookings":3}]"#))
        .await;
    let gateway = RestDashboardGateway::new(client(&platform));

    let points = gateway
        .revenue_chart(&token(), Some("year"))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(points[0].label, "ต.ค.");
    let requests = platform.requests().await;
    assert_eq!(requests[0].path, "/dashboard/revenue-chart");
    assert_eq!(requests[0].query.as_deref(), Some("period=year"));
}

#[tokio::test]
async fn image_upload_uses_multipart_image_field() {
    let platform = MockPlatform::start().await;
    platform
        .enqueue(MockResponse::json(
            r#"{"success":true,"data":{"imageUrl":"https://cdn.example.test/a.png"}}"#,
        ))
        .await;
    let gateway = RestEventGateway::new(client(&platform));

    let uploaded = gateway
        .upload_image(
            &token(),
            ImageUpload {
                file_name: "a.png".to_owned(),
                content_type: "image/png".to_owned(),
                bytes: vec![137, 80, 78, 71],
            },
        )
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(uploaded.url, "https://cdn.example.test/a.png");
    let requests = platform.requests().await;
    assert_eq!(requests[0].path, "/upload/image");
    assert!(
        requests[0]
            .content_type
            .as_deref()
            .is_some_and(|value| value.starts_with("multipart/form-data"))
    );
    assert!(requests[0].body_text().contains(r#"name="image""#));
}

#[tokio::test]
async fn settings_sections_are_saved_under_their_name() {
    let platform = MockPlatform::start().await;
    platform
        .enqueue(MockResponse::json(r#"{"commissionRate":12}"#))
        .await;
    let gateway = RestSettingsGateway::new(client(&platform));
    let section = SettingsSection::new("payment").unwrap_or_else(|_| unreachable!());

    let saved = gateway
        .save_section(&token(), &section, &json!({"commissionRate": 12}))
        .await
        .unwrap_or_else(|_| unreachable!());

    assert_eq!(saved["commissionRate"], 12);
    let requests = platform.requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/settings/payment");
}
