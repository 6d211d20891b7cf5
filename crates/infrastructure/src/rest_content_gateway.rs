use async_trait::async_trait;
use coachdesk_application::{ArticleGateway, CategoryGateway, RemoteFilter};
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{Article, ArticleStats, Category, RecordId};
use reqwest::Method;

use crate::platform_api_client::PlatformApiClient;

/// Platform-backed article and category gateway.
#[derive(Clone)]
pub struct RestContentGateway {
    client: PlatformApiClient,
}

impl RestContentGateway {
    /// Creates a content gateway.
    #[must_use]
    pub fn new(client: PlatformApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArticleGateway for RestContentGateway {
    async fn list_articles(
        &self,
        token: &AccessToken,
        filter: &RemoteFilter,
    ) -> AppResult<Vec<Article>> {
        self.client
            .get_list(token, &["articles"], &filter.query_pairs())
            .await
    }

    async fn article_stats(&self, token: &AccessToken) -> AppResult<ArticleStats> {
        self.client
            .get_record(token, &["articles", "stats"], &[])
            .await
    }

    async fn get_article(&self, token: &AccessToken, id: &RecordId) -> AppResult<Article> {
        self.client
            .get_record(token, &["articles", id.as_str()], &[])
            .await
    }

    async fn create_article(&self, token: &AccessToken, article: &Article) -> AppResult<Article> {
        self.client
            .send_record(Method::POST, token, &["articles"], article)
            .await
    }

    async fn update_article(
        &self,
        token: &AccessToken,
        id: &RecordId,
        article: &Article,
    ) -> AppResult<Article> {
        self.client
            .send_record(Method::PUT, token, &["articles", id.as_str()], article)
            .await
    }

    async fn delete_article(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.client.delete(token, &["articles", id.as_str()]).await
    }
}

#[async_trait]
impl CategoryGateway for RestContentGateway {
    async fn list_categories(&self, token: &AccessToken) -> AppResult<Vec<Category>> {
        self.client.get_list(token, &["categories"], &[]).await
    }

    async fn create_category(
        &self,
        token: &AccessToken,
        category: &Category,
    ) -> AppResult<Category> {
        self.client
            .send_record(Method::POST, token, &["categories"], category)
            .await
    }

    async fn update_category(
        &self,
        token: &AccessToken,
        id: &RecordId,
        category: &Category,
    ) -> AppResult<Category> {
        self.client
            .send_record(Method::PUT, token, &["categories", id.as_str()], category)
            .await
    }

    async fn delete_category(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.client.delete(token, &["categories", id.as_str()]).await
    }
}
