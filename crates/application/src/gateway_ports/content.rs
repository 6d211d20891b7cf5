use async_trait::async_trait;
use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{Article, ArticleStats, Category, RecordId};

use super::RemoteFilter;

/// Port for platform article endpoints.
#[async_trait]
pub trait ArticleGateway: Send + Sync {
    /// Lists articles matching the forwarded filter.
    async fn list_articles(
        &self,
        token: &AccessToken,
        filter: &RemoteFilter,
    ) -> AppResult<Vec<Article>>;

    /// Returns aggregate article counters.
    async fn article_stats(&self, token: &AccessToken) -> AppResult<ArticleStats>;

    /// Fetches one article.
    async fn get_article(&self, token: &AccessToken, id: &RecordId) -> AppResult<Article>;

    /// Creates an article and returns the stored record.
    async fn create_article(&self, token: &AccessToken, article: &Article) -> AppResult<Article>;

    /// Replaces an article and returns the stored record.
    async fn update_article(
        &self,
        token: &AccessToken,
        id: &RecordId,
        article: &Article,
    ) -> AppResult<Article>;

    /// Deletes an article.
    async fn delete_article(&self, token: &AccessToken, id: &RecordId) -> AppResult<()>;
}

/// Port for platform category endpoints.
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Lists every category.
    async fn list_categories(&self, token: &AccessToken) -> AppResult<Vec<Category>>;

    /// Creates a category.
    async fn create_category(
        &self,
        token: &AccessToken,
        category: &Category,
    ) -> AppResult<Category>;

    /// Replaces a category.
    async fn update_category(
        &self,
        token: &AccessToken,
        id: &RecordId,
        category: &Category,
    ) -> AppResult<Category>;

    /// Deletes a category.
    async fn delete_category(&self, token: &AccessToken, id: &RecordId) -> AppResult<()>;
}
