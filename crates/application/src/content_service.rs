use std::sync::Arc;

use coachdesk_core::{AccessToken, AppResult};
use coachdesk_domain::{
    Article, ArticleStats, Category, ListFilter, Page, RecordId, SortDirection, paginate,
};
use tracing::info;

use crate::gateway_ports::{ArticleGateway, CategoryGateway};
use crate::list_query::{ListQuery, unknown_sort_key};

const ARTICLE_SORT_KEYS: [&str; 4] = ["title", "views", "createdAt", "publishedAt"];

/// Article and category management.
#[derive(Clone)]
pub struct ContentService {
    articles: Arc<dyn ArticleGateway>,
    categories: Arc<dyn CategoryGateway>,
}

impl ContentService {
    /// Creates a content service.
    #[must_use]
    pub fn new(articles: Arc<dyn ArticleGateway>, categories: Arc<dyn CategoryGateway>) -> Self {
        Self {
            articles,
            categories,
        }
    }

    /// Lists one page of articles.
    pub async fn list_articles(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> AppResult<Page<Article>> {
        let filter = article_filter(query)?;
        let articles = self
            .articles
            .list_articles(token, &query.remote_filter())
            .await?;

        paginate(filter.apply(articles), query.page, query.limit)
    }

    /// Returns aggregate article counters.
    pub async fn article_stats(&self, token: &AccessToken) -> AppResult<ArticleStats> {
        self.articles.article_stats(token).await
    }

    /// Fetches one article.
    pub async fn get_article(&self, token: &AccessToken, id: &RecordId) -> AppResult<Article> {
        self.articles.get_article(token, id).await
    }

    /// Creates an article after applying submission defaults.
    pub async fn create_article(
        &self,
        token: &AccessToken,
        mut article: Article,
    ) -> AppResult<Article> {
        article.id = None;
        article.prepare_for_submit()?;
        let created = self.articles.create_article(token, &article).await?;
        info!(slug = %created.slug, "article created");
        Ok(created)
    }

    /// Replaces an article after applying submission defaults.
    pub async fn update_article(
        &self,
        token: &AccessToken,
        id: &RecordId,
        mut article: Article,
    ) -> AppResult<Article> {
        article.id = Some(id.clone());
        article.prepare_for_submit()?;
        self.articles.update_article(token, id, &article).await
    }

    /// Deletes an article.
    pub async fn delete_article(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.articles.delete_article(token, id).await?;
        info!(article_id = %id, "article deleted");
        Ok(())
    }

    /// Lists categories matching an optional search term, sorted by name.
    pub async fn list_categories(
        &self,
        token: &AccessToken,
        search: Option<&str>,
    ) -> AppResult<Vec<Category>> {
        let categories = self.categories.list_categories(token).await?;
        let filter = ListFilter::new()
            .search(search)
            .search_in(|category: &Category| Some(category.name.as_str()))
            .search_in(|category: &Category| category.description.as_deref())
            .sort_by_key(
                |category: &Category| category.name.to_lowercase(),
                SortDirection::Asc,
            );

        Ok(filter.apply(categories))
    }

    /// Creates a category after applying submission defaults.
    pub async fn create_category(
        &self,
        token: &AccessToken,
        mut category: Category,
    ) -> AppResult<Category> {
        category.id = None;
        category.prepare_for_submit()?;
        self.categories.create_category(token, &category).await
    }

    /// Replaces a category after applying submission defaults.
    pub async fn update_category(
        &self,
        token: &AccessToken,
        id: &RecordId,
        mut category: Category,
    ) -> AppResult<Category> {
        category.id = Some(id.clone());
        category.prepare_for_submit()?;
        self.categories.update_category(token, id, &category).await
    }

    /// Deletes a category.
    pub async fn delete_category(&self, token: &AccessToken, id: &RecordId) -> AppResult<()> {
        self.categories.delete_category(token, id).await
    }
}

fn article_filter(query: &ListQuery) -> AppResult<ListFilter<'static, Article>> {
    let filter = ListFilter::new()
        .search(query.search_term())
        .search_in(|article: &Article| Some(article.title.as_str()))
        .search_in(|article: &Article| article.excerpt.as_deref())
        .search_in(|article: &Article| article.author.as_deref())
        .matching_if(query.status_filter(), |article: &Article, status: &String| {
            article.status.eq_ignore_ascii_case(status)
        });

    let direction = query.direction;
    let filter = match query.sort.as_deref() {
        None => filter,
        Some("title") => {
            filter.sort_by_key(|article: &Article| article.title.to_lowercase(), direction)
        }
        Some("views") => filter.sort_by_key(|article: &Article| article.views, direction),
        Some("createdAt") => {
            filter.sort_by_key(|article: &Article| article.created_at.clone(), direction)
        }
        Some("publishedAt") => {
            filter.sort_by_key(|article: &Article| article.published_at.clone(), direction)
        }
        Some(other) => return Err(unknown_sort_key(other, &ARTICLE_SORT_KEYS)),
    };

    Ok(filter)
}
