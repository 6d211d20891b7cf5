use coachdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::record::{ExtraFields, RecordId};
use crate::slug::slugify;

/// Article status assigned when a draft is submitted without one.
pub const DEFAULT_ARTICLE_STATUS: &str = "draft";

/// Blog article managed from the content section.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    /// Platform identifier.
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Headline.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Teaser text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Body markup.
    pub content: String,
    /// Owning category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RecordId>,
    /// Author display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication status (`draft`, `published`, `archived`).
    pub status: String,
    /// Whether the article is pinned on the landing page.
    pub featured: bool,
    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// View counter.
    pub views: u64,
    /// Publication timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    /// Creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Article {
    /// Applies submission defaults and validates the draft.
    pub fn prepare_for_submit(&mut self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation(
                "article title must not be empty".to_owned(),
            ));
        }

        if self.status.trim().is_empty() {
            DEFAULT_ARTICLE_STATUS.clone_into(&mut self.status);
        }

        if self.slug.trim().is_empty() {
            self.slug = derived_slug(&self.title, "article title")?;
        }

        Ok(())
    }
}

/// Aggregate article counters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleStats {
    /// All articles.
    pub total: u64,
    /// Published articles.
    pub published: u64,
    /// Draft articles.
    pub draft: u64,
    /// Archived articles.
    pub archived: u64,
    /// Views across all articles.
    pub total_views: u64,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Article category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    /// Platform identifier.
    #[serde(alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Badge color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Number of articles in the category.
    pub article_count: u64,
    /// Uninterpreted platform fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Category {
    /// Applies submission defaults and validates the draft.
    pub fn prepare_for_submit(&mut self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "category name must not be empty".to_owned(),
            ));
        }

        if self.slug.trim().is_empty() {
            self.slug = derived_slug(&self.name, "category name")?;
        }

        Ok(())
    }
}

fn derived_slug(source: &str, field: &str) -> AppResult<String> {
    let slug = slugify(source);
    if slug.is_empty() {
        return Err(AppError::Validation(format!(
            "{field} '{source}' does not produce a URL slug; provide one explicitly"
        )));
    }

    Ok(slug)
}
