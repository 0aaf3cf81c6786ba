use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<Article> for ArticleDto {
    type Error = ApplicationError;

    fn try_from(article: Article) -> ApplicationResult<Self> {
        let id = article
            .id
            .ok_or_else(|| ApplicationError::infrastructure("article has not been persisted"))?;
        let slug = article
            .slug
            .ok_or_else(|| ApplicationError::infrastructure("article has no slug"))?;

        Ok(Self {
            id: id.into(),
            title: article.title.into_inner(),
            slug: slug.into_inner(),
            body: article.body.into_inner(),
            category_id: article.category_id.map(Into::into),
            published: article.published,
            published_at: article.published_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        })
    }
}
