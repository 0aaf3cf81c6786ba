// src/infrastructure/repositories/postgres_article.rs
use super::error::{ensure_slug_column, map_sqlx};
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository,
};
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{Slug, SlugRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str =
    "id, title, slug, body, category_id, published, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    body: String,
    category_id: Option<i64>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let mut article = Article::draft(
            ArticleTitle::new(row.title)?,
            ArticleBody::new(row.body)?,
            row.created_at,
        )
        .into_persisted(ArticleId::new(row.id)?, Slug::new(row.slug)?);
        article.category_id = row.category_id.map(CategoryId::new).transpose()?;
        article.published = row.published;
        article.published_at = row.published_at;
        article.updated_at = row.updated_at;
        Ok(article)
    }
}

fn required_slug(article: &Article) -> DomainResult<String> {
    article
        .slug
        .as_ref()
        .map(|slug| slug.as_str().to_owned())
        .ok_or_else(|| DomainError::Validation("article slug must be assigned before saving".into()))
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: &Article) -> DomainResult<Article> {
        let slug = required_slug(article)?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, slug, body, category_id, published, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(article.title.as_str())
        .bind(slug)
        .bind(article.body.as_str())
        .bind(article.category_id.map(i64::from))
        .bind(article.published)
        .bind(article.published_at)
        .bind(article.created_at)
        .bind(article.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let id = article
            .id
            .ok_or_else(|| DomainError::Validation("cannot update an unsaved article".into()))?;
        let dirty = article.dirty_fields();

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(article.updated_at);

        if dirty.is_dirty(Article::TITLE) {
            builder.push(", title = ");
            builder.push_bind(article.title.as_str().to_owned());
        }

        if dirty.is_dirty(Article::SLUG) {
            builder.push(", slug = ");
            builder.push_bind(required_slug(article)?);
        }

        if dirty.is_dirty(Article::BODY) {
            builder.push(", body = ");
            builder.push_bind(article.body.as_str().to_owned());
        }

        if dirty.is_dirty(Article::CATEGORY) {
            builder.push(", category_id = ");
            builder.push_bind(article.category_id.map(i64::from));
        }

        if dirty.is_dirty(Article::PUBLISHED) {
            builder.push(", published = ");
            builder.push_bind(article.published);
            builder.push(", published_at = ");
            builder.push_bind(article.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(ARTICLE_COLUMNS);
        builder.push(" FROM articles");
        if !include_drafts {
            builder.push(" WHERE published = TRUE");
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}

#[async_trait]
impl SlugRepository<Article> for PostgresArticleReadRepository {
    async fn exists_by_field(
        &self,
        field: &str,
        value: &Slug,
        excluding: Option<ArticleId>,
    ) -> DomainResult<bool> {
        ensure_slug_column(field)?;

        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM articles WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
        )
        .bind(value.as_str())
        .bind(excluding.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
