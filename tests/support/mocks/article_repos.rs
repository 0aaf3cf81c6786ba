// tests/support/mocks/article_repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use coinpress_core::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle, ArticleWriteRepository,
};
use coinpress_core::domain::errors::{DomainError, DomainResult};
use coinpress_core::domain::slug::{Slug, SlugRepository};

#[derive(Default)]
struct Rows {
    by_id: BTreeMap<i64, Article>,
    next_id: i64,
}

/// Article table kept in memory. Enforces slug uniqueness like the
/// `articles_slug_key` constraint does.
#[derive(Default)]
pub struct InMemoryArticleStore {
    rows: Mutex<Rows>,
    slug_checks: AtomicUsize,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a stored article directly, bypassing hooks.
    pub fn seed(&self, title: &str, slug: &str) -> ArticleId {
        let mut rows = self.rows.lock().unwrap();
        rows.next_id += 1;
        let id = ArticleId::new(rows.next_id).unwrap();
        let article = Article::draft(
            ArticleTitle::new(title).unwrap(),
            ArticleBody::new("seeded body").unwrap(),
            super::time::fixed_now(),
        )
        .into_persisted(id, Slug::new(slug).unwrap());
        rows.by_id.insert(id.0, article);
        id
    }

    pub fn slug_of(&self, id: ArticleId) -> Option<String> {
        let rows = self.rows.lock().unwrap();
        rows.by_id
            .get(&id.0)
            .and_then(|a| a.slug.as_ref())
            .map(|s| s.as_str().to_string())
    }

    pub fn slugs(&self) -> Vec<String> {
        let rows = self.rows.lock().unwrap();
        rows.by_id
            .values()
            .filter_map(|a| a.slug.as_ref())
            .map(|s| s.as_str().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().by_id.len()
    }

    pub fn slug_checks(&self) -> usize {
        self.slug_checks.load(Ordering::SeqCst)
    }

    fn ensure_unique(rows: &Rows, article: &Article) -> DomainResult<()> {
        let slug = article
            .slug
            .as_ref()
            .ok_or_else(|| DomainError::Validation("article slug must be assigned".into()))?;
        let taken = rows
            .by_id
            .values()
            .any(|other| other.id != article.id && other.slug.as_ref() == Some(slug));
        if taken {
            return Err(DomainError::Conflict("article slug already exists".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: &Article) -> DomainResult<Article> {
        let mut rows = self.rows.lock().unwrap();
        Self::ensure_unique(&rows, article)?;
        rows.next_id += 1;
        let id = ArticleId::new(rows.next_id)?;
        let mut stored = article.clone();
        stored.mark_persisted(id);
        rows.by_id.insert(id.0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, article: &Article) -> DomainResult<Article> {
        let id = article
            .id
            .ok_or_else(|| DomainError::Validation("cannot update an unsaved article".into()))?;
        let mut rows = self.rows.lock().unwrap();
        if !rows.by_id.contains_key(&id.0) {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Self::ensure_unique(&rows, article)?;
        let mut stored = article.clone();
        stored.sync_original();
        rows.by_id.insert(id.0, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.by_id
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.rows.lock().unwrap().by_id.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .by_id
            .values()
            .find(|a| a.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Article>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .by_id
            .values()
            .filter(|a| include_drafts || a.published)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SlugRepository<Article> for InMemoryArticleStore {
    async fn exists_by_field(
        &self,
        field: &str,
        value: &Slug,
        excluding: Option<ArticleId>,
    ) -> DomainResult<bool> {
        assert_eq!(field, Article::SLUG);
        self.slug_checks.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .by_id
            .values()
            .any(|a| a.id != excluding && a.slug.as_ref() == Some(value)))
    }
}

/// Slug lookup whose store connection is gone.
pub struct FlakyArticleSlugs;

#[async_trait]
impl SlugRepository<Article> for FlakyArticleSlugs {
    async fn exists_by_field(
        &self,
        _field: &str,
        _value: &Slug,
        _excluding: Option<ArticleId>,
    ) -> DomainResult<bool> {
        Err(DomainError::StoreUnavailable(
            "pool timed out while waiting for an open connection".into(),
        ))
    }
}
