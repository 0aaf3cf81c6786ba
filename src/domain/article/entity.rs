// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::category::CategoryId;
use crate::domain::slug::{DirtyFields, Slug, Sluggable};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: Option<ArticleId>,
    pub title: ArticleTitle,
    pub slug: Option<Slug>,
    pub body: ArticleBody,
    pub category_id: Option<CategoryId>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    dirty: DirtyFields,
}

impl Article {
    pub const TITLE: &'static str = "title";
    pub const SLUG: &'static str = "slug";
    pub const BODY: &'static str = "body";
    pub const CATEGORY: &'static str = "category_id";
    pub const PUBLISHED: &'static str = "published";

    /// Unsaved article without a slug.
    pub fn draft(title: ArticleTitle, body: ArticleBody, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title,
            slug: None,
            body,
            category_id: None,
            published: false,
            published_at: None,
            created_at: now,
            updated_at: now,
            dirty: DirtyFields::new(),
        }
    }

    /// Rehydrate a stored article; nothing is dirty afterwards.
    pub fn into_persisted(mut self, id: ArticleId, slug: Slug) -> Self {
        self.id = Some(id);
        self.slug = Some(slug);
        self.dirty.clear();
        self
    }

    pub fn set_title(&mut self, title: ArticleTitle, now: DateTime<Utc>) {
        if self.title != title {
            self.title = title;
            self.touch(Self::TITLE, now);
        }
    }

    pub fn set_body(&mut self, body: ArticleBody, now: DateTime<Utc>) {
        if self.body != body {
            self.body = body;
            self.touch(Self::BODY, now);
        }
    }

    /// Explicit slug chosen by the caller; takes precedence over derivation
    /// for the rest of this write.
    /// Marked dirty even when unchanged, so re-sending the stored slug pins it.
    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = Some(slug);
        self.touch(Self::SLUG, now);
    }

    pub fn set_category(&mut self, category_id: Option<CategoryId>, now: DateTime<Utc>) {
        if self.category_id != category_id {
            self.category_id = category_id;
            self.touch(Self::CATEGORY, now);
        }
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        if !self.published {
            self.published = true;
            self.published_at = Some(now);
            self.touch(Self::PUBLISHED, now);
        }
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        if self.published {
            self.published = false;
            self.published_at = None;
            self.touch(Self::PUBLISHED, now);
        }
    }

    pub fn dirty_fields(&self) -> &DirtyFields {
        &self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn mark_persisted(&mut self, id: ArticleId) {
        self.id = Some(id);
        self.dirty.clear();
    }

    pub fn sync_original(&mut self) {
        self.dirty.clear();
    }

    fn touch(&mut self, field: &'static str, now: DateTime<Utc>) {
        self.dirty.mark(field);
        self.updated_at = now;
    }
}

impl Sluggable for Article {
    type Key = ArticleId;

    fn source_field_name(&self) -> &'static str {
        Self::TITLE
    }

    fn slug_field_name(&self) -> &'static str {
        Self::SLUG
    }

    fn source_value(&self) -> &str {
        self.title.as_str()
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
        self.dirty.mark(Self::SLUG);
    }

    fn primary_key(&self) -> Option<ArticleId> {
        self.id
    }

    fn is_field_dirty(&self, field: &str) -> bool {
        self.dirty.is_dirty(field)
    }
}
