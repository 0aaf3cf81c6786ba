use crate::domain::category::value_objects::{CategoryId, CategoryName};
use crate::domain::slug::{DirtyFields, Slug, Sluggable};
use chrono::{DateTime, Utc};

/// News section such as "DeFi" or "Regulation".
#[derive(Debug, Clone)]
pub struct Category {
    pub id: Option<CategoryId>,
    pub name: CategoryName,
    pub slug: Option<Slug>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    dirty: DirtyFields,
}

impl Category {
    pub const NAME: &'static str = "name";
    pub const SLUG: &'static str = "slug";
    pub const DESCRIPTION: &'static str = "description";

    pub fn draft(name: CategoryName, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name,
            slug: None,
            description: None,
            created_at: now,
            updated_at: now,
            dirty: DirtyFields::new(),
        }
    }

    pub fn into_persisted(mut self, id: CategoryId, slug: Slug) -> Self {
        self.id = Some(id);
        self.slug = Some(slug);
        self.dirty.clear();
        self
    }

    pub fn rename(&mut self, name: CategoryName, now: DateTime<Utc>) {
        if self.name != name {
            self.name = name;
            self.touch(Self::NAME, now);
        }
    }

    /// Explicit slug; always counts as a change so it wins over derivation.
    pub fn set_slug(&mut self, slug: Slug, now: DateTime<Utc>) {
        self.slug = Some(slug);
        self.touch(Self::SLUG, now);
    }

    pub fn set_description(&mut self, description: Option<String>, now: DateTime<Utc>) {
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if self.description != description {
            self.description = description;
            self.touch(Self::DESCRIPTION, now);
        }
    }

    pub fn dirty_fields(&self) -> &DirtyFields {
        &self.dirty
    }

    pub fn mark_persisted(&mut self, id: CategoryId) {
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

impl Sluggable for Category {
    type Key = CategoryId;

    fn source_field_name(&self) -> &'static str {
        Self::NAME
    }

    fn slug_field_name(&self) -> &'static str {
        Self::SLUG
    }

    fn source_value(&self) -> &str {
        self.name.as_str()
    }

    fn slug(&self) -> Option<&Slug> {
        self.slug.as_ref()
    }

    fn assign_slug(&mut self, slug: Slug) {
        self.slug = Some(slug);
        self.dirty.mark(Self::SLUG);
    }

    fn primary_key(&self) -> Option<CategoryId> {
        self.id
    }

    fn is_field_dirty(&self, field: &str) -> bool {
        self.dirty.is_dirty(field)
    }
}
