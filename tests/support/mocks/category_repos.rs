// tests/support/mocks/category_repos.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use coinpress_core::domain::category::{
    Category, CategoryId, CategoryName, CategoryReadRepository, CategoryWriteRepository,
};
use coinpress_core::domain::errors::{DomainError, DomainResult};
use coinpress_core::domain::slug::{Slug, SlugRepository};

#[derive(Default)]
struct Rows {
    by_id: BTreeMap<i64, Category>,
    next_id: i64,
}

/// Category table kept in memory with a unique slug column.
#[derive(Default)]
pub struct InMemoryCategoryStore {
    rows: Mutex<Rows>,
}

impl InMemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, name: &str, slug: &str) -> CategoryId {
        let mut rows = self.rows.lock().unwrap();
        rows.next_id += 1;
        let id = CategoryId::new(rows.next_id).unwrap();
        let category = Category::draft(CategoryName::new(name).unwrap(), super::time::fixed_now())
            .into_persisted(id, Slug::new(slug).unwrap());
        rows.by_id.insert(id.0, category);
        id
    }

    pub fn slug_of(&self, id: CategoryId) -> Option<String> {
        let rows = self.rows.lock().unwrap();
        rows.by_id
            .get(&id.0)
            .and_then(|c| c.slug.as_ref())
            .map(|s| s.as_str().to_string())
    }

    fn ensure_unique(rows: &Rows, category: &Category) -> DomainResult<()> {
        let slug = category
            .slug
            .as_ref()
            .ok_or_else(|| DomainError::Validation("category slug must be assigned".into()))?;
        if rows
            .by_id
            .values()
            .any(|other| other.id != category.id && other.slug.as_ref() == Some(slug))
        {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategoryStore {
    async fn insert(&self, category: &Category) -> DomainResult<Category> {
        let mut rows = self.rows.lock().unwrap();
        Self::ensure_unique(&rows, category)?;
        rows.next_id += 1;
        let id = CategoryId::new(rows.next_id)?;
        let mut stored = category.clone();
        stored.mark_persisted(id);
        rows.by_id.insert(id.0, stored.clone());
        Ok(stored)
    }

    async fn update(&self, category: &Category) -> DomainResult<Category> {
        let id = category
            .id
            .ok_or_else(|| DomainError::Validation("cannot update an unsaved category".into()))?;
        let mut rows = self.rows.lock().unwrap();
        if !rows.by_id.contains_key(&id.0) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Self::ensure_unique(&rows, category)?;
        let mut stored = category.clone();
        stored.sync_original();
        rows.by_id.insert(id.0, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.by_id
            .remove(&id.0)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("category not found".into()))
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategoryStore {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.rows.lock().unwrap().by_id.get(&id.0).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .by_id
            .values()
            .find(|c| c.slug.as_ref() == Some(slug))
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = self.rows.lock().unwrap();
        let mut categories: Vec<Category> = rows.by_id.values().cloned().collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

#[async_trait]
impl SlugRepository<Category> for InMemoryCategoryStore {
    async fn exists_by_field(
        &self,
        field: &str,
        value: &Slug,
        excluding: Option<CategoryId>,
    ) -> DomainResult<bool> {
        assert_eq!(field, Category::SLUG);
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .by_id
            .values()
            .any(|c| c.id != excluding && c.slug.as_ref() == Some(value)))
    }
}
