use crate::domain::errors::DomainResult;
use crate::domain::slug::{sluggable::Sluggable, value_objects::Slug};
use async_trait::async_trait;

/// Uniqueness lookup over persisted records of one type.
#[async_trait]
pub trait SlugRepository<R: Sluggable>: Send + Sync {
    async fn exists_by_field(
        &self,
        field: &str,
        value: &Slug,
        excluding: Option<R::Key>,
    ) -> DomainResult<bool>;
}
