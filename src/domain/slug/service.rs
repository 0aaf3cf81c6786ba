// src/domain/slug/service.rs
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::hooks::SaveHook;
use crate::domain::slug::{
    repository::SlugRepository,
    sluggable::Sluggable,
    value_objects::{Slug, SlugPolicy, WriteOperation},
};

/// Domain service responsible for producing unique slugs for one record type.
///
/// Uniqueness is checked against the store and then assigned without a lock,
/// so two concurrent writers may pick the same candidate. The storage-level
/// unique constraint rejects the second write with a conflict.
pub struct SlugService<R: Sluggable> {
    repo: Arc<dyn SlugRepository<R>>,
    generator: Arc<dyn SlugGenerator>,
    policy: SlugPolicy,
    _record: PhantomData<fn() -> R>,
}

impl<R: Sluggable> SlugService<R> {
    pub fn new(
        repo: Arc<dyn SlugRepository<R>>,
        generator: Arc<dyn SlugGenerator>,
        policy: SlugPolicy,
    ) -> Self {
        Self {
            repo,
            generator,
            policy,
            _record: PhantomData,
        }
    }

    /// Derive a slug from the record's source field that no other persisted
    /// record of the same type currently holds.
    pub async fn derive_slug(&self, record: &R) -> DomainResult<Slug> {
        let base = self.generator.slugify(record.source_value());
        let field = record.slug_field_name();
        let excluding = record.primary_key();

        let mut attempts = 0u32;
        let mut suffix = 0u64;

        loop {
            let candidate = match (base.is_empty(), suffix) {
                // an empty base has no bare form, only the suffix
                (true, 0) => {
                    suffix += 1;
                    continue;
                }
                (true, n) => n.to_string(),
                (false, 0) => base.clone(),
                (false, n) => format!("{base}-{n}"),
            };

            if !self.policy.allows(attempts) {
                tracing::warn!(base = %base, attempts, "slug attempts exhausted");
                return Err(DomainError::SlugAttemptsExhausted { base, attempts });
            }
            attempts += 1;

            let slug = Slug::new(candidate)?;
            if !self.repo.exists_by_field(field, &slug, excluding).await? {
                return Ok(slug);
            }

            tracing::debug!(candidate = %slug, "slug collision");
            suffix += 1;
        }
    }

    /// Apply the invocation policy for a single write.
    pub async fn assign(&self, operation: WriteOperation, record: &mut R) -> DomainResult<()> {
        let derive = match operation {
            WriteOperation::Creating => record.slug().is_none(),
            WriteOperation::Updating => {
                if !record.is_persisted() {
                    return Err(DomainError::Validation(
                        "cannot update a record that has not been saved".into(),
                    ));
                }
                record.is_field_dirty(record.source_field_name())
                    && !record.is_field_dirty(record.slug_field_name())
            }
        };

        if derive {
            let slug = self.derive_slug(record).await?;
            tracing::debug!(slug = %slug, ?operation, "assigning derived slug");
            record.assign_slug(slug);
        }

        Ok(())
    }
}

#[async_trait]
impl<R: Sluggable + 'static> SaveHook<R> for SlugService<R> {
    async fn before_create(&self, record: &mut R) -> DomainResult<()> {
        self.assign(WriteOperation::Creating, record).await
    }

    async fn before_update(&self, record: &mut R) -> DomainResult<()> {
        self.assign(WriteOperation::Updating, record).await
    }
}
