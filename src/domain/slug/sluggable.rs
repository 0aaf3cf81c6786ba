use crate::domain::slug::value_objects::Slug;
use std::fmt;

/// Accessors a record type supplies so the slug service can derive and
/// assign its slug without knowing the concrete entity.
pub trait Sluggable: Send + Sync {
    type Key: Copy + Eq + fmt::Debug + Send + Sync;

    /// Field the slug derives from, e.g. `"title"`.
    fn source_field_name(&self) -> &'static str;

    fn slug_field_name(&self) -> &'static str {
        "slug"
    }

    fn source_value(&self) -> &str;

    fn slug(&self) -> Option<&Slug>;

    fn assign_slug(&mut self, slug: Slug);

    /// `None` until the record has been persisted.
    fn primary_key(&self) -> Option<Self::Key>;

    fn is_persisted(&self) -> bool {
        self.primary_key().is_some()
    }

    fn is_field_dirty(&self, field: &str) -> bool;
}
