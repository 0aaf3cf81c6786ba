use std::collections::BTreeSet;

/// Names of the fields modified in the current write operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirtyFields(BTreeSet<&'static str>);

impl DirtyFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, field: &'static str) {
        self.0.insert(field);
    }

    pub fn is_dirty(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    /// Forget all modifications; called once the write has been persisted.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}
