use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// URL-safe identifier: lowercase ASCII words joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::Validation(
                "slug hyphens must separate non-empty words".into(),
            ));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::Validation(format!(
                "slug '{value}' may only contain a-z, 0-9 and '-'"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Bounds how many existence checks a single derivation may issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    pub max_attempts: Option<u32>,
}

impl SlugPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

    pub const fn bounded(max_attempts: u32) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    pub const fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    pub(crate) fn allows(&self, attempts_so_far: u32) -> bool {
        self.max_attempts.is_none_or(|max| attempts_so_far < max)
    }
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self::bounded(Self::DEFAULT_MAX_ATTEMPTS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Creating,
    Updating,
}
